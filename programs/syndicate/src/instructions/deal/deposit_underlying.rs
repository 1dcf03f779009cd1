use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{DealFullyFunded, UnderlyingDeposited};
use crate::state::{Deal, Pool};

#[derive(Accounts)]
pub struct DepositUnderlying<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        constraint = pool.key() == deal.pool @ ErrorCode::InvalidParameter,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [DEAL_SEED, pool.key().as_ref()],
        bump = deal.bump,
        constraint = deal.holder == holder.key() @ ErrorCode::NotHolder,
    )]
    pub deal: Box<Account<'info, Deal>>,

    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::Unauthorized,
        constraint = holder_token_account.mint == deal.underlying_mint @ ErrorCode::InvalidParameter,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = deal_vault.key() == deal.underlying_vault @ ErrorCode::InvalidParameter,
    )]
    pub deal_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<DepositUnderlying>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let deal = &ctx.accounts.deal;
    require!(!deal.deposit_complete, ErrorCode::DepositAlreadyComplete);
    require!(
        now < deal.holder_funding_deadline,
        ErrorCode::FundingDeadlinePassed
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.holder_token_account.to_account_info(),
                to: ctx.accounts.deal_vault.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        amount,
    )?;

    let deal_key = ctx.accounts.deal.key();
    let deal = &mut ctx.accounts.deal;
    deal.total_deposited = deal
        .total_deposited
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(UnderlyingDeposited {
        deal: deal_key,
        holder: ctx.accounts.holder.key(),
        amount,
        total_deposited: deal.total_deposited,
        timestamp: now,
    });

    // Hitting the underlying total opens the redemption windows and freezes
    // position transfers on the pool side.
    if deal.total_deposited >= deal.underlying_total {
        deal.start_redemption(now)?;
        ctx.accounts.pool.redemption_started = true;

        let deal = &ctx.accounts.deal;
        emit!(DealFullyFunded {
            deal: deal_key,
            pro_rata_start: deal.pro_rata_start,
            pro_rata_end: deal.pro_rata_end,
            open_start: deal.open_start,
            open_end: deal.open_end,
            vesting_cliff_at: deal.vesting_cliff_at,
            timestamp: now,
        });
    }

    Ok(())
}
