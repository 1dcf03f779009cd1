use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::HolderWithdrawn;
use crate::math::fixed_point::{from_canonical, to_canonical};
use crate::state::Deal;

#[derive(Accounts)]
pub struct WithdrawUnderlying<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [DEAL_SEED, deal.pool.as_ref()],
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

pub fn handler(ctx: Context<WithdrawUnderlying>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let deal = &ctx.accounts.deal;
    let vault_canonical = to_canonical(ctx.accounts.deal_vault.amount, deal.underlying_decimals)?;
    let available = deal.holder_withdrawable(vault_canonical, now)?;
    let amount = from_canonical(available, deal.underlying_decimals)?;
    require!(amount > 0, ErrorCode::NothingToWithdraw);

    let pool_key = deal.pool;
    let bump = deal.bump;
    let seeds = &[DEAL_SEED, pool_key.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.deal_vault.to_account_info(),
                to: ctx.accounts.holder_token_account.to_account_info(),
                authority: ctx.accounts.deal.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(HolderWithdrawn {
        deal: ctx.accounts.deal.key(),
        holder: ctx.accounts.holder.key(),
        amount,
        timestamp: now,
    });

    Ok(())
}
