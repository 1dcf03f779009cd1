use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::WithdrawnFromPool;
use crate::math::fixed_point::{from_canonical, to_canonical};
use crate::state::{Deal, Pool, PoolPosition};

#[derive(Accounts)]
pub struct WithdrawFromPool<'info> {
    #[account(mut)]
    pub purchaser: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), purchaser.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == purchaser.key() @ ErrorCode::Unauthorized,
    )]
    pub position: Box<Account<'info, PoolPosition>>,

    /// Required once a deal exists; its windows decide whether refunds are open
    #[account(
        seeds = [DEAL_SEED, pool.key().as_ref()],
        bump = deal.bump,
    )]
    pub deal: Option<Box<Account<'info, Deal>>>,

    #[account(
        mut,
        constraint = purchaser_token_account.owner == purchaser.key() @ ErrorCode::Unauthorized,
        constraint = purchaser_token_account.mint == pool.purchase_mint @ ErrorCode::InvalidParameter,
    )]
    pub purchaser_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = pool_vault.key() == pool.vault @ ErrorCode::InvalidParameter,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawFromPool>, amount: u64) -> Result<()> {
    withdraw(ctx, amount)
}

pub fn handler_max(ctx: Context<WithdrawFromPool>) -> Result<()> {
    let amount = from_canonical(
        ctx.accounts.position.balance,
        ctx.accounts.pool.purchase_token_decimals,
    )?;
    withdraw(ctx, amount)
}

fn withdraw(ctx: Context<WithdrawFromPool>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let pool = &ctx.accounts.pool;
    if pool.has_deal {
        // Refunds unlock when the holder misses the funding deadline, or once
        // the open redemption window has fully elapsed (unaccepted remainder).
        let deal = ctx
            .accounts
            .deal
            .as_ref()
            .ok_or(ErrorCode::InvalidParameter)?;
        let refunds_open = if !deal.deposit_complete {
            now >= deal.holder_funding_deadline
        } else {
            now > deal.open_end
        };
        require!(refunds_open, ErrorCode::WithdrawNotOpen);
    }

    let burned = to_canonical(amount, pool.purchase_token_decimals)?;
    require!(
        ctx.accounts.position.balance >= burned,
        ErrorCode::InsufficientBalance
    );

    // Capture signer seed material before mutating
    let pool_key = ctx.accounts.pool.key();
    let creator = ctx.accounts.pool.creator;
    let name = ctx.accounts.pool.name.clone();
    let bump = ctx.accounts.pool.bump;

    let position = &mut ctx.accounts.position;
    position.balance = position
        .balance
        .checked_sub(burned)
        .ok_or(ErrorCode::MathUnderflow)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_position_supply = pool
        .total_position_supply
        .checked_sub(burned)
        .ok_or(ErrorCode::MathUnderflow)?;
    pool.total_purchased = pool
        .total_purchased
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let seeds = &[POOL_SEED, creator.as_ref(), name.as_bytes(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.purchaser_token_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(WithdrawnFromPool {
        pool: pool_key,
        purchaser: ctx.accounts.purchaser.key(),
        amount,
        position_burned: burned,
        timestamp: now,
    });

    Ok(())
}
