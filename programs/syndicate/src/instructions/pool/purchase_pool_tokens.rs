use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolTokensPurchased;
use crate::math::fixed_point::to_canonical;
use crate::state::{Pool, PoolPosition};

#[derive(Accounts)]
pub struct PurchasePoolTokens<'info> {
    #[account(mut)]
    pub purchaser: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = purchaser,
        space = PoolPosition::LEN,
        seeds = [POSITION_SEED, pool.key().as_ref(), purchaser.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, PoolPosition>>,

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
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchasePoolTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let pool = &ctx.accounts.pool;
    require!(!pool.has_deal, ErrorCode::DealAlreadyExists);
    require!(pool.purchase_open(now), ErrorCode::PurchaseWindowClosed);

    let new_total = pool
        .total_purchased
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    if pool.purchase_token_cap > 0 {
        require!(new_total <= pool.purchase_token_cap, ErrorCode::CapExceeded);
    }

    let minted = to_canonical(amount, pool.purchase_token_decimals)?;

    // Pull the purchase tokens into the vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.purchaser_token_account.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.purchaser.to_account_info(),
            },
        ),
        amount,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.total_purchased = new_total;
    pool.total_position_supply = pool
        .total_position_supply
        .checked_add(minted)
        .ok_or(ErrorCode::MathOverflow)?;

    // Mint the position balance
    let position = &mut ctx.accounts.position;
    if position.owner == Pubkey::default() {
        position.owner = ctx.accounts.purchaser.key();
        position.pool = pool_key;
        position.bump = ctx.bumps.position;
        position.delegate = Pubkey::default();
        position.delegated_amount = 0;
        position.accepted = 0;
        position.open_eligible = false;
        position._reserved = [0u8; 32];
    }
    position.balance = position
        .balance
        .checked_add(minted)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(PoolTokensPurchased {
        pool: pool_key,
        purchaser: ctx.accounts.purchaser.key(),
        amount,
        position_minted: minted,
        total_purchased: new_total,
        timestamp: now,
    });

    Ok(())
}
