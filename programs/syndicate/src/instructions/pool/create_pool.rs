use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolCreated;
use crate::state::Pool;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreatePoolParams {
    pub name: String,
    pub symbol: String,
    pub purchase_token_cap: u64, // 0 = uncapped
    pub duration: i64,           // seconds after the purchase window closes
    pub sponsor_fee_bps: u64,
    pub purchase_window: i64, // seconds
}

#[derive(Accounts)]
#[instruction(params: CreatePoolParams)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub sponsor: Signer<'info>,

    #[account(
        init,
        payer = sponsor,
        space = Pool::LEN,
        seeds = [POOL_SEED, sponsor.key().as_ref(), params.name.as_bytes()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub purchase_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = sponsor,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = purchase_mint,
        token::authority = pool,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
    require!(
        params.name.len() <= MAX_NAME_LEN && params.symbol.len() <= MAX_SYMBOL_LEN,
        ErrorCode::NameTooLong
    );
    require!(
        params.sponsor_fee_bps <= MAX_SPONSOR_FEE_BPS,
        ErrorCode::FeeExceedsMaximum
    );
    require!(
        params.duration > 0 && params.duration <= MAX_POOL_DURATION,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        params.purchase_window >= MIN_PURCHASE_WINDOW
            && params.purchase_window <= MAX_PURCHASE_WINDOW,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        ctx.accounts.purchase_mint.decimals <= CANONICAL_DECIMALS,
        ErrorCode::UnsupportedDecimals
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    pool.creator = ctx.accounts.sponsor.key();
    pool.sponsor = ctx.accounts.sponsor.key();
    pool.pending_sponsor = Pubkey::default();
    pool.bump = ctx.bumps.pool;
    pool.name = params.name;
    pool.symbol = params.symbol;
    pool.purchase_mint = ctx.accounts.purchase_mint.key();
    pool.purchase_token_decimals = ctx.accounts.purchase_mint.decimals;
    pool.purchase_token_cap = params.purchase_token_cap;
    pool.vault = ctx.accounts.pool_vault.key();
    pool.sponsor_fee_bps = params.sponsor_fee_bps;
    pool.purchase_window_end = now
        .checked_add(params.purchase_window)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.pool_expiry = pool
        .purchase_window_end
        .checked_add(params.duration)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.total_purchased = 0;
    pool.total_position_supply = 0;
    pool.deal = Pubkey::default();
    pool.has_deal = false;
    pool.redemption_started = false;
    pool.created_at = now;
    pool._reserved = [0u8; 64];

    emit!(PoolCreated {
        pool: ctx.accounts.pool.key(),
        sponsor: ctx.accounts.sponsor.key(),
        purchase_mint: ctx.accounts.purchase_mint.key(),
        purchase_token_cap: ctx.accounts.pool.purchase_token_cap,
        sponsor_fee_bps: ctx.accounts.pool.sponsor_fee_bps,
        purchase_window_end: ctx.accounts.pool.purchase_window_end,
        pool_expiry: ctx.accounts.pool.pool_expiry,
        timestamp: now,
    });

    Ok(())
}
