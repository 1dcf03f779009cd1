use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::DealCreated;
use crate::math::conversion::{exchange_rate, fee_numerator, pro_rata_conversion};
use crate::state::{Deal, Pool};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateDealParams {
    pub purchase_token_total_for_deal: u64,
    pub underlying_total: u64,
    pub vesting_period: i64,
    pub vesting_cliff: i64, // duration past the open window's end
    pub pro_rata_duration: i64,
    pub open_duration: i64,
    pub holder: Pubkey,
    pub holder_funding_deadline: i64, // absolute timestamp
}

#[derive(Accounts)]
pub struct CreateDeal<'info> {
    #[account(mut)]
    pub sponsor: Signer<'info>,

    #[account(
        mut,
        constraint = pool.sponsor == sponsor.key() @ ErrorCode::NotSponsor,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = sponsor,
        space = Deal::LEN,
        seeds = [DEAL_SEED, pool.key().as_ref()],
        bump,
    )]
    pub deal: Box<Account<'info, Deal>>,

    pub underlying_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = sponsor,
        seeds = [DEAL_VAULT_SEED, deal.key().as_ref()],
        bump,
        token::mint = underlying_mint,
        token::authority = deal,
    )]
    pub deal_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = pool_vault.key() == pool.vault @ ErrorCode::InvalidParameter,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<CreateDeal>, params: CreateDealParams) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let pool = &ctx.accounts.pool;
    require!(!pool.has_deal, ErrorCode::DealAlreadyExists);
    require!(now < pool.pool_expiry, ErrorCode::PoolExpired);
    require!(pool.deal_creatable(now), ErrorCode::PurchaseWindowOpen);

    require!(
        params.pro_rata_duration >= MIN_PRO_RATA_DURATION
            && params.pro_rata_duration <= MAX_REDEMPTION_DURATION,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        params.open_duration >= 0 && params.open_duration <= MAX_REDEMPTION_DURATION,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        params.vesting_cliff >= 0 && params.vesting_cliff <= MAX_VESTING_CLIFF,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        params.vesting_period >= 0 && params.vesting_period <= MAX_VESTING_PERIOD,
        ErrorCode::DurationOutOfBounds
    );
    require!(
        params.holder_funding_deadline > now
            && params.holder_funding_deadline
                <= now
                    .checked_add(MAX_HOLDER_FUNDING_DURATION)
                    .ok_or(ErrorCode::MathOverflow)?,
        ErrorCode::DurationOutOfBounds
    );
    require!(params.holder != Pubkey::default(), ErrorCode::InvalidParameter);
    require!(
        params.underlying_total > 0 && params.purchase_token_total_for_deal > 0,
        ErrorCode::InvalidAmount
    );
    require!(
        ctx.accounts.underlying_mint.decimals <= CANONICAL_DECIMALS,
        ErrorCode::UnsupportedDecimals
    );
    require!(
        ctx.accounts.pool_vault.amount >= params.purchase_token_total_for_deal
            && pool.total_purchased >= params.purchase_token_total_for_deal,
        ErrorCode::InsufficientPoolFunds
    );

    let rate = exchange_rate(
        params.underlying_total,
        ctx.accounts.underlying_mint.decimals,
        params.purchase_token_total_for_deal,
        pool.purchase_token_decimals,
    )?;
    let conversion = pro_rata_conversion(params.purchase_token_total_for_deal, pool.total_purchased)?;
    let numerator = fee_numerator(pool.sponsor_fee_bps)?;

    let pool_key = ctx.accounts.pool.key();
    let deal_key = ctx.accounts.deal.key();
    let purchase_decimals = pool.purchase_token_decimals;

    let deal = &mut ctx.accounts.deal;
    deal.pool = pool_key;
    deal.holder = params.holder;
    deal.pending_holder = Pubkey::default();
    deal.bump = ctx.bumps.deal;
    deal.underlying_mint = ctx.accounts.underlying_mint.key();
    deal.underlying_decimals = ctx.accounts.underlying_mint.decimals;
    deal.underlying_vault = ctx.accounts.deal_vault.key();
    deal.underlying_total = params.underlying_total;
    deal.purchase_token_total_for_deal = params.purchase_token_total_for_deal;
    deal.purchase_token_decimals = purchase_decimals;
    deal.holder_funding_deadline = params.holder_funding_deadline;
    deal.total_deposited = 0;
    deal.deposit_complete = false;
    deal.pro_rata_start = 0;
    deal.pro_rata_end = 0;
    deal.open_start = 0;
    deal.open_end = 0;
    deal.pro_rata_duration = params.pro_rata_duration;
    deal.open_duration = params.open_duration;
    deal.vesting_cliff_duration = params.vesting_cliff;
    deal.vesting_period = params.vesting_period;
    deal.vesting_cliff_at = 0;
    deal.exchange_rate = rate;
    deal.pro_rata_conversion = conversion;
    deal.fee_numerator = numerator;
    deal.fee_base = BPS_DENOMINATOR;
    deal.total_purchase_accepted = 0;
    deal.total_claims_minted = 0;
    deal.total_fee_accrued = 0;
    deal.total_underlying_claimed = 0;
    deal.created_at = now;
    deal._reserved = [0u8; 64];

    let pool = &mut ctx.accounts.pool;
    pool.has_deal = true;
    pool.deal = deal_key;

    emit!(DealCreated {
        pool: pool_key,
        deal: deal_key,
        holder: params.holder,
        underlying_mint: ctx.accounts.underlying_mint.key(),
        underlying_total: params.underlying_total,
        purchase_token_total_for_deal: params.purchase_token_total_for_deal,
        exchange_rate: rate,
        holder_funding_deadline: params.holder_funding_deadline,
        timestamp: now,
    });

    Ok(())
}
