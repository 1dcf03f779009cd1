use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::DealTokensAccepted;
use crate::math::conversion::{remaining_pro_rata, split_fee, underlying_for_purchase};
use crate::math::fixed_point::{canonical_scale, from_canonical, to_canonical};
use crate::state::{Deal, DealClaim, Pool, PoolPosition, RedemptionPhase};

#[derive(Accounts)]
pub struct AcceptDealTokens<'info> {
    #[account(mut)]
    pub purchaser: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [DEAL_SEED, pool.key().as_ref()],
        bump = deal.bump,
    )]
    pub deal: Box<Account<'info, Deal>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), purchaser.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == purchaser.key() @ ErrorCode::Unauthorized,
    )]
    pub position: Box<Account<'info, PoolPosition>>,

    #[account(
        init_if_needed,
        payer = purchaser,
        space = DealClaim::LEN,
        seeds = [CLAIM_SEED, deal.key().as_ref(), purchaser.key().as_ref()],
        bump,
    )]
    pub claim: Box<Account<'info, DealClaim>>,

    #[account(
        mut,
        constraint = pool_vault.key() == pool.vault @ ErrorCode::InvalidParameter,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// The holder is paid the accepted purchase tokens at convert time
    #[account(
        mut,
        constraint = holder_token_account.owner == deal.holder @ ErrorCode::InvalidParameter,
        constraint = holder_token_account.mint == pool.purchase_mint @ ErrorCode::InvalidParameter,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AcceptDealTokens>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    accept(ctx, amount, clock.unix_timestamp)
}

pub fn handler_max(ctx: Context<AcceptDealTokens>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let deal = &ctx.accounts.deal;
    let position = &ctx.accounts.position;
    let available = match deal.redemption_phase(now) {
        RedemptionPhase::ProRata => deal.max_pro_rata_available(position)?,
        RedemptionPhase::Open => {
            require!(position.open_eligible, ErrorCode::OpenPeriodIneligible);
            position.balance.min(deal.remaining_capacity()?)
        }
        _ => return Err(ErrorCode::OutsideRedeemWindow.into()),
    };
    let amount = from_canonical(available, ctx.accounts.pool.purchase_token_decimals)?;
    accept(ctx, amount, now)
}

fn accept(ctx: Context<AcceptDealTokens>, amount: u64, now: i64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &ctx.accounts.pool;
    let deal = &ctx.accounts.deal;
    let position = &ctx.accounts.position;

    let decimals = pool.purchase_token_decimals;
    let accepted_canonical = to_canonical(amount, decimals)?;
    let phase = deal.redemption_phase(now);

    match phase {
        RedemptionPhase::ProRata => {
            let remaining = deal.max_pro_rata_available(position)?;
            require!(
                accepted_canonical <= remaining,
                ErrorCode::AcceptingMoreThanShare
            );
        }
        RedemptionPhase::Open => {
            require!(position.open_eligible, ErrorCode::OpenPeriodIneligible);
            require!(
                accepted_canonical <= position.balance,
                ErrorCode::InsufficientBalance
            );
            require!(
                accepted_canonical <= deal.remaining_capacity()?,
                ErrorCode::AcceptingMoreThanShare
            );
        }
        _ => return Err(ErrorCode::OutsideRedeemWindow.into()),
    }

    let gross = underlying_for_purchase(accepted_canonical, deal.exchange_rate)?;
    let (net, fee) = split_fee(gross, deal.fee_numerator, deal.fee_base)?;

    // Capture keys and signer seed material before mutating
    let deal_key = ctx.accounts.deal.key();
    let creator = ctx.accounts.pool.creator;
    let name = ctx.accounts.pool.name.clone();
    let pool_bump = ctx.accounts.pool.bump;
    let conversion = ctx.accounts.deal.pro_rata_conversion;

    // Burn the accepted position
    let position = &mut ctx.accounts.position;
    position.balance = position
        .balance
        .checked_sub(accepted_canonical)
        .ok_or(ErrorCode::MathUnderflow)?;
    position.accepted = position
        .accepted
        .checked_add(accepted_canonical)
        .ok_or(ErrorCode::MathOverflow)?;
    if phase == RedemptionPhase::ProRata && !position.open_eligible {
        // A remainder smaller than one raw purchase unit counts as maxed
        let left = remaining_pro_rata(position.balance, position.accepted, conversion)?;
        if left < canonical_scale(decimals)? {
            position.open_eligible = true;
        }
    }

    let pool = &mut ctx.accounts.pool;
    pool.total_position_supply = pool
        .total_position_supply
        .checked_sub(accepted_canonical)
        .ok_or(ErrorCode::MathUnderflow)?;
    pool.total_purchased = pool
        .total_purchased
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let deal = &mut ctx.accounts.deal;
    deal.total_purchase_accepted = deal
        .total_purchase_accepted
        .checked_add(accepted_canonical)
        .ok_or(ErrorCode::MathOverflow)?;
    deal.total_claims_minted = deal
        .total_claims_minted
        .checked_add(net)
        .ok_or(ErrorCode::MathOverflow)?;
    deal.total_fee_accrued = deal
        .total_fee_accrued
        .checked_add(fee)
        .ok_or(ErrorCode::MathOverflow)?;

    // Mint the claim balance
    let claim = &mut ctx.accounts.claim;
    if claim.owner == Pubkey::default() {
        claim.owner = ctx.accounts.purchaser.key();
        claim.deal = deal_key;
        claim.bump = ctx.bumps.claim;
        claim._reserved = [0u8; 32];
    }
    claim.claim_balance = claim
        .claim_balance
        .checked_add(net)
        .ok_or(ErrorCode::MathOverflow)?;

    // Pay the holder the accepted purchase tokens
    let seeds = &[POOL_SEED, creator.as_ref(), name.as_bytes(), &[pool_bump]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.holder_token_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(DealTokensAccepted {
        deal: deal_key,
        purchaser: ctx.accounts.purchaser.key(),
        purchase_amount: amount,
        claim_minted: net,
        fee_accrued: fee,
        timestamp: now,
    });

    Ok(())
}
