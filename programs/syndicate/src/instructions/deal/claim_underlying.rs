use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::UnderlyingClaimed;
use crate::math::fixed_point::{from_canonical, to_canonical};
use crate::state::{Deal, DealClaim};

#[derive(Accounts)]
pub struct ClaimUnderlying<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [DEAL_SEED, deal.pool.as_ref()],
        bump = deal.bump,
    )]
    pub deal: Box<Account<'info, Deal>>,

    #[account(
        mut,
        seeds = [CLAIM_SEED, deal.key().as_ref(), participant.key().as_ref()],
        bump = claim.bump,
        constraint = claim.owner == participant.key() @ ErrorCode::Unauthorized,
    )]
    pub claim: Box<Account<'info, DealClaim>>,

    #[account(
        mut,
        constraint = recipient_token_account.owner == participant.key() @ ErrorCode::Unauthorized,
        constraint = recipient_token_account.mint == deal.underlying_mint @ ErrorCode::InvalidParameter,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = deal_vault.key() == deal.underlying_vault @ ErrorCode::InvalidParameter,
    )]
    pub deal_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimUnderlying>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let deal = &ctx.accounts.deal;
    let claim = &ctx.accounts.claim;
    require!(deal.deposit_complete, ErrorCode::DealNotFunded);

    let claimable = deal.claimable_tokens(claim, now)?;
    let amount = from_canonical(claimable, deal.underlying_decimals)?;
    require!(amount > 0, ErrorCode::NothingToClaim);

    // Advance the ledgers by what actually leaves the vault
    let released = to_canonical(amount, deal.underlying_decimals)?;

    let deal_key = ctx.accounts.deal.key();
    let pool_key = deal.pool;
    let bump = deal.bump;

    let claim = &mut ctx.accounts.claim;
    claim.claimed_so_far = claim
        .claimed_so_far
        .checked_add(released)
        .ok_or(ErrorCode::MathOverflow)?;

    let deal = &mut ctx.accounts.deal;
    deal.total_underlying_claimed = deal
        .total_underlying_claimed
        .checked_add(released)
        .ok_or(ErrorCode::MathOverflow)?;

    let seeds = &[DEAL_SEED, pool_key.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.deal_vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.deal.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(UnderlyingClaimed {
        deal: deal_key,
        recipient: ctx.accounts.participant.key(),
        amount,
        claimed_so_far: ctx.accounts.claim.claimed_so_far,
        timestamp: now,
    });

    Ok(())
}
