use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PositionTransferred;
use crate::state::{Pool, PoolPosition};

#[derive(Accounts)]
pub struct TransferPosition<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = from_position.bump,
        constraint = from_position.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub from_position: Box<Account<'info, PoolPosition>>,

    /// CHECK: recipient identity, only used as a PDA seed
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = PoolPosition::LEN,
        seeds = [POSITION_SEED, pool.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub to_position: Box<Account<'info, PoolPosition>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferPosition>, amount: u128) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        !ctx.accounts.pool.redemption_started,
        ErrorCode::NoTransfersAfterRedeem
    );
    require!(
        ctx.accounts.from_position.balance >= amount,
        ErrorCode::InsufficientBalance
    );

    let pool_key = ctx.accounts.pool.key();
    let recipient_key = ctx.accounts.recipient.key();

    let from = &mut ctx.accounts.from_position;
    from.balance = from
        .balance
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let to = &mut ctx.accounts.to_position;
    if to.owner == Pubkey::default() {
        to.owner = recipient_key;
        to.pool = pool_key;
        to.bump = ctx.bumps.to_position;
        to.delegate = Pubkey::default();
        to.delegated_amount = 0;
        to.accepted = 0;
        to.open_eligible = false;
        to._reserved = [0u8; 32];
    }
    to.balance = to
        .balance
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    let clock = Clock::get()?;
    emit!(PositionTransferred {
        pool: pool_key,
        from: ctx.accounts.owner.key(),
        to: recipient_key,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
