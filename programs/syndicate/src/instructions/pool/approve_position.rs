use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PositionApproved;
use crate::state::{Pool, PoolPosition};

#[derive(Accounts)]
pub struct ApprovePosition<'info> {
    pub owner: Signer<'info>,

    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub position: Box<Account<'info, PoolPosition>>,
}

pub fn handler(ctx: Context<ApprovePosition>, delegate: Pubkey, amount: u128) -> Result<()> {
    let position = &mut ctx.accounts.position;
    position.delegate = delegate;
    position.delegated_amount = amount;

    let clock = Clock::get()?;
    emit!(PositionApproved {
        pool: ctx.accounts.pool.key(),
        owner: ctx.accounts.owner.key(),
        delegate,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
