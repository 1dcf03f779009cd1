use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::events::SponsorSet;
use crate::state::Pool;

#[derive(Accounts)]
pub struct AcceptSponsor<'info> {
    pub nominee: Signer<'info>,

    #[account(
        mut,
        constraint = pool.pending_sponsor == nominee.key() @ ErrorCode::NotPendingSponsor,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn handler(ctx: Context<AcceptSponsor>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.sponsor = pool.pending_sponsor;
    pool.pending_sponsor = Pubkey::default();

    let clock = Clock::get()?;
    emit!(SponsorSet {
        pool: ctx.accounts.pool.key(),
        sponsor: ctx.accounts.pool.sponsor,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
