use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::events::SponsorNominated;
use crate::state::Pool;

#[derive(Accounts)]
pub struct NominateSponsor<'info> {
    pub sponsor: Signer<'info>,

    #[account(
        mut,
        constraint = pool.sponsor == sponsor.key() @ ErrorCode::NotSponsor,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn handler(ctx: Context<NominateSponsor>, nominee: Pubkey) -> Result<()> {
    require!(nominee != Pubkey::default(), ErrorCode::InvalidParameter);

    let pool = &mut ctx.accounts.pool;
    pool.pending_sponsor = nominee;

    let clock = Clock::get()?;
    emit!(SponsorNominated {
        pool: ctx.accounts.pool.key(),
        nominee,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
