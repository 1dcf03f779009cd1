use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::HolderSet;
use crate::state::Deal;

#[derive(Accounts)]
pub struct AcceptHolder<'info> {
    pub nominee: Signer<'info>,

    #[account(
        mut,
        seeds = [DEAL_SEED, deal.pool.as_ref()],
        bump = deal.bump,
        constraint = deal.pending_holder == nominee.key() @ ErrorCode::NotPendingHolder,
    )]
    pub deal: Box<Account<'info, Deal>>,
}

pub fn handler(ctx: Context<AcceptHolder>) -> Result<()> {
    let deal = &mut ctx.accounts.deal;
    deal.holder = deal.pending_holder;
    deal.pending_holder = Pubkey::default();

    let clock = Clock::get()?;
    emit!(HolderSet {
        deal: ctx.accounts.deal.key(),
        holder: ctx.accounts.deal.holder,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
