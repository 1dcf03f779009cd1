use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::HolderNominated;
use crate::state::Deal;

#[derive(Accounts)]
pub struct SetHolder<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [DEAL_SEED, deal.pool.as_ref()],
        bump = deal.bump,
        constraint = deal.holder == holder.key() @ ErrorCode::NotHolder,
    )]
    pub deal: Box<Account<'info, Deal>>,
}

pub fn handler(ctx: Context<SetHolder>, nominee: Pubkey) -> Result<()> {
    require!(nominee != Pubkey::default(), ErrorCode::InvalidParameter);

    let deal = &mut ctx.accounts.deal;
    deal.pending_holder = nominee;

    let clock = Clock::get()?;
    emit!(HolderNominated {
        deal: ctx.accounts.deal.key(),
        nominee,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
