#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod math;
pub mod instructions;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod syndicate {
    use super::*;

    // ── Pool funding ────────────────────────────────────────

    pub fn create_pool(
        ctx: Context<CreatePool>,
        params: instructions::pool::create_pool::CreatePoolParams,
    ) -> Result<()> {
        instructions::pool::create_pool::handler(ctx, params)
    }

    pub fn purchase_pool_tokens(ctx: Context<PurchasePoolTokens>, amount: u64) -> Result<()> {
        instructions::pool::purchase_pool_tokens::handler(ctx, amount)
    }

    pub fn withdraw_from_pool(ctx: Context<WithdrawFromPool>, amount: u64) -> Result<()> {
        instructions::pool::withdraw_from_pool::handler(ctx, amount)
    }

    pub fn withdraw_max_from_pool(ctx: Context<WithdrawFromPool>) -> Result<()> {
        instructions::pool::withdraw_from_pool::handler_max(ctx)
    }

    // ── Position ledger ─────────────────────────────────────

    pub fn transfer_position(ctx: Context<TransferPosition>, amount: u128) -> Result<()> {
        instructions::pool::transfer_position::handler(ctx, amount)
    }

    pub fn approve_position(
        ctx: Context<ApprovePosition>,
        delegate: Pubkey,
        amount: u128,
    ) -> Result<()> {
        instructions::pool::approve_position::handler(ctx, delegate, amount)
    }

    pub fn transfer_position_from(ctx: Context<TransferPositionFrom>, amount: u128) -> Result<()> {
        instructions::pool::transfer_position_from::handler(ctx, amount)
    }

    // ── Sponsor handover ────────────────────────────────────

    pub fn nominate_sponsor(ctx: Context<NominateSponsor>, nominee: Pubkey) -> Result<()> {
        instructions::pool::nominate_sponsor::handler(ctx, nominee)
    }

    pub fn accept_sponsor(ctx: Context<AcceptSponsor>) -> Result<()> {
        instructions::pool::accept_sponsor::handler(ctx)
    }

    // ── Deal lifecycle ──────────────────────────────────────

    pub fn create_deal(
        ctx: Context<CreateDeal>,
        params: instructions::pool::create_deal::CreateDealParams,
    ) -> Result<()> {
        instructions::pool::create_deal::handler(ctx, params)
    }

    pub fn accept_deal_tokens(ctx: Context<AcceptDealTokens>, amount: u64) -> Result<()> {
        instructions::pool::accept_deal_tokens::handler(ctx, amount)
    }

    pub fn accept_max_deal_tokens(ctx: Context<AcceptDealTokens>) -> Result<()> {
        instructions::pool::accept_deal_tokens::handler_max(ctx)
    }

    pub fn deposit_underlying(ctx: Context<DepositUnderlying>, amount: u64) -> Result<()> {
        instructions::deal::deposit_underlying::handler(ctx, amount)
    }

    pub fn withdraw_underlying(ctx: Context<WithdrawUnderlying>) -> Result<()> {
        instructions::deal::withdraw_underlying::handler(ctx)
    }

    pub fn withdraw_expiry(ctx: Context<WithdrawExpiry>) -> Result<()> {
        instructions::deal::withdraw_expiry::handler(ctx)
    }

    pub fn claim_underlying(ctx: Context<ClaimUnderlying>) -> Result<()> {
        instructions::deal::claim_underlying::handler(ctx)
    }

    // ── Holder handover ─────────────────────────────────────

    pub fn set_holder(ctx: Context<SetHolder>, nominee: Pubkey) -> Result<()> {
        instructions::deal::set_holder::handler(ctx, nominee)
    }

    pub fn accept_holder(ctx: Context<AcceptHolder>) -> Result<()> {
        instructions::deal::accept_holder::handler(ctx)
    }
}
