use anchor_lang::prelude::*;
use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};

#[account]
pub struct Pool {
    /// Seed identity; never changes after creation (sponsor can be handed over)
    pub creator: Pubkey,
    pub sponsor: Pubkey,
    pub pending_sponsor: Pubkey,
    pub bump: u8,

    pub name: String,
    pub symbol: String,

    // Funding token configuration
    pub purchase_mint: Pubkey,
    pub purchase_token_decimals: u8,
    pub purchase_token_cap: u64, // raw units, 0 = uncapped
    pub vault: Pubkey,

    // Terms
    pub sponsor_fee_bps: u64,
    pub purchase_window_end: i64,
    pub pool_expiry: i64,

    // Accounting
    pub total_purchased: u64,        // raw units, net of withdrawals
    pub total_position_supply: u128, // canonical

    // Deal linkage
    pub deal: Pubkey,
    pub has_deal: bool,
    pub redemption_started: bool,

    pub created_at: i64,

    // Reserved for future use
    pub _reserved: [u8; 64],
}

impl Pool {
    pub const LEN: usize = 8  // discriminator
        + 32  // creator
        + 32  // sponsor
        + 32  // pending_sponsor
        + 1   // bump
        + 4 + MAX_NAME_LEN   // name
        + 4 + MAX_SYMBOL_LEN // symbol
        + 32  // purchase_mint
        + 1   // purchase_token_decimals
        + 8   // purchase_token_cap
        + 32  // vault
        + 8   // sponsor_fee_bps
        + 8   // purchase_window_end
        + 8   // pool_expiry
        + 8   // total_purchased
        + 16  // total_position_supply
        + 32  // deal
        + 1   // has_deal
        + 1   // redemption_started
        + 8   // created_at
        + 64; // reserved

    /// Contributions are accepted only before the window closes and before
    /// any deal freezes the pool's terms.
    pub fn purchase_open(&self, now: i64) -> bool {
        !self.has_deal && now < self.purchase_window_end
    }

    /// The sponsor may strike a deal once the purchase window has run its
    /// course (or the cap filled it early), up to pool expiry.
    pub fn deal_creatable(&self, now: i64) -> bool {
        if self.has_deal || now >= self.pool_expiry {
            return false;
        }
        let cap_filled = self.purchase_token_cap > 0 && self.total_purchased >= self.purchase_token_cap;
        now >= self.purchase_window_end || cap_filled
    }
}
