use anchor_lang::prelude::*;

/// A contributor's stake in a pool: the internal position-token ledger entry.
/// Balances are canonical 18-decimal, one unit per purchase-token unit
/// contributed. Allowance is SPL-style: a single delegate with a spend cap.
#[account]
pub struct PoolPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub bump: u8,

    pub balance: u128, // canonical

    // Allowance
    pub delegate: Pubkey,
    pub delegated_amount: u128,

    // Redemption accounting
    pub accepted: u128, // canonical purchase value converted into the deal
    pub open_eligible: bool,

    // Reserved
    pub _reserved: [u8; 32],
}

impl PoolPosition {
    pub const LEN: usize = 8  // discriminator
        + 32  // owner
        + 32  // pool
        + 1   // bump
        + 16  // balance
        + 32  // delegate
        + 16  // delegated_amount
        + 16  // accepted
        + 1   // open_eligible
        + 32; // reserved
}
