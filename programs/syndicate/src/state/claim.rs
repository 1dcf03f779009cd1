use anchor_lang::prelude::*;

/// A participant's vesting entitlement in a deal. Claim balances are never
/// transferable; only the claim path moves value out.
#[account]
pub struct DealClaim {
    pub owner: Pubkey,
    pub deal: Pubkey,
    pub bump: u8,

    pub claim_balance: u128,  // canonical, total entitlement minted
    pub claimed_so_far: u128, // canonical, released to date

    // Reserved
    pub _reserved: [u8; 32],
}

impl DealClaim {
    pub const LEN: usize = 8  // discriminator
        + 32  // owner
        + 32  // deal
        + 1   // bump
        + 16  // claim_balance
        + 16  // claimed_so_far
        + 32; // reserved
}
