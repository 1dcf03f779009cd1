use anchor_lang::prelude::*;

// Pool events
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub sponsor: Pubkey,
    pub purchase_mint: Pubkey,
    pub purchase_token_cap: u64,
    pub sponsor_fee_bps: u64,
    pub purchase_window_end: i64,
    pub pool_expiry: i64,
    pub timestamp: i64,
}

#[event]
pub struct PoolTokensPurchased {
    pub pool: Pubkey,
    pub purchaser: Pubkey,
    pub amount: u64,
    pub position_minted: u128,
    pub total_purchased: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawnFromPool {
    pub pool: Pubkey,
    pub purchaser: Pubkey,
    pub amount: u64,
    pub position_burned: u128,
    pub timestamp: i64,
}

#[event]
pub struct PositionTransferred {
    pub pool: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct PositionApproved {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub amount: u128,
    pub timestamp: i64,
}

#[event]
pub struct SponsorNominated {
    pub pool: Pubkey,
    pub nominee: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SponsorSet {
    pub pool: Pubkey,
    pub sponsor: Pubkey,
    pub timestamp: i64,
}

// Deal events
#[event]
pub struct DealCreated {
    pub pool: Pubkey,
    pub deal: Pubkey,
    pub holder: Pubkey,
    pub underlying_mint: Pubkey,
    pub underlying_total: u64,
    pub purchase_token_total_for_deal: u64,
    pub exchange_rate: u128,
    pub holder_funding_deadline: i64,
    pub timestamp: i64,
}

#[event]
pub struct UnderlyingDeposited {
    pub deal: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

#[event]
pub struct DealFullyFunded {
    pub deal: Pubkey,
    pub pro_rata_start: i64,
    pub pro_rata_end: i64,
    pub open_start: i64,
    pub open_end: i64,
    pub vesting_cliff_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct DealTokensAccepted {
    pub deal: Pubkey,
    pub purchaser: Pubkey,
    pub purchase_amount: u64,
    pub claim_minted: u128,
    pub fee_accrued: u128,
    pub timestamp: i64,
}

#[event]
pub struct UnderlyingClaimed {
    pub deal: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub claimed_so_far: u128,
    pub timestamp: i64,
}

#[event]
pub struct HolderWithdrawn {
    pub deal: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct HolderNominated {
    pub deal: Pubkey,
    pub nominee: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct HolderSet {
    pub deal: Pubkey,
    pub holder: Pubkey,
    pub timestamp: i64,
}
