use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::conversion::remaining_pro_rata;
use crate::math::fixed_point::to_canonical;
use crate::math::vesting::claimable_amount;
use crate::state::{DealClaim, PoolPosition};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RedemptionPhase {
    NotStarted,
    ProRata,
    Open,
    Over,
}

#[account]
pub struct Deal {
    pub pool: Pubkey,
    pub holder: Pubkey,
    pub pending_holder: Pubkey,
    pub bump: u8,

    // Underlying token configuration
    pub underlying_mint: Pubkey,
    pub underlying_decimals: u8,
    pub underlying_vault: Pubkey,
    pub underlying_total: u64, // raw units

    // The slice of pool contributions this deal settles
    pub purchase_token_total_for_deal: u64, // raw units
    pub purchase_token_decimals: u8,

    // Holder funding
    pub holder_funding_deadline: i64,
    pub total_deposited: u64, // raw units
    pub deposit_complete: bool,

    // Redemption windows, derived the instant funding completes
    pub pro_rata_start: i64,
    pub pro_rata_end: i64,
    pub open_start: i64,
    pub open_end: i64,
    pub pro_rata_duration: i64,
    pub open_duration: i64,

    // Vesting terms; cliff becomes absolute once windows are known
    pub vesting_cliff_duration: i64,
    pub vesting_period: i64,
    pub vesting_cliff_at: i64,

    // Conversion terms, frozen at creation (WAD precision)
    pub exchange_rate: u128,
    pub pro_rata_conversion: u128,
    pub fee_numerator: u64,
    pub fee_base: u64,

    // Accounting (canonical precision)
    pub total_purchase_accepted: u128,
    pub total_claims_minted: u128,
    pub total_fee_accrued: u128,
    pub total_underlying_claimed: u128,

    pub created_at: i64,

    // Reserved for future use
    pub _reserved: [u8; 64],
}

impl Deal {
    pub const LEN: usize = 8  // discriminator
        + 32  // pool
        + 32  // holder
        + 32  // pending_holder
        + 1   // bump
        + 32  // underlying_mint
        + 1   // underlying_decimals
        + 32  // underlying_vault
        + 8   // underlying_total
        + 8   // purchase_token_total_for_deal
        + 1   // purchase_token_decimals
        + 8   // holder_funding_deadline
        + 8   // total_deposited
        + 1   // deposit_complete
        + 8 * 6 // window boundaries + durations
        + 8 * 3 // vesting cliff duration, period, cliff_at
        + 16  // exchange_rate
        + 16  // pro_rata_conversion
        + 8   // fee_numerator
        + 8   // fee_base
        + 16 * 4 // accepted, claims minted, fee accrued, claimed
        + 8   // created_at
        + 64; // reserved

    /// Freeze the redemption and vesting timeline; called exactly once, when
    /// cumulative holder deposits first reach the underlying total.
    pub fn start_redemption(&mut self, now: i64) -> Result<()> {
        self.deposit_complete = true;
        self.pro_rata_start = now;
        self.pro_rata_end = now
            .checked_add(self.pro_rata_duration)
            .ok_or(ErrorCode::MathOverflow)?;
        self.open_start = self.pro_rata_end;
        self.open_end = self
            .open_start
            .checked_add(self.open_duration)
            .ok_or(ErrorCode::MathOverflow)?;
        self.vesting_cliff_at = self
            .open_end
            .checked_add(self.vesting_cliff_duration)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn redemption_phase(&self, now: i64) -> RedemptionPhase {
        if !self.deposit_complete || now < self.pro_rata_start {
            return RedemptionPhase::NotStarted;
        }
        if now < self.pro_rata_end {
            RedemptionPhase::ProRata
        } else if now <= self.open_end {
            RedemptionPhase::Open
        } else {
            RedemptionPhase::Over
        }
    }

    pub fn underlying_total_canonical(&self) -> Result<u128> {
        to_canonical(self.underlying_total, self.underlying_decimals)
    }

    /// Unconverted deal capacity left for the open window, canonical units.
    pub fn remaining_capacity(&self) -> Result<u128> {
        let total = to_canonical(self.purchase_token_total_for_deal, self.purchase_token_decimals)?;
        total
            .checked_sub(self.total_purchase_accepted)
            .ok_or(ErrorCode::MathUnderflow.into())
    }

    /// Underlying the holder may reclaim right now, canonical units.
    ///
    /// While redemption is live the full underlying total stays reserved for
    /// participants, less fee remainders (the holder's from the moment of
    /// conversion) and claims already paid out. Once the open window has
    /// elapsed only outstanding claim balances remain reserved, and a deal
    /// that missed its funding deadline reserves nothing.
    pub fn holder_withdrawable(&self, vault_canonical: u128, now: i64) -> Result<u128> {
        if !self.deposit_complete && now >= self.holder_funding_deadline {
            return Ok(vault_canonical);
        }
        let reserved = if self.deposit_complete && now > self.open_end {
            self.total_claims_minted
                .checked_sub(self.total_underlying_claimed)
                .ok_or(ErrorCode::MathUnderflow)?
        } else {
            self.underlying_total_canonical()?
                .checked_sub(self.total_fee_accrued)
                .ok_or(ErrorCode::MathUnderflow)?
                .checked_sub(self.total_underlying_claimed)
                .ok_or(ErrorCode::MathUnderflow)?
        };
        Ok(vault_canonical.saturating_sub(reserved))
    }

    /// What a participant may still redeem during the pro-rata window,
    /// capped by both their live balance and the deal's conversion ratio.
    pub fn max_pro_rata_available(&self, position: &PoolPosition) -> Result<u128> {
        remaining_pro_rata(position.balance, position.accepted, self.pro_rata_conversion)
    }

    /// Read-side mirror of the claim path.
    pub fn claimable_tokens(&self, claim: &DealClaim, now: i64) -> Result<u128> {
        if !self.deposit_complete {
            return Ok(0);
        }
        claimable_amount(
            claim.claim_balance,
            claim.claimed_so_far,
            self.vesting_cliff_at,
            self.vesting_period,
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;

    const UNDERLYING_TOTAL: u64 = 50_000_000_000_000_000_000; // 50 @ 18 decimals
    const FOR_DEAL: u64 = 20_000_000_000; // 20,000 @ 6 decimals

    fn deal() -> Deal {
        Deal {
            pool: Pubkey::new_unique(),
            holder: Pubkey::new_unique(),
            pending_holder: Pubkey::default(),
            bump: 254,
            underlying_mint: Pubkey::new_unique(),
            underlying_decimals: 18,
            underlying_vault: Pubkey::new_unique(),
            underlying_total: UNDERLYING_TOTAL,
            purchase_token_total_for_deal: FOR_DEAL,
            purchase_token_decimals: 6,
            holder_funding_deadline: 1_000,
            total_deposited: 0,
            deposit_complete: false,
            pro_rata_start: 0,
            pro_rata_end: 0,
            open_start: 0,
            open_end: 0,
            pro_rata_duration: 3_600,
            open_duration: 1_800,
            vesting_cliff_duration: 600,
            vesting_period: 86_400,
            vesting_cliff_at: 0,
            exchange_rate: 2_500_000_000_000_000,
            pro_rata_conversion: 888_888_888_888_888_888,
            fee_numerator: 9_500,
            fee_base: 10_000,
            total_purchase_accepted: 0,
            total_claims_minted: 0,
            total_fee_accrued: 0,
            total_underlying_claimed: 0,
            created_at: 0,
            _reserved: [0u8; 64],
        }
    }

    #[test]
    fn redemption_timeline_derived_from_completion() {
        let mut d = deal();
        d.start_redemption(500).unwrap();
        assert!(d.deposit_complete);
        assert_eq!(d.pro_rata_start, 500);
        assert_eq!(d.pro_rata_end, 4_100);
        assert_eq!(d.open_start, 4_100);
        assert_eq!(d.open_end, 5_900);
        assert_eq!(d.vesting_cliff_at, 6_500);
    }

    #[test]
    fn phase_transitions() {
        let mut d = deal();
        assert_eq!(d.redemption_phase(500), RedemptionPhase::NotStarted);

        d.start_redemption(500).unwrap();
        assert_eq!(d.redemption_phase(500), RedemptionPhase::ProRata);
        assert_eq!(d.redemption_phase(4_099), RedemptionPhase::ProRata);
        assert_eq!(d.redemption_phase(4_100), RedemptionPhase::Open);
        assert_eq!(d.redemption_phase(5_900), RedemptionPhase::Open);
        assert_eq!(d.redemption_phase(5_901), RedemptionPhase::Over);
    }

    #[test]
    fn unfunded_deal_releases_everything_after_deadline() {
        let d = deal();
        let vault = 30 * WAD;
        // still funding: the whole total stays reserved
        assert_eq!(d.holder_withdrawable(vault, 999).unwrap(), 0);
        // deadline passed unfunded: every deposited token comes back
        assert_eq!(d.holder_withdrawable(vault, 1_000).unwrap(), vault);
    }

    #[test]
    fn only_excess_withdrawable_while_redemption_live() {
        let mut d = deal();
        d.start_redemption(500).unwrap();
        let vault = 55 * WAD; // 5 over-deposited
        assert_eq!(d.holder_withdrawable(vault, 600).unwrap(), 5 * WAD);

        // fee remainders unlock the moment they accrue
        d.total_fee_accrued = 625_000_000_000_000_000;
        assert_eq!(
            d.holder_withdrawable(vault, 600).unwrap(),
            5 * WAD + 625_000_000_000_000_000
        );
    }

    #[test]
    fn expired_window_releases_unconverted_remainder() {
        let mut d = deal();
        d.start_redemption(500).unwrap();
        d.total_claims_minted = 11_875_000_000_000_000_000;
        d.total_fee_accrued = 625_000_000_000_000_000;
        let vault = 50 * WAD;

        // during the windows: only the fee remainder is loose
        assert_eq!(d.holder_withdrawable(vault, 5_000).unwrap(), 625_000_000_000_000_000);

        // after open_end: everything but outstanding claims
        let loose = d.holder_withdrawable(vault, 6_000).unwrap();
        assert_eq!(loose, 50 * WAD - 11_875_000_000_000_000_000);

        // paid-out claims shrink the vault and the reserve in lockstep
        d.total_underlying_claimed = 11_875_000_000_000_000_000;
        let after_claims = d
            .holder_withdrawable(vault - 11_875_000_000_000_000_000, 6_000)
            .unwrap();
        assert_eq!(after_claims, loose);
    }

    #[test]
    fn remaining_capacity_tracks_accepts() {
        let mut d = deal();
        assert_eq!(d.remaining_capacity().unwrap(), 20_000 * WAD);
        d.total_purchase_accepted = 5_000 * WAD;
        assert_eq!(d.remaining_capacity().unwrap(), 15_000 * WAD);
    }

    #[test]
    fn claimable_mirrors_vesting_schedule() {
        let mut d = deal();
        d.start_redemption(500).unwrap();
        let claim = DealClaim {
            owner: Pubkey::new_unique(),
            deal: Pubkey::new_unique(),
            bump: 253,
            claim_balance: 11_875_000_000_000_000_000,
            claimed_so_far: 0,
            _reserved: [0u8; 32],
        };
        assert_eq!(d.claimable_tokens(&claim, d.vesting_cliff_at).unwrap(), 0);
        let full = d
            .claimable_tokens(&claim, d.vesting_cliff_at + d.vesting_period)
            .unwrap();
        assert_eq!(full, claim.claim_balance);
    }
}
