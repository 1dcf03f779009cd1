pub mod pool;
pub mod deal;
pub mod position;
pub mod claim;

pub use pool::*;
pub use deal::*;
pub use position::*;
pub use claim::*;

// Accounting walkthrough of a full pool → deal → redemption → vesting
// lifecycle, driven through the same state methods and math the instruction
// handlers use.
#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;
    use crate::constants::WAD;
    use crate::math::conversion::{
        exchange_rate, fee_numerator, pro_rata_conversion, split_fee, underlying_for_purchase,
    };
    use crate::math::fixed_point::{canonical_scale, from_canonical, to_canonical};

    const PURCHASE_DECIMALS: u8 = 6;
    const UNDERLYING_DECIMALS: u8 = 18;
    const CONTRIBUTIONS: [u64; 5] = [
        5_000_000_000,
        5_000_000_000,
        5_000_000_000,
        5_000_000_000,
        2_500_000_000,
    ];
    const FOR_DEAL: u64 = 20_000_000_000;
    const UNDERLYING_TOTAL: u64 = 50_000_000_000_000_000_000;
    const SPONSOR_FEE_BPS: u64 = 300;

    fn new_position(pool: Pubkey, owner: Pubkey) -> PoolPosition {
        PoolPosition {
            owner,
            pool,
            bump: 0,
            balance: 0,
            delegate: Pubkey::default(),
            delegated_amount: 0,
            accepted: 0,
            open_eligible: false,
            _reserved: [0u8; 32],
        }
    }

    fn new_claim(deal: Pubkey, owner: Pubkey) -> DealClaim {
        DealClaim {
            owner,
            deal,
            bump: 0,
            claim_balance: 0,
            claimed_so_far: 0,
            _reserved: [0u8; 32],
        }
    }

    fn funded_deal(total_purchased: u64, completed_at: i64) -> Deal {
        let mut deal = Deal {
            pool: Pubkey::new_unique(),
            holder: Pubkey::new_unique(),
            pending_holder: Pubkey::default(),
            bump: 0,
            underlying_mint: Pubkey::new_unique(),
            underlying_decimals: UNDERLYING_DECIMALS,
            underlying_vault: Pubkey::new_unique(),
            underlying_total: UNDERLYING_TOTAL,
            purchase_token_total_for_deal: FOR_DEAL,
            purchase_token_decimals: PURCHASE_DECIMALS,
            holder_funding_deadline: 10_000,
            total_deposited: UNDERLYING_TOTAL,
            deposit_complete: false,
            pro_rata_start: 0,
            pro_rata_end: 0,
            open_start: 0,
            open_end: 0,
            pro_rata_duration: 3_600,
            open_duration: 1_800,
            vesting_cliff_duration: 0,
            vesting_period: 86_400,
            vesting_cliff_at: 0,
            exchange_rate: exchange_rate(
                UNDERLYING_TOTAL,
                UNDERLYING_DECIMALS,
                FOR_DEAL,
                PURCHASE_DECIMALS,
            )
            .unwrap(),
            pro_rata_conversion: pro_rata_conversion(FOR_DEAL, total_purchased).unwrap(),
            fee_numerator: fee_numerator(SPONSOR_FEE_BPS).unwrap(),
            fee_base: 10_000,
            total_purchase_accepted: 0,
            total_claims_minted: 0,
            total_fee_accrued: 0,
            total_underlying_claimed: 0,
            created_at: 0,
            _reserved: [0u8; 64],
        };
        deal.start_redemption(completed_at).unwrap();
        deal
    }

    // The accept path's accounting, as the handler performs it
    fn accept(deal: &mut Deal, position: &mut PoolPosition, claim: &mut DealClaim, amount: u64) {
        let canonical = to_canonical(amount, PURCHASE_DECIMALS).unwrap();
        position.balance -= canonical;
        position.accepted += canonical;
        deal.total_purchase_accepted += canonical;

        let gross = underlying_for_purchase(canonical, deal.exchange_rate).unwrap();
        let (net, fee) = split_fee(gross, deal.fee_numerator, deal.fee_base).unwrap();
        claim.claim_balance += net;
        deal.total_claims_minted += net;
        deal.total_fee_accrued += fee;

        if deal.max_pro_rata_available(position).unwrap()
            < canonical_scale(PURCHASE_DECIMALS).unwrap()
        {
            position.open_eligible = true;
        }
    }

    #[test]
    fn full_lifecycle_conserves_value() {
        let pool_key = Pubkey::new_unique();
        let total_purchased: u64 = CONTRIBUTIONS.iter().sum();
        assert_eq!(total_purchased, 22_500_000_000);

        // Purchases mint decimal-normalized positions 1:1
        let mut positions: Vec<PoolPosition> = CONTRIBUTIONS
            .iter()
            .map(|&raw| {
                let mut p = new_position(pool_key, Pubkey::new_unique());
                p.balance = to_canonical(raw, PURCHASE_DECIMALS).unwrap();
                p
            })
            .collect();
        let contributed: u128 = positions.iter().map(|p| p.balance).sum();
        assert_eq!(contributed, 22_500 * WAD);

        let mut deal = funded_deal(total_purchased, 1_000);
        let mut claims: Vec<DealClaim> = positions
            .iter()
            .map(|p| new_claim(deal.pool, p.owner))
            .collect();

        // Every participant redeems their maximum pro-rata allotment
        for (position, claim) in positions.iter_mut().zip(claims.iter_mut()) {
            let available = deal.max_pro_rata_available(position).unwrap();
            let raw = from_canonical(available, PURCHASE_DECIMALS).unwrap();
            accept(&mut deal, position, claim, raw);
            assert!(position.open_eligible, "sub-unit remainder counts as maxed");
            assert_eq!(deal.max_pro_rata_available(position).unwrap() / canonical_scale(PURCHASE_DECIMALS).unwrap(), 0);
        }

        // Floor rounding leaves a couple of raw units for the open window
        let leftover = deal.remaining_capacity().unwrap();
        assert_eq!(leftover, 2_000_000_000_000);

        // First-come top-up drains the shared remainder
        let top_up = from_canonical(
            positions[0].balance.min(leftover),
            PURCHASE_DECIMALS,
        )
        .unwrap();
        accept(&mut deal, &mut positions[0], &mut claims[0], top_up);
        assert_eq!(deal.remaining_capacity().unwrap(), 0);
        assert_eq!(deal.total_purchase_accepted, 20_000 * WAD);

        // Conversion is exhaustive and fee-split exact: 50 underlying at 95%
        assert_eq!(deal.total_claims_minted, 47_500_000_000_000_000_000);
        assert_eq!(deal.total_fee_accrued, 2_500_000_000_000_000_000);
        let cap = deal.underlying_total_canonical().unwrap() * deal.fee_numerator as u128
            / deal.fee_base as u128;
        assert!(deal.total_claims_minted <= cap);

        // Conservation: live positions + accepted value still equal the sum
        // ever contributed
        let live: u128 = positions.iter().map(|p| p.balance).sum();
        let accepted: u128 = positions.iter().map(|p| p.accepted).sum();
        assert_eq!(live + accepted, contributed);

        // The holder's loose balance during redemption is exactly the fee
        let vault = to_canonical(UNDERLYING_TOTAL, UNDERLYING_DECIMALS).unwrap();
        assert_eq!(
            deal.holder_withdrawable(vault, deal.open_end).unwrap(),
            deal.total_fee_accrued
        );

        // Vesting: claim half at the midpoint, the rest at the end
        let halfway = deal.vesting_cliff_at + deal.vesting_period / 2;
        let first = deal.claimable_tokens(&claims[1], halfway).unwrap();
        assert_eq!(first, claims[1].claim_balance / 2);
        claims[1].claimed_so_far += first;
        deal.total_underlying_claimed += first;

        let done = deal.vesting_cliff_at + deal.vesting_period;
        let second = deal.claimable_tokens(&claims[1], done).unwrap();
        assert_eq!(claims[1].claimed_so_far + second, claims[1].claim_balance);
        claims[1].claimed_so_far += second;
        deal.total_underlying_claimed += second;
        assert_eq!(deal.claimable_tokens(&claims[1], done + 1).unwrap(), 0);

        // Post-expiry the holder reclaims everything but outstanding claims
        let vault_after = vault - claims[1].claimed_so_far;
        let outstanding = deal.total_claims_minted - deal.total_underlying_claimed;
        assert_eq!(
            deal.holder_withdrawable(vault_after, deal.open_end + 1).unwrap(),
            vault_after - outstanding
        );
    }

    #[test]
    fn partial_pro_rata_blocks_open_window() {
        let mut deal = funded_deal(22_500_000_000, 1_000);
        let mut position = new_position(deal.pool, Pubkey::new_unique());
        position.balance = to_canonical(5_000_000_000, PURCHASE_DECIMALS).unwrap();
        let mut claim = new_claim(deal.pool, position.owner);

        // Redeem only part of the allotment
        accept(&mut deal, &mut position, &mut claim, 1_000_000_000);
        assert!(!position.open_eligible);
        assert!(deal.max_pro_rata_available(&position).unwrap() > 0);

        // Finish the allotment, eligibility flips
        let rest = from_canonical(
            deal.max_pro_rata_available(&position).unwrap(),
            PURCHASE_DECIMALS,
        )
        .unwrap();
        accept(&mut deal, &mut position, &mut claim, rest);
        assert!(position.open_eligible);
    }
}
