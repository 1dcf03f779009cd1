use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, PROTOCOL_FEE_BPS};
use crate::error::ErrorCode;
use crate::math::fixed_point::{wad_div, wad_mul};

/// Underlying-per-purchase exchange rate at WAD precision for canonical
/// amounts, computed once at deal creation.
///
/// The ratio is taken over raw u64 amounts (which always fit a WAD division)
/// and then shifted by the decimal difference between the two mints, which is
/// equivalent to dividing the canonical totals.
pub fn exchange_rate(
    underlying_total: u64,
    underlying_decimals: u8,
    purchase_total_for_deal: u64,
    purchase_decimals: u8,
) -> Result<u128> {
    let base = wad_div(underlying_total as u128, purchase_total_for_deal as u128)?;
    if purchase_decimals >= underlying_decimals {
        let shift = 10u128.pow((purchase_decimals - underlying_decimals) as u32);
        base.checked_mul(shift).ok_or(ErrorCode::MathOverflow.into())
    } else {
        let shift = 10u128.pow((underlying_decimals - purchase_decimals) as u32);
        base.checked_div(shift).ok_or(ErrorCode::DivisionByZero.into())
    }
}

/// Fraction of the pool the deal settles, at WAD precision. Both amounts are
/// raw units of the same mint, so the scale cancels.
pub fn pro_rata_conversion(purchase_total_for_deal: u64, total_purchased: u64) -> Result<u128> {
    wad_div(purchase_total_for_deal as u128, total_purchased as u128)
}

/// Remaining pro-rata entitlement for a participant, canonical units.
///
/// The entitlement base is balance + accepted so that partial accepts do not
/// shrink the allotment: accepting moves value from balance to accepted and
/// leaves the base unchanged.
pub fn remaining_pro_rata(balance: u128, accepted: u128, conversion: u128) -> Result<u128> {
    let base = balance
        .checked_add(accepted)
        .ok_or(ErrorCode::MathOverflow)?;
    let entitled = wad_mul(base, conversion)?;
    Ok(entitled.saturating_sub(accepted).min(balance))
}

/// Gross underlying owed for an accepted purchase amount, canonical units.
pub fn underlying_for_purchase(purchase_canonical: u128, exchange_rate_wad: u128) -> Result<u128> {
    wad_mul(purchase_canonical, exchange_rate_wad)
}

/// Split a gross conversion into the participant's claim and the fee
/// remainder routed to the holder.
pub fn split_fee(gross: u128, fee_numerator: u64, fee_base: u64) -> Result<(u128, u128)> {
    if fee_base == 0 {
        return Err(ErrorCode::DivisionByZero.into());
    }
    let net = gross
        .checked_mul(fee_numerator as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(fee_base as u128)
        .ok_or(ErrorCode::DivisionByZero)?;
    let fee = gross.checked_sub(net).ok_or(ErrorCode::MathUnderflow)?;
    Ok((net, fee))
}

/// Fee numerator frozen into a deal: what remains after the sponsor and
/// protocol cuts, over a BPS_DENOMINATOR base.
pub fn fee_numerator(sponsor_fee_bps: u64) -> Result<u64> {
    let total_fee = sponsor_fee_bps
        .checked_add(PROTOCOL_FEE_BPS)
        .ok_or(ErrorCode::MathOverflow)?;
    BPS_DENOMINATOR
        .checked_sub(total_fee)
        .ok_or(ErrorCode::FeeExceedsMaximum.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;
    use crate::math::fixed_point::to_canonical;

    // The reference scenario: 22,500 units purchased in a 6-decimal token,
    // deal settles 20,000 of them against 50 units of an 18-decimal
    // underlying, participants keep 95%.
    const PURCHASE_DECIMALS: u8 = 6;
    const TOTAL_PURCHASED: u64 = 22_500_000_000;
    const FOR_DEAL: u64 = 20_000_000_000;
    const UNDERLYING_TOTAL: u64 = 50_000_000_000_000_000_000;

    #[test]
    fn exchange_rate_across_decimals() {
        let rate = exchange_rate(UNDERLYING_TOTAL, 18, FOR_DEAL, PURCHASE_DECIMALS).unwrap();
        // 50 / 20,000 = 0.0025
        assert_eq!(rate, 2_500_000_000_000_000);
    }

    #[test]
    fn full_share_conversion_with_fee() {
        let rate = exchange_rate(UNDERLYING_TOTAL, 18, FOR_DEAL, PURCHASE_DECIMALS).unwrap();
        let purchase = to_canonical(5_000_000_000, PURCHASE_DECIMALS).unwrap();
        let gross = underlying_for_purchase(purchase, rate).unwrap();
        // 5,000 * (50 / 20,000) = 12.5
        assert_eq!(gross, 12_500_000_000_000_000_000);
        let (net, fee) = split_fee(gross, 9_500, 10_000).unwrap();
        assert_eq!(net, 11_875_000_000_000_000_000);
        assert_eq!(fee, 625_000_000_000_000_000);
        assert_eq!(net + fee, gross);
    }

    #[test]
    fn pro_rata_entitlement_floors() {
        let conversion = pro_rata_conversion(FOR_DEAL, TOTAL_PURCHASED).unwrap();
        let balance = to_canonical(5_000_000_000, PURCHASE_DECIMALS).unwrap();
        let remaining = remaining_pro_rata(balance, 0, conversion).unwrap();
        // 5,000 * 20,000 / 22,500 = 4,444.444...
        assert_eq!(remaining, 4_444_444_444_444_444_440_000);
        assert!(remaining < balance);
    }

    #[test]
    fn entitlements_never_exceed_deal_total() {
        let conversion = pro_rata_conversion(FOR_DEAL, TOTAL_PURCHASED).unwrap();
        let contributions: [u64; 5] = [
            5_000_000_000,
            5_000_000_000,
            5_000_000_000,
            5_000_000_000,
            2_500_000_000,
        ];
        let mut sum = 0u128;
        for raw in contributions {
            let balance = to_canonical(raw, PURCHASE_DECIMALS).unwrap();
            sum += remaining_pro_rata(balance, 0, conversion).unwrap();
        }
        let deal_total = to_canonical(FOR_DEAL, PURCHASE_DECIMALS).unwrap();
        assert!(sum <= deal_total);
        // the floor remainder is what the open window redistributes
        assert!(deal_total - sum < 5 * WAD);
    }

    #[test]
    fn partial_accept_keeps_entitlement_base() {
        let conversion = pro_rata_conversion(FOR_DEAL, TOTAL_PURCHASED).unwrap();
        let balance = to_canonical(5_000_000_000, PURCHASE_DECIMALS).unwrap();
        let full = remaining_pro_rata(balance, 0, conversion).unwrap();

        // accept 1,000 units, then check the remainder
        let accepted = to_canonical(1_000_000_000, PURCHASE_DECIMALS).unwrap();
        let remaining = remaining_pro_rata(balance - accepted, accepted, conversion).unwrap();
        assert_eq!(remaining, full - accepted);

        // accepting the exact remainder empties the allotment
        let after = remaining_pro_rata(balance - accepted - remaining, accepted + remaining, conversion).unwrap();
        assert_eq!(after, 0);
    }

    #[test]
    fn remaining_capped_by_balance() {
        // conversion of 1.0 caps at the live balance
        let remaining = remaining_pro_rata(100, 50, WAD).unwrap();
        assert_eq!(remaining, 100);
    }

    #[test]
    fn fee_numerator_from_sponsor_fee() {
        assert_eq!(fee_numerator(300).unwrap(), 9_500);
        assert_eq!(fee_numerator(0).unwrap(), 9_800);
        assert!(fee_numerator(10_000).is_err());
    }
}
