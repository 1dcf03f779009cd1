use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// Total vested amount for an entitlement at `now`, canonical units.
///
/// Nothing vests at or before the cliff; the entitlement unlocks linearly
/// over `period` seconds from the cliff and is fully vested at
/// `cliff_at + period`. A zero period vests everything the moment the cliff
/// passes.
pub fn vested_amount(entitlement: u128, cliff_at: i64, period: i64, now: i64) -> Result<u128> {
    if now <= cliff_at {
        return Ok(0);
    }
    if period <= 0 {
        return Ok(entitlement);
    }
    let elapsed = now - cliff_at;
    if elapsed >= period {
        return Ok(entitlement);
    }
    entitlement
        .checked_mul(elapsed as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(period as u128)
        .ok_or(ErrorCode::DivisionByZero.into())
}

/// Amount claimable right now: vested total minus what was already released.
pub fn claimable_amount(
    entitlement: u128,
    claimed_so_far: u128,
    cliff_at: i64,
    period: i64,
    now: i64,
) -> Result<u128> {
    let vested = vested_amount(entitlement, cliff_at, period, now)?;
    Ok(vested.saturating_sub(claimed_so_far))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITLEMENT: u128 = 11_875_000_000_000_000_000;
    const CLIFF: i64 = 1_000_000;
    const PERIOD: i64 = 360 * 24 * 3600;

    #[test]
    fn nothing_vests_at_or_before_cliff() {
        assert_eq!(vested_amount(ENTITLEMENT, CLIFF, PERIOD, 0).unwrap(), 0);
        assert_eq!(vested_amount(ENTITLEMENT, CLIFF, PERIOD, CLIFF).unwrap(), 0);
    }

    #[test]
    fn linear_midpoint() {
        let vested = vested_amount(ENTITLEMENT, CLIFF, PERIOD, CLIFF + PERIOD / 2).unwrap();
        assert_eq!(vested, ENTITLEMENT / 2);
    }

    #[test]
    fn fully_vested_exactly_at_period_end() {
        let at_end = vested_amount(ENTITLEMENT, CLIFF, PERIOD, CLIFF + PERIOD).unwrap();
        assert_eq!(at_end, ENTITLEMENT);
        let after = vested_amount(ENTITLEMENT, CLIFF, PERIOD, CLIFF + 10 * PERIOD).unwrap();
        assert_eq!(after, ENTITLEMENT);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut last = 0u128;
        for step in 0..=100 {
            let now = CLIFF - 10 + step * (PERIOD / 50);
            let vested = vested_amount(ENTITLEMENT, CLIFF, PERIOD, now).unwrap();
            assert!(vested >= last, "vesting regressed at step {}", step);
            last = vested;
        }
        assert_eq!(last, ENTITLEMENT);
    }

    #[test]
    fn zero_period_vests_all_after_cliff() {
        assert_eq!(vested_amount(ENTITLEMENT, CLIFF, 0, CLIFF).unwrap(), 0);
        assert_eq!(vested_amount(ENTITLEMENT, CLIFF, 0, CLIFF + 1).unwrap(), ENTITLEMENT);
    }

    #[test]
    fn claimable_subtracts_released() {
        let halfway = CLIFF + PERIOD / 2;
        let first = claimable_amount(ENTITLEMENT, 0, CLIFF, PERIOD, halfway).unwrap();
        assert_eq!(first, ENTITLEMENT / 2);

        // claim at the halfway mark, then again at the end
        let second = claimable_amount(ENTITLEMENT, first, CLIFF, PERIOD, CLIFF + PERIOD).unwrap();
        assert_eq!(first + second, ENTITLEMENT);

        // nothing left once everything was released
        let drained = claimable_amount(ENTITLEMENT, ENTITLEMENT, CLIFF, PERIOD, CLIFF + 2 * PERIOD).unwrap();
        assert_eq!(drained, 0);
    }
}
