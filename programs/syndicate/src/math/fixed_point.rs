use anchor_lang::prelude::*;
use crate::constants::{CANONICAL_DECIMALS, WAD};
use crate::error::ErrorCode;

/// Multiply a canonical amount by a WAD ratio: floor(a * b / WAD).
///
/// Split into whole and fractional WAD parts so canonical balances far above
/// WAD don't overflow the intermediate product: a*b/WAD == (a/WAD)*b +
/// (a%WAD)*b/WAD, exactly, since the first term is integral.
pub fn wad_mul(a: u128, b: u128) -> Result<u128> {
    let whole = (a / WAD).checked_mul(b).ok_or(ErrorCode::MathOverflow)?;
    let frac = (a % WAD)
        .checked_mul(b)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(WAD)
        .ok_or(ErrorCode::DivisionByZero)?;
    whole.checked_add(frac).ok_or(ErrorCode::MathOverflow.into())
}

/// Divide two values into a WAD ratio: (a * WAD) / b
pub fn wad_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return Err(ErrorCode::DivisionByZero.into());
    }
    a.checked_mul(WAD)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(b)
        .ok_or(ErrorCode::DivisionByZero.into())
}

/// Multiply a value by basis points: (value * bps) / 10_000
pub fn bps_mul(value: u64, bps: u64) -> Result<u64> {
    (value as u128)
        .checked_mul(bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(10_000)
        .ok_or(ErrorCode::DivisionByZero)?
        .try_into()
        .map_err(|_| ErrorCode::MathOverflow.into())
}

/// Scale factor from a mint's native decimals up to canonical precision.
pub fn canonical_scale(decimals: u8) -> Result<u128> {
    if decimals > CANONICAL_DECIMALS {
        return Err(ErrorCode::UnsupportedDecimals.into());
    }
    Ok(10u128.pow((CANONICAL_DECIMALS - decimals) as u32))
}

/// Normalize a raw token amount to the canonical 18-decimal scale.
pub fn to_canonical(amount: u64, decimals: u8) -> Result<u128> {
    (amount as u128)
        .checked_mul(canonical_scale(decimals)?)
        .ok_or(ErrorCode::MathOverflow.into())
}

/// Convert a canonical amount back to raw token units, flooring.
pub fn from_canonical(amount: u128, decimals: u8) -> Result<u64> {
    let scaled = amount
        .checked_div(canonical_scale(decimals)?)
        .ok_or(ErrorCode::DivisionByZero)?;
    u64::try_from(scaled).map_err(|_| ErrorCode::MathOverflow.into())
}
