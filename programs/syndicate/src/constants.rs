use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const POOL_SEED: &[u8] = b"pool";
#[constant]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
#[constant]
pub const POSITION_SEED: &[u8] = b"position";
#[constant]
pub const DEAL_SEED: &[u8] = b"deal";
#[constant]
pub const DEAL_VAULT_SEED: &[u8] = b"deal_vault";
#[constant]
pub const CLAIM_SEED: &[u8] = b"claim";

// WAD precision (1e18) for fixed-point math
pub const WAD: u128 = 1_000_000_000_000_000_000;

// Canonical precision all internal balances are normalized to
pub const CANONICAL_DECIMALS: u8 = 18;

// Basis points denominator; also the fee base frozen into every deal
pub const BPS_DENOMINATOR: u64 = 10_000;

// Fee limits (in basis points)
pub const PROTOCOL_FEE_BPS: u64 = 200; // 2%
pub const MAX_SPONSOR_FEE_BPS: u64 = 9_800; // 98%

// Pool timing bounds (seconds)
pub const MIN_PURCHASE_WINDOW: i64 = 30 * 60; // 30 minutes
pub const MAX_PURCHASE_WINDOW: i64 = 30 * 24 * 3600; // 30 days
pub const MAX_POOL_DURATION: i64 = 365 * 24 * 3600; // 1 year

// Deal timing bounds (seconds)
pub const MIN_PRO_RATA_DURATION: i64 = 30 * 60; // 30 minutes
pub const MAX_REDEMPTION_DURATION: i64 = 30 * 24 * 3600; // per window
pub const MAX_HOLDER_FUNDING_DURATION: i64 = 30 * 24 * 3600;
pub const MAX_VESTING_CLIFF: i64 = 1_825 * 24 * 3600; // 5 years
pub const MAX_VESTING_PERIOD: i64 = 1_825 * 24 * 3600;

// Pool metadata limits
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
