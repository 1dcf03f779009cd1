use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Arithmetic (6000-6009)
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,
    #[msg("Invalid parameter")]
    InvalidParameter,
    #[msg("Token decimals exceed canonical precision")]
    UnsupportedDecimals,

    // Authorization (6010-6019)
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Signer is not the sponsor")]
    NotSponsor,
    #[msg("Signer is not the holder")]
    NotHolder,
    #[msg("Signer is not the nominated sponsor")]
    NotPendingSponsor,
    #[msg("Signer is not the nominated holder")]
    NotPendingHolder,

    // Windows (6020-6039)
    #[msg("Purchase window has closed")]
    PurchaseWindowClosed,
    #[msg("Purchase window is still open")]
    PurchaseWindowOpen,
    #[msg("Pool has expired")]
    PoolExpired,
    #[msg("Withdrawals are locked while the deal is live")]
    WithdrawNotOpen,
    #[msg("Holder funding deadline has passed")]
    FundingDeadlinePassed,
    #[msg("outside of redeem window")]
    OutsideRedeemWindow,
    #[msg("ineligible: didn't max pro-rata")]
    OpenPeriodIneligible,
    #[msg("Redemption window has not elapsed")]
    RedemptionNotOver,
    #[msg("Deal was never fully funded")]
    DealNotFunded,

    // Capacity (6040-6049)
    #[msg("Purchase exceeds pool cap")]
    CapExceeded,
    #[msg("accepting more than share")]
    AcceptingMoreThanShare,
    #[msg("Insufficient position balance")]
    InsufficientBalance,
    #[msg("Insufficient delegated allowance")]
    InsufficientAllowance,
    #[msg("Pool holds insufficient purchase tokens for the deal")]
    InsufficientPoolFunds,

    // State (6050-6059)
    #[msg("Account already initialized")]
    AlreadyInitialized,
    #[msg("A deal already exists for this pool")]
    DealAlreadyExists,
    #[msg("Deposit already complete")]
    DepositAlreadyComplete,
    #[msg("no transfers after redeem starts")]
    NoTransfersAfterRedeem,

    // Limits (6060-6069)
    #[msg("Fee exceeds maximum allowed")]
    FeeExceedsMaximum,
    #[msg("Duration out of bounds")]
    DurationOutOfBounds,
    #[msg("Name or symbol too long")]
    NameTooLong,

    // Withdraw/claim (6070-6079)
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,
    #[msg("Nothing to claim")]
    NothingToClaim,
}
