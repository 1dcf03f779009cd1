pub mod deposit_underlying;
pub mod withdraw_underlying;
pub mod withdraw_expiry;
pub mod claim_underlying;
pub mod set_holder;
pub mod accept_holder;

pub use deposit_underlying::*;
pub use withdraw_underlying::*;
pub use withdraw_expiry::*;
pub use claim_underlying::*;
pub use set_holder::*;
pub use accept_holder::*;
