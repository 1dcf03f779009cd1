pub mod create_pool;
pub mod purchase_pool_tokens;
pub mod withdraw_from_pool;
pub mod transfer_position;
pub mod approve_position;
pub mod transfer_position_from;
pub mod nominate_sponsor;
pub mod accept_sponsor;
pub mod create_deal;
pub mod accept_deal_tokens;

pub use create_pool::*;
pub use purchase_pool_tokens::*;
pub use withdraw_from_pool::*;
pub use transfer_position::*;
pub use approve_position::*;
pub use transfer_position_from::*;
pub use nominate_sponsor::*;
pub use accept_sponsor::*;
pub use create_deal::*;
pub use accept_deal_tokens::*;
