pub mod pool;
pub mod deal;

pub use pool::*;
pub use deal::*;
