pub mod calculations;
pub mod models;

pub use calculations::{compound_yearly_profit, estimate, estimate_with_thread_rng};
pub use models::*;
