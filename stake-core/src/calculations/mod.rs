//! Profit estimation for the staking calculator.
//!
//! The estimator is stateless: it receives a capital amount, a risk tier and
//! a random source, and returns a fresh [`CalculationResult`](crate::CalculationResult).

pub mod common;
pub mod estimator;

pub use estimator::{compound_yearly_profit, estimate, estimate_with_thread_rng, monthly_multiplier};
