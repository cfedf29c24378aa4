//! Randomized profit estimator.
//!
//! # Algorithm
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Look up the parameter bundle for the risk tier |
//! | 2    | Draw win rate, odds, bet count and stake size uniformly from their ranges |
//! | 3    | Monthly multiplier `1 + (w·(o−1) − (1−w))·s·n` |
//! | 4    | Monthly profit `capital·(multiplier−1)`, rounded |
//! | 5    | Yearly profit `capital·(1 + monthly/capital)^12 − capital`, rounded |
//!
//! The random source is injected, so a seeded generator gives reproducible
//! results.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use rust_decimal_macros::dec;
//! use stake_core::{RiskTier, estimate};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = estimate(dec!(10000), RiskTier::Medium, &mut rng);
//!
//! assert!((30..45).contains(&result.bets_per_month));
//! assert!((55..=60).contains(&result.success_rate_percent));
//! ```

use rand::Rng;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::debug;

use crate::calculations::common::{odds_to_decimal, round_whole};
use crate::models::{CalculationResult, ParameterRange, RiskTier};

/// Estimates monthly and yearly profit for `capital` staked at `tier`.
///
/// `capital` is expected to be at least
/// [`MINIMUM_CAPITAL`](crate::MINIMUM_CAPITAL); the estimator does not
/// re-check it.
pub fn estimate<R: Rng + ?Sized>(
    capital: Decimal,
    tier: RiskTier,
    rng: &mut R,
) -> CalculationResult {
    let params = tier.parameters();

    let win_rate = draw(&params.win_rate_percent, rng) / 100.0;
    let avg_odds = draw(&params.avg_odds, rng);
    let bets_per_month = draw(&params.bets_per_month, rng).floor();
    let stake_fraction = draw(&params.stake_percent, rng) / 100.0;

    let multiplier = monthly_multiplier(win_rate, avg_odds, bets_per_month, stake_fraction);
    let capital_units = capital.to_f64().unwrap_or_default();
    let monthly_profit = round_whole(capital_units * (multiplier - 1.0));
    let yearly_profit = compound_yearly_profit(capital, monthly_profit);

    debug!(
        tier = tier.as_str(),
        %capital,
        win_rate,
        avg_odds,
        bets_per_month,
        stake_fraction,
        monthly_profit,
        yearly_profit,
        "estimate computed"
    );

    CalculationResult {
        monthly_profit,
        yearly_profit,
        success_rate_percent: (win_rate * 100.0).round().clamp(0.0, 100.0) as u8,
        bets_per_month: bets_per_month as u32,
        avg_odds: odds_to_decimal(avg_odds),
    }
}

/// Runs [`estimate`] with the thread-local random generator.
pub fn estimate_with_thread_rng(
    capital: Decimal,
    tier: RiskTier,
) -> CalculationResult {
    estimate(capital, tier, &mut rand::thread_rng())
}

/// Growth factor of the capital over one month.
///
/// The per-bet expected value is the win gain minus the loss probability,
/// scaled by the stake fraction and the number of bets.
pub fn monthly_multiplier(
    win_rate: f64,
    avg_odds: f64,
    bets_per_month: f64,
    stake_fraction: f64,
) -> f64 {
    let edge = win_rate * (avg_odds - 1.0) - (1.0 - win_rate);
    1.0 + edge * stake_fraction * bets_per_month
}

/// Compounds a monthly profit over twelve months with full reinvestment.
///
/// Returns zero when `capital` is not positive.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use stake_core::compound_yearly_profit;
///
/// assert_eq!(compound_yearly_profit(dec!(10000), 0), 0);
/// assert_eq!(compound_yearly_profit(dec!(10000), 500), 7959);
/// ```
pub fn compound_yearly_profit(
    capital: Decimal,
    monthly_profit: i64,
) -> i64 {
    let capital = capital.to_f64().unwrap_or_default();
    if capital <= 0.0 {
        return 0;
    }

    let monthly_rate = monthly_profit as f64 / capital;
    round_whole(capital * (1.0 + monthly_rate).powi(12) - capital)
}

/// Draws a uniform sample from `[min, max)`. A degenerate range yields `min`.
fn draw<R: Rng + ?Sized>(
    range: &ParameterRange,
    rng: &mut R,
) -> f64 {
    if range.max > range.min {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng, rngs::mock::StepRng};
    use rust_decimal_macros::dec;

    use super::*;

    /// A generator whose every draw lands on the lower bound of a range.
    fn lower_bound_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn assert_within_tier(
        result: &CalculationResult,
        tier: RiskTier,
    ) {
        let p = tier.parameters();

        let success = f64::from(result.success_rate_percent);
        assert!(
            success >= p.win_rate_percent.min.floor() && success <= p.win_rate_percent.max.ceil(),
            "{tier}: success rate {success} outside {:?}",
            p.win_rate_percent
        );

        let bets = f64::from(result.bets_per_month);
        assert!(
            bets >= p.bets_per_month.min && bets < p.bets_per_month.max,
            "{tier}: bets {bets} outside {:?}",
            p.bets_per_month
        );

        let odds = result.avg_odds.to_f64().unwrap();
        assert!(
            p.avg_odds.contains(odds),
            "{tier}: odds {odds} outside {:?}",
            p.avg_odds
        );
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_stays_within_tier_ranges() {
        for tier in RiskTier::ALL {
            for seed in 0..500 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = estimate(dec!(10000), tier, &mut rng);

                assert_within_tier(&result, tier);
            }
        }
    }

    #[test]
    fn estimate_at_minimum_capital_stays_within_ranges() {
        let mut rng = StdRng::seed_from_u64(99);

        for tier in RiskTier::ALL {
            let result = estimate(dec!(1000), tier, &mut rng);

            assert_within_tier(&result, tier);
        }
    }

    #[test]
    fn estimate_is_reproducible_with_same_seed() {
        let first = estimate(dec!(25000), RiskTier::High, &mut StdRng::seed_from_u64(42));
        let second = estimate(dec!(25000), RiskTier::High, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_estimates_vary() {
        let mut rng = StdRng::seed_from_u64(1);
        let results: Vec<_> = (0..20)
            .map(|_| estimate(dec!(10000), RiskTier::Medium, &mut rng))
            .collect();

        assert!(results.iter().any(|r| *r != results[0]));
        for result in &results {
            assert_within_tier(result, RiskTier::Medium);
        }
    }

    #[test]
    fn estimate_medium_at_lower_bounds() {
        let result = estimate(dec!(10000), RiskTier::Medium, &mut lower_bound_rng());

        // (0.55 * 0.8 - 0.45) * 0.03 * 30 = -0.009
        assert_eq!(result.monthly_profit, -90);
        assert_eq!(result.yearly_profit, -1028);
        assert_eq!(result.success_rate_percent, 55);
        assert_eq!(result.bets_per_month, 30);
        assert_eq!(result.avg_odds, dec!(1.80));
    }

    #[test]
    fn estimate_high_at_lower_bounds_breaks_even() {
        let result = estimate(dec!(10000), RiskTier::High, &mut lower_bound_rng());

        assert_eq!(result.monthly_profit, 0);
        assert_eq!(result.yearly_profit, 0);
        assert_eq!(result.bets_per_month, 20);
        assert_eq!(result.avg_odds, dec!(2.50));
    }

    #[test]
    fn estimate_yearly_matches_compounding_of_monthly() {
        let capital = dec!(10000);
        let mut rng = StdRng::seed_from_u64(5);

        for tier in RiskTier::ALL {
            let result = estimate(capital, tier, &mut rng);
            let c = 10000.0_f64;
            let expected = c * (1.0 + result.monthly_profit as f64 / c).powi(12) - c;

            assert!((result.yearly_profit as f64 - expected).abs() <= 1.0);
        }
    }

    #[test]
    fn estimate_with_thread_rng_stays_within_ranges() {
        let result = estimate_with_thread_rng(dec!(5000), RiskTier::Low);

        assert_within_tier(&result, RiskTier::Low);
    }

    // =========================================================================
    // monthly_multiplier tests
    // =========================================================================

    #[test]
    fn monthly_multiplier_is_one_for_fair_bets() {
        let multiplier = monthly_multiplier(0.5, 2.0, 40.0, 0.05);

        assert!((multiplier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn monthly_multiplier_positive_edge() {
        // edge = 0.6 * 1.0 - 0.4 = 0.2, scaled by 0.04 * 30
        let multiplier = monthly_multiplier(0.6, 2.0, 30.0, 0.04);

        assert!((multiplier - 1.24).abs() < 1e-12);
    }

    #[test]
    fn monthly_multiplier_negative_edge() {
        let multiplier = monthly_multiplier(0.4, 2.0, 10.0, 0.1);

        assert!((multiplier - 0.8).abs() < 1e-12);
    }

    // =========================================================================
    // compound_yearly_profit tests
    // =========================================================================

    #[test]
    fn compound_yearly_profit_positive() {
        assert_eq!(compound_yearly_profit(dec!(10000), 500), 7959);
    }

    #[test]
    fn compound_yearly_profit_negative() {
        assert_eq!(compound_yearly_profit(dec!(25000), -1200), -11146);
    }

    #[test]
    fn compound_yearly_profit_zero_monthly() {
        assert_eq!(compound_yearly_profit(dec!(10000), 0), 0);
    }

    #[test]
    fn compound_yearly_profit_zero_capital() {
        assert_eq!(compound_yearly_profit(Decimal::ZERO, 300), 0);
    }

    // =========================================================================
    // draw tests
    // =========================================================================

    #[test]
    fn draw_degenerate_range_returns_min() {
        let range = ParameterRange::new(3.0, 3.0);

        assert_eq!(draw(&range, &mut StdRng::seed_from_u64(0)), 3.0);
    }

    #[test]
    fn draw_never_reaches_max() {
        let range = ParameterRange::new(20.0, 30.0);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1000 {
            let value = draw(&range, &mut rng);
            assert!((20.0..30.0).contains(&value));
        }
    }
}
