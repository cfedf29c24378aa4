use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskTier;

/// Smallest starting capital the calculator accepts.
pub const MINIMUM_CAPITAL: Decimal = Decimal::ONE_THOUSAND;

/// Starting capital shown when a session opens.
pub const DEFAULT_CAPITAL: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// What the user asks the estimator about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Starting capital in whole currency units.
    pub capital: Decimal,
    pub risk_tier: RiskTier,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            capital: DEFAULT_CAPITAL,
            risk_tier: RiskTier::default(),
        }
    }
}

impl CalculationInput {
    pub fn new(
        capital: Decimal,
        risk_tier: RiskTier,
    ) -> Self {
        Self { capital, risk_tier }
    }

    /// Returns `true` if the capital is at least `minimum`.
    pub fn meets_minimum(
        &self,
        minimum: Decimal,
    ) -> bool {
        self.capital >= minimum
    }
}

/// One estimator run.
///
/// Every call to the estimator produces a fresh value; nothing is cached
/// and a new result fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub monthly_profit: i64,
    /// Monthly rate compounded over twelve months.
    pub yearly_profit: i64,
    pub success_rate_percent: u8,
    pub bets_per_month: u32,
    /// Rounded to two decimal places.
    pub avg_odds: Decimal,
}

impl fmt::Display for CalculationResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Monthly profit:  {}", self.monthly_profit)?;
        writeln!(f, "Yearly profit:   {}", self.yearly_profit)?;
        writeln!(f, "Success rate:    {}%", self.success_rate_percent)?;
        writeln!(f, "Bets per month:  {}", self.bets_per_month)?;
        write!(f, "Average odds:    {}", self.avg_odds)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_input_uses_ten_thousand_and_medium() {
        let input = CalculationInput::default();

        assert_eq!(input.capital, dec!(10000));
        assert_eq!(input.risk_tier, RiskTier::Medium);
    }

    #[test]
    fn minimum_capital_is_one_thousand() {
        assert_eq!(MINIMUM_CAPITAL, dec!(1000));
    }

    #[test]
    fn meets_minimum_is_inclusive() {
        assert!(CalculationInput::new(dec!(1000), RiskTier::Low).meets_minimum(MINIMUM_CAPITAL));
        assert!(!CalculationInput::new(dec!(999), RiskTier::Low).meets_minimum(MINIMUM_CAPITAL));
    }

    #[test]
    fn display_lists_every_field() {
        let result = CalculationResult {
            monthly_profit: 1200,
            yearly_profit: 15400,
            success_rate_percent: 57,
            bets_per_month: 38,
            avg_odds: dec!(2.05),
        };

        let text = result.to_string();

        assert!(text.contains("Monthly profit:  1200"));
        assert!(text.contains("Success rate:    57%"));
        assert!(text.contains("Average odds:    2.05"));
    }
}
