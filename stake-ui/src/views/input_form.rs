use std::fmt;

use stake_core::{CalculationInput, RiskTier};

use super::status_bar::{build_status_bar, hints};
use crate::config::AppConfig;
use crate::utils::format_currency;

/// Capital field, recommended-capital hint and the three risk tier options.
pub struct InputPanel<'a> {
    input: &'a CalculationInput,
    config: &'a AppConfig,
}

impl<'a> InputPanel<'a> {
    pub fn new(
        input: &'a CalculationInput,
        config: &'a AppConfig,
    ) -> Self {
        Self { input, config }
    }
}

impl fmt::Display for InputPanel<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let currency = &self.config.currency;

        writeln!(
            f,
            "Calculate your potential profit from sports predictions with our 7-step system."
        )?;
        writeln!(f, "Just enter your starting capital and choose a risk level.")?;
        writeln!(f, "  ✓ Based on data from thousands of successful bets")?;
        writeln!(f, "  ✓ Covers all 7 steps of our exclusive system")?;
        writeln!(f)?;
        writeln!(
            f,
            "Your starting capital ({}): {}",
            currency.code,
            format_currency(self.input.capital, currency)
        )?;
        writeln!(
            f,
            "  Recommended minimum capital: {}",
            format_currency(self.config.calculator.recommended_capital, currency)
        )?;
        writeln!(f)?;
        writeln!(f, "Risk level:")?;
        for tier in RiskTier::ALL {
            let marker = if tier == self.input.risk_tier { "x" } else { " " };
            writeln!(f, "  [{marker}] {:<7} {}", tier.label(), tier.description())?;
        }
        writeln!(f)?;
        write!(
            f,
            "{}",
            build_status_bar(&[hints::ENTER_KEEP, hints::TIER_KEYS, hints::CTRL_D])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn marks_only_the_active_tier() {
        let config = AppConfig::default();
        let input = CalculationInput::new(dec!(10000), RiskTier::High);

        let text = InputPanel::new(&input, &config).to_string();

        assert!(text.contains("[x] High"));
        assert!(text.contains("[ ] Low"));
        assert!(text.contains("[ ] Medium"));
    }

    #[test]
    fn shows_capital_and_recommended_minimum() {
        let config = AppConfig::default();
        let input = CalculationInput::default();

        let text = InputPanel::new(&input, &config).to_string();

        assert!(text.contains("Your starting capital (CZK): 10\u{a0}000\u{a0}Kč"));
        assert!(text.contains("Recommended minimum capital: 5\u{a0}000\u{a0}Kč"));
    }
}
