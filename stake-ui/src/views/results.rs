use std::fmt;

use stake_core::CalculationResult;

use crate::utils::{CurrencyFormat, format_currency_units};

/// The revealed estimate, followed by the disclaimer and call to action.
pub struct ResultPanel<'a> {
    result: &'a CalculationResult,
    currency: &'a CurrencyFormat,
}

impl<'a> ResultPanel<'a> {
    pub fn new(
        result: &'a CalculationResult,
        currency: &'a CurrencyFormat,
    ) -> Self {
        Self { result, currency }
    }
}

impl fmt::Display for ResultPanel<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;

        writeln!(f, "Your potential profit")?;
        writeln!(
            f,
            "  📈 Estimated monthly profit: {}",
            format_currency_units(r.monthly_profit, self.currency)
        )?;
        writeln!(
            f,
            "  📊 Estimated yearly profit:  {}",
            format_currency_units(r.yearly_profit, self.currency)
        )?;
        writeln!(f)?;
        writeln!(f, "  Success rate:    {}%", r.success_rate_percent)?;
        writeln!(f, "  Bets per month:  {}", r.bets_per_month)?;
        writeln!(f, "  Average odds:    {:.2}", r.avg_odds)?;
        writeln!(f)?;
        writeln!(f, "Important notice")?;
        writeln!(
            f,
            "  These results are based on the average success rate of our 7-step system."
        )?;
        writeln!(
            f,
            "  Actual results may vary depending on many factors, including discipline,"
        )?;
        writeln!(
            f,
            "  match selection and correctly following all 7 steps of the system."
        )?;
        writeln!(f)?;
        write!(f, "💰 Get access to the Elite group")
    }
}
