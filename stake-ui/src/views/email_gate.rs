use std::fmt;

use super::status_bar::{build_status_bar, hints};
use crate::email::EmailField;

/// Shown while the loading timer runs.
pub struct LoadingPanel;

impl fmt::Display for LoadingPanel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "⏳ Calculating your potential profit...")
    }
}

/// Email capture in front of the result.
pub struct EmailGatePanel<'a> {
    email: &'a EmailField,
}

impl<'a> EmailGatePanel<'a> {
    pub fn new(email: &'a EmailField) -> Self {
        Self { email }
    }
}

impl fmt::Display for EmailGatePanel<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "🔒 Your result is ready!")?;
        writeln!(
            f,
            "Enter your e-mail to see a detailed analysis of your potential profit."
        )?;
        writeln!(f)?;

        let shown = if self.email.raw().is_empty() {
            "<your e-mail>"
        } else {
            self.email.raw()
        };
        writeln!(f, "📧 {shown}")?;

        let button = if self.email.is_valid() {
            "[ Show results → ]"
        } else {
            "[ Show results → ] (enter a valid e-mail first)"
        };
        writeln!(f, "{button}")?;
        writeln!(
            f,
            "We value your privacy. We will never sell your data to third parties."
        )?;
        writeln!(f)?;
        writeln!(f, "⚠️  This offer is available for a limited time.")?;
        write!(f, "{}", build_status_bar(&[hints::ENTER_SUBMIT, hints::CTRL_D]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_shows_placeholder_and_disabled_submit() {
        let field = EmailField::default();

        let text = EmailGatePanel::new(&field).to_string();

        assert!(text.contains("<your e-mail>"));
        assert!(text.contains("enter a valid e-mail first"));
    }

    #[test]
    fn valid_field_enables_submit() {
        let field = EmailField::new("user@example.com");

        let text = EmailGatePanel::new(&field).to_string();

        assert!(text.contains("📧 user@example.com"));
        assert!(!text.contains("enter a valid e-mail first"));
    }
}
