//! Key-hint line printed under each panel.

/// Keyboard shortcut hint for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Joins hints into a single line, e.g. `Enter: Keep │ Ctrl-D: Quit`.
pub fn build_status_bar(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Common key hints for the prompts.
pub mod hints {
    use super::KeyHint;

    pub const ENTER_KEEP: KeyHint = KeyHint::new("Enter", "Keep current");
    pub const ENTER_SUBMIT: KeyHint = KeyHint::new("Enter", "Submit");
    pub const TIER_KEYS: KeyHint = KeyHint::new("l/m/h", "Risk tier");
    pub const CTRL_D: KeyHint = KeyHint::new("Ctrl-D", "Quit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_hints_with_separator() {
        let line = build_status_bar(&[hints::ENTER_SUBMIT, hints::CTRL_D]);

        assert_eq!(line, "Enter: Submit │ Ctrl-D: Quit");
    }

    #[test]
    fn empty_hint_list_is_empty_line() {
        assert_eq!(build_status_bar(&[]), "");
    }
}
