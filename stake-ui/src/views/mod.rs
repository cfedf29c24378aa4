//! Plain-text panels for each [`ViewState`].
//!
//! Each panel is a small borrowed view implementing [`Display`](std::fmt::Display);
//! [`render`] picks the one matching the controller's current state.
//!
//! - `input_form` - capital and risk tier entry
//! - `email_gate` - loading spinner text and email capture
//! - `results` - the revealed estimate
//! - `status_bar` - key hints under each panel

mod email_gate;
mod input_form;
mod results;
mod status_bar;

pub use email_gate::{EmailGatePanel, LoadingPanel};
pub use input_form::InputPanel;
pub use results::ResultPanel;
pub use status_bar::{KeyHint, build_status_bar, hints};

use crate::config::AppConfig;
use crate::state::{ViewController, ViewState};

pub const TITLE: &str = "🧮 Potential Profit Calculator";
pub const BADGE: &str = "Exclusive tool";

/// Renders the header plus the panel for the controller's current state.
pub fn render(
    controller: &ViewController,
    config: &AppConfig,
) -> String {
    let body = match controller.state() {
        ViewState::Input => InputPanel::new(controller.input(), config).to_string(),
        ViewState::Loading => LoadingPanel.to_string(),
        ViewState::EmailGate => EmailGatePanel::new(controller.email()).to_string(),
        ViewState::Result => match controller.result() {
            Some(result) => ResultPanel::new(result, &config.currency).to_string(),
            None => String::new(),
        },
    };

    format!("{TITLE}  [{BADGE}]\n\n{body}")
}
