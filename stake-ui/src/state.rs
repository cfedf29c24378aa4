//! View-state controller for the profit calculator.
//!
//! The controller owns everything a session mutates: the calculation input,
//! the last estimator result, the email field and the active [`ViewState`].
//! Each transition has exactly one entry point, and actions issued in a
//! state that does not accept them are ignored.

use std::{fmt, time::Duration};

use rand::Rng;
use rust_decimal::Decimal;
use stake_core::{CalculationInput, CalculationResult, RiskTier, estimate};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::config::CalculatorSettings;
use crate::email::EmailField;
use crate::timer::{LoadingTimer, UiEvent};
use crate::utils::parse_decimal;

/// The single phase deciding which panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Input,
    Loading,
    EmailGate,
    Result,
}

impl fmt::Display for ViewState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::Loading => "loading",
            Self::EmailGate => "email-gate",
            Self::Result => "result",
        };
        f.write_str(name)
    }
}

/// Failures surfaced to the user while editing or submitting the input form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("The minimum starting capital is {minimum}; {capital} is too low.")]
    CapitalBelowMinimum { capital: Decimal, minimum: Decimal },

    #[error("'{0}' is not a valid amount.")]
    InvalidCapital(String),
}

pub struct ViewController {
    state: ViewState,
    input: CalculationInput,
    result: Option<CalculationResult>,
    email: EmailField,
    minimum_capital: Decimal,
    loading_delay: Duration,
    loading_timer: Option<LoadingTimer>,
    events_tx: UnboundedSender<UiEvent>,
    events_rx: UnboundedReceiver<UiEvent>,
}

impl ViewController {
    pub fn new(settings: &CalculatorSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            state: ViewState::Input,
            input: CalculationInput::new(settings.default_capital, settings.default_risk_tier),
            result: None,
            email: EmailField::default(),
            minimum_capital: settings.minimum_capital,
            loading_delay: settings.loading_delay(),
            loading_timer: None,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn email(&self) -> &EmailField {
        &self.email
    }

    pub fn minimum_capital(&self) -> Decimal {
        self.minimum_capital
    }

    /// The stored estimator output. `None` until a calculation is submitted.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    // ─── Input ───────────────────────────────────────────────────────────────

    /// Replaces the capital. Returns `false` when the input form is not shown.
    pub fn set_capital(
        &mut self,
        capital: Decimal,
    ) -> bool {
        if !self.accepts(ViewState::Input, "set_capital") {
            return false;
        }
        self.input.capital = capital;
        true
    }

    /// Parses user text into the capital. Unparsable text leaves it unchanged.
    pub fn set_capital_text(
        &mut self,
        text: &str,
    ) -> Result<bool, ControllerError> {
        let capital =
            parse_decimal(text).map_err(|_| ControllerError::InvalidCapital(text.trim().to_string()))?;
        Ok(self.set_capital(capital))
    }

    /// Selects a risk tier. Returns `true` only if the active tier changed.
    pub fn select_risk_tier(
        &mut self,
        tier: RiskTier,
    ) -> bool {
        if !self.accepts(ViewState::Input, "select_risk_tier") || self.input.risk_tier == tier {
            return false;
        }
        debug!(from = %self.input.risk_tier, to = %tier, "risk tier changed");
        self.input.risk_tier = tier;
        true
    }

    /// Runs the estimator and moves to [`ViewState::Loading`].
    ///
    /// Capital below the minimum is rejected without touching any state.
    /// Must be called from within a tokio runtime, which drives the loading
    /// timer.
    pub fn submit_calculation<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ViewState, ControllerError> {
        if !self.accepts(ViewState::Input, "submit_calculation") {
            return Ok(self.state);
        }

        if !self.input.meets_minimum(self.minimum_capital) {
            info!(
                capital = %self.input.capital,
                minimum = %self.minimum_capital,
                "capital below minimum"
            );
            return Err(ControllerError::CapitalBelowMinimum {
                capital: self.input.capital,
                minimum: self.minimum_capital,
            });
        }

        self.result = Some(estimate(self.input.capital, self.input.risk_tier, rng));
        self.transition(ViewState::Loading);
        self.loading_timer = Some(LoadingTimer::start(
            self.loading_delay,
            self.events_tx.clone(),
        ));
        Ok(self.state)
    }

    // ─── Loading ─────────────────────────────────────────────────────────────

    /// Waits for the loading timer and applies it.
    ///
    /// Returns immediately outside of [`ViewState::Loading`].
    pub async fn wait_for_loading(&mut self) -> ViewState {
        while self.state == ViewState::Loading {
            match self.events_rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        self.state
    }

    /// Applies any timer events that already fired, without waiting.
    pub fn poll_events(&mut self) -> ViewState {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        self.state
    }

    fn handle_event(
        &mut self,
        event: UiEvent,
    ) {
        match event {
            UiEvent::LoadingElapsed if self.state == ViewState::Loading => {
                self.loading_timer = None;
                self.transition(ViewState::EmailGate);
            }
            UiEvent::LoadingElapsed => {
                debug!(state = %self.state, "stale loading event ignored");
            }
        }
    }

    // ─── Email gate ──────────────────────────────────────────────────────────

    /// Replaces the email text; validity is recomputed on every change.
    pub fn set_email(
        &mut self,
        raw: impl Into<String>,
    ) -> bool {
        if !self.accepts(ViewState::EmailGate, "set_email") {
            return false;
        }
        self.email.set(raw);
        self.email.is_valid()
    }

    /// Whether the submit action on the email gate is enabled.
    pub fn can_submit_email(&self) -> bool {
        self.state == ViewState::EmailGate && self.email.is_valid()
    }

    /// Moves to [`ViewState::Result`] if the email is valid; otherwise stays.
    pub fn submit_email(&mut self) -> ViewState {
        if !self.accepts(ViewState::EmailGate, "submit_email") {
            return self.state;
        }
        if self.email.is_valid() {
            self.transition(ViewState::Result);
        } else {
            debug!("email submit ignored, address not valid");
        }
        self.state
    }

    // ─── internals ───────────────────────────────────────────────────────────

    fn accepts(
        &self,
        expected: ViewState,
        action: &'static str,
    ) -> bool {
        if self.state == expected {
            true
        } else {
            debug!(action, state = %self.state, "action ignored in current state");
            false
        }
    }

    fn transition(
        &mut self,
        to: ViewState,
    ) {
        info!(from = %self.state, %to, "view state transition");
        self.state = to;
    }
}

impl fmt::Debug for ViewController {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("state", &self.state)
            .field("input", &self.input)
            .field("result", &self.result)
            .field("email", &self.email)
            .field("timer_pending", &self.loading_timer.is_some())
            .finish()
    }
}
