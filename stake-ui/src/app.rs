//! Line-driven session loop.
//!
//! Drives one [`ViewController`] from the input form to the result panel,
//! reading answers line by line and printing each panel as it becomes
//! active. Reaching end of input abandons the session; dropping the
//! controller afterwards cancels any pending loading timer.

use std::io::Write;

use anyhow::Result;
use rand::Rng;
use stake_core::{CalculationResult, ParseRiskTierError, RiskTier};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::config::AppConfig;
use crate::state::{ViewController, ViewState};
use crate::views::render;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The result panel was shown.
    Completed(CalculationResult),
    /// Input ran out while the controller was in the given state.
    Abandoned(ViewState),
}

/// Runs one session until the result is shown or `reader` is exhausted.
pub async fn run_session<R, W, G>(
    controller: &mut ViewController,
    config: &AppConfig,
    reader: R,
    writer: &mut W,
    rng: &mut G,
) -> Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    G: Rng + ?Sized,
{
    let mut lines = reader.lines();

    loop {
        writeln!(writer, "{}\n", render(controller, config))?;

        match controller.state() {
            ViewState::Input => {
                write!(writer, "Starting capital: ")?;
                writer.flush()?;
                let Some(capital) = lines.next_line().await? else {
                    return Ok(SessionOutcome::Abandoned(controller.state()));
                };
                if !capital.trim().is_empty() {
                    if let Err(error) = controller.set_capital_text(&capital) {
                        writeln!(writer, "⚠️  {error}\n")?;
                        continue;
                    }
                }

                write!(writer, "Risk level [l/m/h]: ")?;
                writer.flush()?;
                let Some(tier) = lines.next_line().await? else {
                    return Ok(SessionOutcome::Abandoned(controller.state()));
                };
                if !tier.trim().is_empty() {
                    match RiskTier::parse(&tier) {
                        Some(tier) => {
                            controller.select_risk_tier(tier);
                        }
                        None => {
                            let error = ParseRiskTierError(tier.trim().to_string());
                            writeln!(writer, "⚠️  {error}\n")?;
                            continue;
                        }
                    }
                }

                if let Err(error) = controller.submit_calculation(rng) {
                    writeln!(writer, "⚠️  {error}\n")?;
                }
            }
            ViewState::Loading => {
                writer.flush()?;
                controller.wait_for_loading().await;
            }
            ViewState::EmailGate => {
                write!(writer, "E-mail: ")?;
                writer.flush()?;
                let Some(email) = lines.next_line().await? else {
                    return Ok(SessionOutcome::Abandoned(controller.state()));
                };
                controller.set_email(email);
                if !controller.can_submit_email() {
                    writeln!(writer, "⚠️  Please enter a valid e-mail address.\n")?;
                    continue;
                }
                controller.submit_email();
            }
            ViewState::Result => {
                writer.flush()?;
                return match controller.result() {
                    Some(result) => Ok(SessionOutcome::Completed(result.clone())),
                    None => {
                        debug!("result state reached without a stored result");
                        Ok(SessionOutcome::Abandoned(ViewState::Result))
                    }
                };
            }
        }
    }
}
