use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stake_core::RiskTier;
use tokio::io::BufReader;
use tracing::{debug, info};

use stake_ui::{AppConfig, SessionOutcome, ViewController, logging, run_session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Potential profit calculator.
///
/// Asks for a starting capital and a risk level, estimates monthly and
/// yearly profit, and shows the result once an e-mail address is entered.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML).
    /// Defaults to `profit-calculator.toml` in the working directory, if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial starting capital, e.g. `25000` or `25 000`.
    #[arg(long)]
    capital: Option<String>,

    /// Initial risk level: low, medium or high.
    #[arg(long)]
    risk: Option<RiskTier>,

    /// Log filter, e.g. `debug` or `info,stake_core=trace`. Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file. Overrides the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if let Some(level) = cli.log_level.as_deref().or(config.logging.level.as_deref()) {
        logging::set_log_level(level)?;
    }
    if let Some(path) = cli.log_file.as_deref().or(config.logging.file.as_deref()) {
        logging::enable_file_logging(path)?;
    }

    let mut controller = ViewController::new(&config.calculator);
    if let Some(capital) = &cli.capital {
        controller.set_capital_text(capital)?;
    }
    if let Some(tier) = cli.risk {
        controller.select_risk_tier(tier);
    }
    debug!(?controller, "session started");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let mut rng = StdRng::from_entropy();

    match run_session(&mut controller, &config, stdin, &mut stdout, &mut rng).await? {
        SessionOutcome::Completed(result) => debug!(?result, "session completed"),
        SessionOutcome::Abandoned(state) => info!(%state, "session ended before the result"),
    }

    Ok(())
}
