pub mod app;
pub mod config;
pub mod email;
pub mod logging;
pub mod state;
pub mod timer;
pub mod utils;
pub mod views;

pub use app::{SessionOutcome, run_session};
pub use config::AppConfig;
pub use state::{ControllerError, ViewController, ViewState};
