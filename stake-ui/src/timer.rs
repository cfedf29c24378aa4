//! Deferred transition out of the loading panel.

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::trace;

/// Events posted back to the controller from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    LoadingElapsed,
}

/// A scheduled [`UiEvent::LoadingElapsed`].
///
/// The task is aborted when the handle is cancelled or dropped, so a timer
/// never outlives the controller that owns it.
#[derive(Debug)]
pub struct LoadingTimer {
    handle: JoinHandle<()>,
}

impl LoadingTimer {
    /// Spawns the timer on the current tokio runtime.
    pub fn start(
        delay: Duration,
        events: UnboundedSender<UiEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(?delay, "loading timer fired");
            // The receiver is gone if the controller was torn down.
            let _ = events.send(UiEvent::LoadingElapsed);
        });

        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
