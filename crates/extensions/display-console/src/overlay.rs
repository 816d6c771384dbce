//! Single-slot transient overlay rendered to the console.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use quizlens_protocols::{DisplayError, OverlaySink};

/// Console-backed overlay.
///
/// Holds at most one visible message; showing a new one replaces the
/// old immediately, and every message expires on its own after the
/// configured duration.
pub struct ConsoleOverlay {
    duration: Duration,
    slot: Arc<Mutex<Slot>>,
}

#[derive(Default)]
struct Slot {
    text: Option<String>,
    /// Bumped on every show so a stale expiry cannot clear a newer message.
    generation: u64,
}

impl ConsoleOverlay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// The currently visible text, if any.
    pub fn current(&self) -> Option<String> {
        self.slot.lock().expect("overlay slot poisoned").text.clone()
    }
}

#[async_trait]
impl OverlaySink for ConsoleOverlay {
    fn id(&self) -> &str {
        "console"
    }

    async fn show(&self, text: &str) -> Result<(), DisplayError> {
        let generation = {
            let mut slot = self.slot.lock().expect("overlay slot poisoned");
            slot.generation += 1;
            slot.text = Some(text.to_string());
            slot.generation
        };

        println!("{}", text);

        let slot = Arc::clone(&self.slot);
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = slot.lock().expect("overlay slot poisoned");
            if slot.generation == generation {
                slot.text = None;
                debug!("overlay expired");
            }
        });

        Ok(())
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
