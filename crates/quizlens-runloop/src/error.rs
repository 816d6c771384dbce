//! Error types for trigger sources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("File watcher error: {0}")]
    Watcher(String),

    #[error("Trigger channel closed")]
    ChannelClosed,
}
