//! Transient overlay display trait definition.

use async_trait::async_trait;

use crate::error::DisplayError;

/// Core trait for transient result displays.
///
/// An overlay shows a short text for a fixed duration and then removes
/// itself. At most one overlay is visible at a time; a new `show`
/// replaces whatever is currently displayed.
#[async_trait]
pub trait OverlaySink: Send + Sync {
    /// Returns the sink ID.
    fn id(&self) -> &str;

    /// Show a short text, replacing any prior overlay.
    async fn show(&self, text: &str) -> Result<(), DisplayError>;
}
