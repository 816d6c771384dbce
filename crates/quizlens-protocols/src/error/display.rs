//! Overlay display errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Render failed: {0}")]
    Render(String),

    #[error("Display closed")]
    Closed,
}
