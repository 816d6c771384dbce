//! # Quizlens RunLoop
//!
//! Event-driven scan orchestration: trigger sources feed scan requests
//! into a single consumer, a gate decides which requests may spend a
//! remote call, and the loop turns admitted requests into overlay
//! updates.
//!
//! ## Key Components
//!
//! - [`ScanGate`]: rate limiting and duplicate suppression state
//! - [`ScanRequest`] / [`TriggerSource`]: scan request events
//! - [`IntervalTrigger`] / [`SnapshotWatcher`]: ambient trigger sources
//! - [`PageSource`] / [`FileSnapshotSource`]: where snapshots come from
//! - [`ScanLoop`]: the consumer tying it all together

pub mod error;
pub mod gate;
pub mod scan_loop;
pub mod source;
pub mod trigger;

pub use error::TriggerError;
pub use gate::{Admission, ScanGate, DEFAULT_MIN_INTERVAL};
pub use scan_loop::{ScanLoop, BUSY_MARKER, PLACEHOLDER_ERROR, PLACEHOLDER_UNRESOLVED};
pub use source::{FileSnapshotSource, PageSource};
pub use trigger::{IntervalTrigger, ScanRequest, SnapshotWatcher, TriggerSource};
