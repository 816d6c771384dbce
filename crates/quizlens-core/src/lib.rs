//! # Quizlens Core
//!
//! Page snapshot model, MCQ extraction heuristics and answer matching.
//!
//! The three pieces compose into one synchronous pipeline step: a
//! [`PageSnapshot`](page::PageSnapshot) is scanned by
//! [`extract_candidate`](extract::extract_candidate) for a question with
//! options, and a later free-text model reply is reconciled against those
//! options by [`match_option`](matcher::match_option). Everything here is
//! pure and read-only; no function touches the network or the clock.

pub mod extract;
pub mod fingerprint;
pub mod matcher;
pub mod page;

pub use extract::extract_candidate;
pub use fingerprint::ScanFingerprint;
pub use matcher::{match_option, normalize};
pub use page::{NodeId, PageNode, PageSnapshot, SnapshotError};
