//! MCQ extraction heuristics.
//!
//! A prioritized sequence of strategies runs against the snapshot; the
//! first one that yields at least two non-empty options wins outright.
//! There is no scoring or merging across strategies, and none of them
//! mutates the snapshot.

mod option_like;
mod prompt_list;
mod question;
mod radio;

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;

use quizlens_protocols::McqCandidate;
use tracing::debug;

use crate::page::{NodeId, PageSnapshot};

/// Locate one multiple-choice question and its options.
///
/// Strategies, in order:
/// 1. radio input groups, options from labels / trailing text / values;
/// 2. a short question-marked prompt followed by (or containing) a list;
/// 3. generic option-looking elements (list items, labels, option roles).
pub fn extract_candidate(snapshot: &PageSnapshot) -> Option<McqCandidate> {
    if let Some(candidate) = radio::extract(snapshot) {
        debug!(options = candidate.options.len(), "extracted via radio groups");
        return Some(candidate);
    }
    if let Some(candidate) = prompt_list::extract(snapshot) {
        debug!(options = candidate.options.len(), "extracted via prompt + list");
        return Some(candidate);
    }
    if let Some(candidate) = option_like::extract(snapshot) {
        debug!(
            options = candidate.options.len(),
            "extracted via option-like elements"
        );
        return Some(candidate);
    }
    debug!("no multiple-choice question found");
    None
}

/// Deep text of a node, trimmed. Whitespace-only text counts as empty.
fn element_text(snapshot: &PageSnapshot, id: NodeId) -> String {
    snapshot.text_content(id).trim().to_string()
}
