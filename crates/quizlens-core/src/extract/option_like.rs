//! Generic option-element extraction strategy.

use quizlens_protocols::McqCandidate;

use crate::page::{NodeId, PageSnapshot};

use super::{element_text, question};

/// Only the first few option-looking elements are considered.
const MAX_OPTION_ELEMENTS: usize = 10;

const OPTION_ROLES: [&str; 4] = ["option", "radio", "checkbox", "menuitemradio"];

/// Sweep up option-looking elements (list items, labels, option/choice
/// roles) and accept them when at least two carry non-empty text.
pub(super) fn extract(snapshot: &PageSnapshot) -> Option<McqCandidate> {
    let candidates: Vec<NodeId> = snapshot
        .elements()
        .filter(|node| {
            node.tag == "li"
                || node.tag == "label"
                || node
                    .attrs
                    .role
                    .as_deref()
                    .is_some_and(|role| OPTION_ROLES.contains(&role.to_ascii_lowercase().as_str()))
        })
        .take(MAX_OPTION_ELEMENTS)
        .map(|node| node.id())
        .collect();

    let first = *candidates.first()?;
    let options: Vec<String> = candidates
        .iter()
        .map(|&id| element_text(snapshot, id))
        .filter(|text| !text.is_empty())
        .collect();
    if options.len() < 2 {
        return None;
    }

    let question = question::question_near(snapshot, first);
    Some(McqCandidate::new(question, options))
}
