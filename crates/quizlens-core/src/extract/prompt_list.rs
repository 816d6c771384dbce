//! Question-mark-plus-list extraction strategy.

use quizlens_protocols::McqCandidate;

use crate::page::{NodeId, PageSnapshot};

use super::element_text;

/// Prompts longer than this are rejected outright.
const MAX_PROMPT_LEN: usize = 400;

const PROMPT_TAGS: [&str; 9] = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "span"];
const LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Find the first short question-marked prompt element, then harvest the
/// list that immediately follows it (or sits nested inside it).
///
/// Only the first matching prompt is considered; if it has no usable
/// list, the strategy fails rather than scanning on.
pub(super) fn extract(snapshot: &PageSnapshot) -> Option<McqCandidate> {
    let prompt = snapshot.elements().find(|node| {
        if !PROMPT_TAGS.contains(&node.tag.as_str()) {
            return false;
        }
        let text = element_text(snapshot, node.id());
        !text.is_empty() && text.contains('?') && text.chars().count() < MAX_PROMPT_LEN
    })?;

    let list = next_sibling_list(snapshot, prompt.id())
        .or_else(|| nested_list(snapshot, prompt.id()))?;

    let options: Vec<String> = snapshot
        .node(list)
        .children
        .iter()
        .filter(|&&child| snapshot.node(child).tag == "li")
        .map(|&child| element_text(snapshot, child))
        .filter(|text| !text.is_empty())
        .collect();
    if options.len() < 2 {
        return None;
    }

    let question = element_text(snapshot, prompt.id());
    Some(McqCandidate::new(question, options))
}

/// The immediately following element sibling, when it is a list.
fn next_sibling_list(snapshot: &PageSnapshot, id: NodeId) -> Option<NodeId> {
    let next = snapshot
        .following_siblings(id)
        .into_iter()
        .find(|&sibling| snapshot.node(sibling).is_element())?;
    LIST_TAGS
        .contains(&snapshot.node(next).tag.as_str())
        .then_some(next)
}

/// First list descendant in document order.
fn nested_list(snapshot: &PageSnapshot, id: NodeId) -> Option<NodeId> {
    for &child in &snapshot.node(id).children {
        if LIST_TAGS.contains(&snapshot.node(child).tag.as_str()) {
            return Some(child);
        }
        if let Some(found) = nested_list(snapshot, child) {
            return Some(found);
        }
    }
    None
}
