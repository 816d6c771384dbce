//! Radio-group extraction strategy.

use quizlens_protocols::McqCandidate;
use tracing::trace;

use crate::page::{NodeId, PageSnapshot};

use super::{element_text, question};

/// How far up an associated `<label>` ancestor may sit.
const LABEL_ANCESTOR_LEVELS: usize = 3;

/// Group radio inputs by their `name` attribute and turn the first group
/// that resolves at least two non-empty option texts into a candidate.
pub(super) fn extract(snapshot: &PageSnapshot) -> Option<McqCandidate> {
    let mut groups: Vec<(String, Vec<NodeId>)> = Vec::new();
    for node in snapshot.elements() {
        if !node.is_radio() {
            continue;
        }
        let Some(name) = node.attrs.name.as_deref() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        match groups.iter_mut().find(|(group, _)| group == name) {
            Some((_, members)) => members.push(node.id()),
            None => groups.push((name.to_string(), vec![node.id()])),
        }
    }

    for (name, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        let options: Vec<String> = members
            .iter()
            .filter_map(|&input| option_text(snapshot, input))
            .collect();
        if options.len() < 2 {
            trace!(group = %name, "radio group resolved too few option texts");
            continue;
        }
        let question = question::question_near(snapshot, members[0]);
        return Some(McqCandidate::new(question, options));
    }
    None
}

/// Resolve the option text for one radio input: associated label first,
/// then trailing sibling text, then the input's literal value.
fn option_text(snapshot: &PageSnapshot, input: NodeId) -> Option<String> {
    label_text(snapshot, input)
        .or_else(|| trailing_sibling_text(snapshot, input))
        .or_else(|| value_attr(snapshot, input))
}

fn label_text(snapshot: &PageSnapshot, input: NodeId) -> Option<String> {
    // label[for] pointing at the input's id
    if let Some(id) = snapshot.node(input).attrs.id.as_deref() {
        let labelled = snapshot
            .elements_by_tag("label")
            .find(|label| label.attrs.r#for.as_deref() == Some(id));
        if let Some(label) = labelled {
            let text = element_text(snapshot, label.id());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    // nearest ancestor label
    let mut current = input;
    for _ in 0..LABEL_ANCESTOR_LEVELS {
        let Some(parent) = snapshot.parent(current) else {
            break;
        };
        if snapshot.node(parent).tag == "label" {
            let text = element_text(snapshot, parent);
            if !text.is_empty() {
                return Some(text);
            }
            break;
        }
        current = parent;
    }
    None
}

fn trailing_sibling_text(snapshot: &PageSnapshot, input: NodeId) -> Option<String> {
    for sibling in snapshot.following_siblings(input) {
        let node = snapshot.node(sibling);
        let text = if node.is_text() {
            node.text.trim().to_string()
        } else {
            element_text(snapshot, sibling)
        };
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

fn value_attr(snapshot: &PageSnapshot, input: NodeId) -> Option<String> {
    snapshot
        .node(input)
        .attrs
        .value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
