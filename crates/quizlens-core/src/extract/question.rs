//! Outward walk for locating the question text near an anchor element.

use crate::page::{NodeId, PageSnapshot};

use super::element_text;

/// How many ancestor levels the outward walk climbs.
const QUESTION_WALK_LEVELS: usize = 6;

/// Find question-looking text near `anchor`.
///
/// At each level, preceding sibling elements are scanned nearest-first
/// for text containing a question mark, or for any non-empty heading.
/// The walk then climbs one ancestor and repeats, up to
/// [`QUESTION_WALK_LEVELS`] levels. Returns an empty string when nothing
/// qualifies.
pub(super) fn question_near(snapshot: &PageSnapshot, anchor: NodeId) -> String {
    let mut current = anchor;
    for _ in 0..QUESTION_WALK_LEVELS {
        for sibling in snapshot.preceding_siblings(current) {
            let node = snapshot.node(sibling);
            if !node.is_element() {
                continue;
            }
            let text = element_text(snapshot, sibling);
            if text.is_empty() {
                continue;
            }
            if text.contains('?') || node.is_heading() {
                return text;
            }
        }
        match snapshot.parent(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    String::new()
}
