//! Detected multiple-choice question candidates.

use serde::{Deserialize, Serialize};

/// A multiple-choice question detected on a page.
///
/// Produced fresh on each scan and owned by the caller for one
/// scan-match-display cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqCandidate {
    /// Question text. May be empty when no prompt could be located.
    pub question: String,
    /// Answer options in page order. Always at least two entries.
    pub options: Vec<String>,
}

impl McqCandidate {
    /// Create a new candidate.
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_new() {
        let candidate = McqCandidate::new("Pick one?", vec!["A".to_string(), "B".to_string()]);
        assert_eq!(candidate.question, "Pick one?");
        assert_eq!(candidate.options.len(), 2);
    }

    #[test]
    fn test_candidate_roundtrip() {
        let candidate = McqCandidate::new("Q?", vec!["x".to_string(), "y".to_string()]);
        let json = serde_json::to_string(&candidate).unwrap();
        let back: McqCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }

    #[test]
    fn test_candidate_empty_question_allowed() {
        let candidate = McqCandidate::new("", vec!["x".to_string(), "y".to_string()]);
        assert!(candidate.question.is_empty());
    }
}
