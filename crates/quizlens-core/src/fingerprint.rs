//! Scan fingerprints for duplicate-question suppression.

use quizlens_protocols::McqCandidate;

/// Field separator for the serialized form. A unit separator cannot
/// appear in extracted text, so the encoding is unambiguous.
const SEPARATOR: char = '\u{1f}';

/// Deterministic serialization of a scan result.
///
/// Two scans of an unchanged question produce equal fingerprints, which
/// lets the scan gate suppress duplicate remote calls. Only the latest
/// value is ever retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFingerprint(String);

impl ScanFingerprint {
    /// Fingerprint a candidate.
    pub fn of(candidate: &McqCandidate) -> Self {
        let mut serialized = candidate.question.replace(SEPARATOR, " ");
        for option in &candidate.options {
            serialized.push(SEPARATOR);
            serialized.push_str(&option.replace(SEPARATOR, " "));
        }
        Self(serialized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
