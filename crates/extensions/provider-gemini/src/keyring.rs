//! Round-robin API key ring.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Ordered set of API keys with a rotating cursor.
///
/// The cursor persists for the ring's lifetime: after a key fails and
/// the ring advances, later calls start from the key that last worked
/// instead of re-trying exhausted keys from the front. Advancing wraps
/// around, so a key that recovers is reached again.
pub struct KeyRing {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyRing {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key the cursor points at. Panics on an empty ring; callers
    /// check `is_empty` first.
    pub fn current(&self) -> &str {
        &self.keys[self.cursor.load(Ordering::Relaxed) % self.keys.len()]
    }

    /// Move the cursor to the next key, wrapping at the end.
    pub fn advance(&self) {
        self.cursor.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> KeyRing {
        KeyRing::new(vec!["k0".to_string(), "k1".to_string(), "k2".to_string()])
    }

    #[test]
    fn test_current_starts_at_first_key() {
        assert_eq!(ring().current(), "k0");
    }

    #[test]
    fn test_advance_rotates_and_wraps() {
        let ring = ring();
        ring.advance();
        assert_eq!(ring.current(), "k1");
        ring.advance();
        assert_eq!(ring.current(), "k2");
        ring.advance();
        assert_eq!(ring.current(), "k0");
    }

    #[test]
    fn test_cursor_persists_across_reads() {
        let ring = ring();
        ring.advance();
        // Repeated reads do not move the cursor.
        assert_eq!(ring.current(), "k1");
        assert_eq!(ring.current(), "k1");
    }

    #[test]
    fn test_empty_ring() {
        let ring = KeyRing::new(Vec::new());
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
    }
}
