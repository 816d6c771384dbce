//! Scan admission gate.
//!
//! Holds the rate-limiting state as one explicit context object owned
//! by the scan loop: the latest fingerprint, the instant of the last
//! remote call, and whether a call is in flight. Single writer; there
//! are no ambient globals.

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;

use std::time::{Duration, Instant};

use quizlens_core::ScanFingerprint;

/// Minimum gap between remote calls for ambient scans.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(3000);

/// Why a request was or was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request may spend a remote call.
    Admitted,
    /// A remote call is already in flight; nothing is queued.
    Busy,
    /// Ambient request inside the minimum interval.
    TooSoon,
    /// Ambient request for the same question as the last call.
    Duplicate,
}

/// Admission state machine: `Idle` or `Pending` (call in flight).
#[derive(Debug)]
pub struct ScanGate {
    min_interval: Duration,
    in_flight: bool,
    last_fingerprint: Option<ScanFingerprint>,
    last_call: Option<Instant>,
}

impl ScanGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            in_flight: false,
            last_fingerprint: None,
            last_call: None,
        }
    }

    /// Decide whether a scan may spend a remote call at `now`.
    ///
    /// Forced requests skip the interval and duplicate checks but still
    /// respect single-flight. An admitted request immediately marks the
    /// gate pending and records `now` and the fingerprint; the caller
    /// must [`settle`](Self::settle) once the call finishes.
    pub fn admit(&mut self, forced: bool, fingerprint: &ScanFingerprint, now: Instant) -> Admission {
        if self.in_flight {
            return Admission::Busy;
        }
        if !forced {
            if let Some(last) = self.last_call {
                if now.duration_since(last) < self.min_interval {
                    return Admission::TooSoon;
                }
            }
            if self.last_fingerprint.as_ref() == Some(fingerprint) {
                return Admission::Duplicate;
            }
        }

        self.in_flight = true;
        self.last_call = Some(now);
        self.last_fingerprint = Some(fingerprint.clone());
        Admission::Admitted
    }

    /// Mark the in-flight call as finished.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }

    /// True while a remote call is in flight.
    pub fn is_pending(&self) -> bool {
        self.in_flight
    }
}

impl Default for ScanGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
