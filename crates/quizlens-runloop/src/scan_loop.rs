//! The scan loop: requests in, overlay updates out.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use quizlens_core::{extract_candidate, match_option, ScanFingerprint};
use quizlens_protocols::{AnswerRequest, InferenceProvider, McqCandidate, OverlaySink};

use crate::gate::{Admission, ScanGate};
use crate::source::PageSource;
use crate::trigger::ScanRequest;

/// Shown when nothing was found or the reply did not resolve.
pub const PLACEHOLDER_UNRESOLVED: &str = "N/A";
/// Shown when the remote call failed.
pub const PLACEHOLDER_ERROR: &str = "ERR";
/// Shown while a forced scan is waiting on the model.
pub const BUSY_MARKER: &str = ".";

/// Consumes scan requests and drives the extract-ask-match-display
/// pipeline.
///
/// Extraction and matching run synchronously on the loop; the remote
/// call is spawned off so trigger intake is never blocked. Failures
/// never escape: every outcome becomes overlay text and the loop keeps
/// accepting requests.
pub struct ScanLoop {
    source: Arc<dyn PageSource>,
    provider: Arc<dyn InferenceProvider>,
    overlay: Arc<dyn OverlaySink>,
    gate: Arc<Mutex<ScanGate>>,
}

impl ScanLoop {
    pub fn new(
        source: Arc<dyn PageSource>,
        provider: Arc<dyn InferenceProvider>,
        overlay: Arc<dyn OverlaySink>,
        gate: ScanGate,
    ) -> Self {
        Self {
            source,
            provider,
            overlay,
            gate: Arc::new(Mutex::new(gate)),
        }
    }

    /// Run until the request channel closes.
    pub async fn run(&self, mut rx: mpsc::Receiver<ScanRequest>) {
        while let Some(request) = rx.recv().await {
            let _ = self.handle(request).await;
        }
        debug!("scan request channel closed");
    }

    /// Handle one scan request. Returns the in-flight answer task when
    /// the request was admitted to a remote call.
    pub async fn handle(&self, request: ScanRequest) -> Option<JoinHandle<()>> {
        debug!(?request, "scan requested");

        let snapshot = match self.source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("snapshot unavailable: {}", error);
                if request.forced {
                    self.show(PLACEHOLDER_ERROR).await;
                }
                return None;
            }
        };

        let Some(candidate) = extract_candidate(&snapshot) else {
            debug!("nothing to answer on this page");
            if request.forced {
                self.show(PLACEHOLDER_UNRESOLVED).await;
            }
            return None;
        };

        let fingerprint = ScanFingerprint::of(&candidate);
        let admission = self
            .gate
            .lock()
            .expect("scan gate poisoned")
            .admit(request.forced, &fingerprint, Instant::now());
        if admission != Admission::Admitted {
            debug!(?admission, "scan suppressed");
            return None;
        }

        if request.forced {
            self.show(BUSY_MARKER).await;
        }

        let provider = Arc::clone(&self.provider);
        let overlay = Arc::clone(&self.overlay);
        let gate = Arc::clone(&self.gate);
        Some(tokio::spawn(async move {
            let text = resolve(provider.as_ref(), &candidate).await;
            if let Err(error) = overlay.show(&text).await {
                warn!("overlay rejected result: {}", error);
            }
            gate.lock().expect("scan gate poisoned").settle();
        }))
    }

    /// Run one forced scan to completion and return the display text.
    ///
    /// Used for one-shot invocations; the pipeline runs inline instead
    /// of being spawned, but goes through the same gate.
    pub async fn scan_once(&self) -> String {
        let snapshot = match self.source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("snapshot unavailable: {}", error);
                self.show(PLACEHOLDER_ERROR).await;
                return PLACEHOLDER_ERROR.to_string();
            }
        };

        let Some(candidate) = extract_candidate(&snapshot) else {
            self.show(PLACEHOLDER_UNRESOLVED).await;
            return PLACEHOLDER_UNRESOLVED.to_string();
        };

        let fingerprint = ScanFingerprint::of(&candidate);
        let admission = self
            .gate
            .lock()
            .expect("scan gate poisoned")
            .admit(true, &fingerprint, Instant::now());
        if admission != Admission::Admitted {
            debug!(?admission, "one-shot scan suppressed");
            return BUSY_MARKER.to_string();
        }

        self.show(BUSY_MARKER).await;
        let text = resolve(self.provider.as_ref(), &candidate).await;
        self.show(&text).await;
        self.gate.lock().expect("scan gate poisoned").settle();
        text
    }

    async fn show(&self, text: &str) {
        if let Err(error) = self.overlay.show(text).await {
            warn!("overlay rejected message: {}", error);
        }
    }
}

/// Ask the model and reconcile its reply against the options.
///
/// Every failure mode collapses into placeholder text here; nothing
/// propagates as an error.
async fn resolve(provider: &dyn InferenceProvider, candidate: &McqCandidate) -> String {
    match provider.answer(AnswerRequest::from_candidate(candidate)).await {
        Ok(response) if response.is_unknown() => PLACEHOLDER_UNRESOLVED.to_string(),
        Ok(response) => match match_option(&response.text, &candidate.options) {
            Some(option) => option.to_string(),
            None => {
                debug!("reply did not resolve to an option: {:?}", response.text);
                PLACEHOLDER_UNRESOLVED.to_string()
            }
        },
        Err(error) => {
            warn!("inference call failed: {}", error);
            PLACEHOLDER_ERROR.to_string()
        }
    }
}

#[cfg(test)]
#[path = "scan_loop_tests.rs"]
mod tests;
