//! Trigger sources feeding the scan loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::TriggerError;

/// What caused a scan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Explicit user action.
    Manual,
    /// Periodic rescan timer.
    Timer,
    /// Page snapshot changed on disk.
    PageChange,
}

/// One scan request event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    /// Forced requests bypass rate limiting and duplicate suppression.
    pub forced: bool,
    pub source: TriggerSource,
}

impl ScanRequest {
    /// A forced request from an explicit user action.
    pub fn forced() -> Self {
        Self {
            forced: true,
            source: TriggerSource::Manual,
        }
    }

    /// An ambient request from a periodic or page-change trigger.
    pub fn ambient(source: TriggerSource) -> Self {
        Self {
            forced: false,
            source,
        }
    }
}

/// Periodic ambient trigger.
pub struct IntervalTrigger {
    handle: JoinHandle<()>,
}

impl IntervalTrigger {
    /// Start sending an ambient request every `period`.
    pub fn spawn(period: Duration, tx: mpsc::Sender<ScanRequest>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The immediate first tick would race the startup scan.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(ScanRequest::ambient(TriggerSource::Timer)).await.is_err() {
                    debug!("scan channel closed, stopping interval trigger");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop the trigger.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for IntervalTrigger {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Collapses change-notification bursts into single firings.
#[derive(Debug)]
pub(crate) struct Debouncer {
    window: Duration,
    last_fire: Option<Instant>,
}

impl Debouncer {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            last_fire: None,
        }
    }

    /// Whether an event at `now` should fire, recording it if so.
    pub(crate) fn should_fire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_fire {
            if now.duration_since(last) < self.window {
                return false;
            }
        }
        self.last_fire = Some(now);
        true
    }
}

/// Watches the snapshot file and emits ambient scan requests on change.
pub struct SnapshotWatcher {
    _watcher: RecommendedWatcher,
    handle: JoinHandle<()>,
}

impl SnapshotWatcher {
    /// Start watching `path`, debouncing bursts within `debounce`.
    pub fn spawn(
        path: PathBuf,
        debounce: Duration,
        tx: mpsc::Sender<ScanRequest>,
    ) -> Result<Self, TriggerError> {
        let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(100);

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = event_tx.blocking_send(res);
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )
        .map_err(|e| TriggerError::Watcher(format!("Failed to create watcher: {}", e)))?;

        // Watch the parent directory: exporters typically replace the
        // file rather than write it in place.
        let watch_target = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher
            .watch(&watch_target, RecursiveMode::NonRecursive)
            .map_err(|e| TriggerError::Watcher(format!("Failed to watch {:?}: {}", watch_target, e)))?;
        info!("Watching snapshot: {:?}", path);

        let handle = tokio::spawn(async move {
            let mut debouncer = Debouncer::new(debounce);
            while let Some(event) = event_rx.recv().await {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("Watcher error: {}", e);
                        continue;
                    }
                };
                if !event.paths.iter().any(|p| p.ends_with(
                    path.file_name().unwrap_or_default(),
                )) {
                    continue;
                }
                if !debouncer.should_fire(Instant::now()) {
                    continue;
                }
                debug!("snapshot changed, requesting scan");
                if tx
                    .send(ScanRequest::ambient(TriggerSource::PageChange))
                    .await
                    .is_err()
                {
                    debug!("scan channel closed, stopping snapshot watcher");
                    break;
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            handle,
        })
    }
}

impl Drop for SnapshotWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_constructors() {
        let forced = ScanRequest::forced();
        assert!(forced.forced);
        assert_eq!(forced.source, TriggerSource::Manual);

        let ambient = ScanRequest::ambient(TriggerSource::PageChange);
        assert!(!ambient.forced);
    }

    #[test]
    fn test_debouncer_first_event_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        assert!(debouncer.should_fire(Instant::now()));
    }

    #[test]
    fn test_debouncer_suppresses_burst() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let now = Instant::now();
        assert!(debouncer.should_fire(now));
        assert!(!debouncer.should_fire(now + Duration::from_millis(100)));
        assert!(!debouncer.should_fire(now + Duration::from_millis(499)));
        assert!(debouncer.should_fire(now + Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_trigger_sends_ambient_requests() {
        let (tx, mut rx) = mpsc::channel(8);
        let _trigger = IntervalTrigger::spawn(Duration::from_secs(5), tx);

        tokio::time::sleep(Duration::from_secs(11)).await;
        let first = rx.recv().await.unwrap();
        assert_eq!(first, ScanRequest::ambient(TriggerSource::Timer));
        let second = rx.recv().await.unwrap();
        assert_eq!(second.source, TriggerSource::Timer);
    }

    #[tokio::test]
    async fn test_snapshot_watcher_fires_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, b"{}").unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let _watcher =
            SnapshotWatcher::spawn(path.clone(), Duration::from_millis(0), tx).unwrap();

        // Give the watcher a moment to register, then touch the file.
        tokio::time::sleep(Duration::from_millis(200)).await;
        std::fs::write(&path, br#"{"changed": true}"#).unwrap();

        let request =
            tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        assert_eq!(request, ScanRequest::ambient(TriggerSource::PageChange));
    }
}
