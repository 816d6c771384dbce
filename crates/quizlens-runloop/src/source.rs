//! Page snapshot sources.

use std::path::PathBuf;

use async_trait::async_trait;

use quizlens_core::{PageSnapshot, SnapshotError};

/// Where the scan loop gets its view of the page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the source ID.
    fn id(&self) -> &str;

    /// Capture the current page state.
    async fn snapshot(&self) -> Result<PageSnapshot, SnapshotError>;
}

/// Reads a snapshot JSON file on every scan.
///
/// The file is re-read each time so an external exporter can keep
/// rewriting it in place.
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The watched file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PageSource for FileSnapshotSource {
    fn id(&self) -> &str {
        "snapshot-file"
    }

    async fn snapshot(&self) -> Result<PageSnapshot, SnapshotError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        PageSnapshot::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_file_source_reads_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"root": {"tag": "body", "children": [{"text": "hi"}]}}"#)
            .unwrap();

        let source = FileSnapshotSource::new(file.path());
        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSnapshotSource::new("/nonexistent/page.json");
        assert!(matches!(
            source.snapshot().await,
            Err(SnapshotError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source_rereads_changes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), br#"{"root": {"tag": "body"}}"#).unwrap();

        let source = FileSnapshotSource::new(file.path());
        assert_eq!(source.snapshot().await.unwrap().len(), 1);

        std::fs::write(
            file.path(),
            br#"{"root": {"tag": "body", "children": [{"tag": "p"}]}}"#,
        )
        .unwrap();
        assert_eq!(source.snapshot().await.unwrap().len(), 2);
    }
}
