//! File-backed collaborators.
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use standings_core::PredictedStandings;

use crate::api::{ConfigSource, FetchError, StandingsSource};
use crate::session::DisplayConfig;

/// Reads the snapshot the backend publishes as a JSON file.
///
/// The file is re-read on every call, so each poll observes whatever the
/// backend wrote last.
#[derive(Debug, Clone)]
pub struct FileStandingsSource {
    path: PathBuf,
}

impl FileStandingsSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StandingsSource for FileStandingsSource {
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let snapshot = PredictedStandings::from_json_slice(&bytes)?;

        tracing::trace!(
            "read snapshot from {} ({} classes)",
            self.path.display(),
            snapshot.class_ids.len()
        );

        Ok(snapshot)
    }
}

/// Reads the display configuration from a JSON file.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn fetch_configuration(&self) -> Result<DisplayConfig, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let config = serde_json::from_slice(&bytes)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standings_core::CarClassId;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "status": "Race",
        "track_name": "Spa",
        "self_car_class_id": 2,
        "car_class_ids": [2],
        "standings": {
            "2": {
                "car_class_id": 2,
                "car_class_name": "GT3",
                "items": [{"cust_id": 7, "predicted_position": 1}]
            }
        }
    }"#;

    #[tokio::test]
    async fn reads_snapshot_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("standings.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let snapshot = FileStandingsSource::new(&path)
            .fetch_latest_standings()
            .await
            .unwrap();

        assert_eq!(snapshot.track_name, "Spa");
        assert!(snapshot.class(CarClassId(2)).is_some());
    }

    #[tokio::test]
    async fn missing_file_is_a_transport_error() {
        let dir = TempDir::new().unwrap();
        let source = FileStandingsSource::new(dir.path().join("absent.json"));

        let err = source.fetch_latest_standings().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn inconsistent_snapshot_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("standings.json");
        std::fs::write(&path, r#"{"self_car_class_id": 9, "car_class_ids": [1]}"#).unwrap();

        let err = FileStandingsSource::new(&path)
            .fetch_latest_standings()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn reads_config_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"show_topn": 3}"#).unwrap();

        let config = FileConfigSource::new(&path)
            .fetch_configuration()
            .await
            .unwrap();
        assert_eq!(config.show_top_n, 3);
    }
}
