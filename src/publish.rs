//! Snapshot serialization and atomic persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::{resolve_report_dir, STATE_FILE_NAME};
use crate::models::{MonitorSettings, Snapshot, UsageMetrics};
use crate::normalize::build_snapshot;

/// Error type for snapshot persistence
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a snapshot to `<report_dir>/current.json`, replacing any previous one
///
/// The content goes to a uniquely-named temporary file in the same directory
/// first and is renamed onto the final path, so a concurrent reader observes
/// either the old complete file or the new one, never a partial write. The
/// staging name is unique per write; racing writers cannot truncate each
/// other's staging file, and the last rename wins.
pub fn write_snapshot(snapshot: &Snapshot, report_dir: &Path) -> Result<PathBuf, PublishError> {
    let path = report_dir.join(STATE_FILE_NAME);
    let json = serde_json::to_string_pretty(snapshot)?;

    let mut tmp = NamedTempFile::new_in(report_dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| PublishError::Io(e.error))?;

    Ok(path)
}

/// Publishes usage snapshots for external consumers (status bars, dashboards)
///
/// This is the fail-silent boundary around the whole normalize-then-write
/// pipeline: every failure inside `publish` is logged and suppressed so a
/// transient I/O problem never disturbs the host monitoring loop. The worst
/// outcome of any error is that no file is written and a stale one remains.
#[derive(Debug, Clone)]
pub struct StateReporter {
    enabled: bool,
    report_dir: Option<PathBuf>,
    settings: MonitorSettings,
}

impl Default for StateReporter {
    fn default() -> Self {
        Self::new(MonitorSettings::default())
    }
}

impl StateReporter {
    /// Create an enabled reporter with the given presentation settings
    ///
    /// The report directory is resolved per call from the environment unless
    /// one is set with [`with_report_dir`](Self::with_report_dir).
    pub fn new(settings: MonitorSettings) -> Self {
        Self {
            enabled: true,
            report_dir: None,
            settings,
        }
    }

    /// Pin the report directory instead of resolving it from the environment
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Enable or disable publishing; a disabled reporter never touches disk
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Normalize the metrics and publish the snapshot, silently on failure
    ///
    /// Skips without writing when the reporter is disabled, when no report
    /// directory is configured, or when the metrics carry no reset deadline.
    pub fn publish(&self, metrics: &UsageMetrics) {
        if !self.enabled {
            return;
        }

        let Some(report_dir) = resolve_report_dir(self.report_dir.as_deref()) else {
            debug!("No report directory configured, skipping snapshot");
            return;
        };

        let Some(snapshot) = build_snapshot(metrics, &self.settings) else {
            debug!("Usage metrics carry no reset time, skipping snapshot");
            return;
        };

        if let Err(e) = write_snapshot(&snapshot, &report_dir) {
            warn!("Failed to write snapshot in {:?}: {}", report_dir, e);
        }
    }
}
