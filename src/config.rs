//! Report directory resolution

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory snapshots are written to
pub const REPORT_DIR_ENV: &str = "CLAUDE_MONITOR_REPORT_DIR";

/// File name of the published snapshot within the report directory
pub const STATE_FILE_NAME: &str = "current.json";

/// Resolve the report directory
/// Priority: 1. Explicit path from the caller, 2. CLAUDE_MONITOR_REPORT_DIR env var
/// Returns None when neither is set; the publish is then skipped entirely.
pub fn resolve_report_dir(custom_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Explicit path takes highest priority
    if let Some(path) = custom_path {
        return Some(path.to_path_buf());
    }

    // 2. Check the environment variable; an empty value counts as unset
    match env::var(REPORT_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => None,
    }
}
