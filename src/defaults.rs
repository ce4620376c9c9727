//! Default values for gitcode-viewer.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Display name printed in banners.
pub const APP_NAME: &str = "GitCodeViewer";

/// Version printed in the `repos` farewell line.
pub const APP_VERSION: &str = "1.0.0";

/// File the viewer settings are written to.
///
/// Can be overridden with `--output` or the `GITCODE_CONFIG` environment
/// variable.
pub const DEFAULT_SETTINGS_FILENAME: &str = "config.ini";

/// File the repository export is written to.
pub const DEFAULT_EXPORT_FILENAME: &str = "repo_export.json";

/// Query used by the `sync` walkthrough search.
pub const DEFAULT_SEARCH_QUERY: &str = "act";

/// Time the file sync worker sleeps before sorting, in milliseconds.
pub const DEFAULT_FILE_SYNC_DELAY_MS: u64 = 500;

/// Time a simulated repository sync takes, in milliseconds.
pub const DEFAULT_REPO_SYNC_DELAY_MS: u64 = 500;

/// Status lines printed by the main thread while the file sync runs.
pub const DEFAULT_WORK_STEPS: u32 = 3;

/// Ids the `sync` walkthrough tries to sync. Id 4 is deliberately absent.
pub const SYNC_DEMO_IDS: [u32; 4] = [1, 2, 3, 4];

/// Convert a millisecond CLI value into a `Duration`.
pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
