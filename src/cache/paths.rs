// Cache path utilities.
// Resolves the platform cache directory that holds the log file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LOG_FILE: &str = "trendy.log";

/// Get the base cache directory (~/.cache/trendy on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trendy").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| log_path_in(&dir))
}

/// Path to the log file inside `dir`.
pub fn log_path_in(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}
