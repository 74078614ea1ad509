// Logging setup using tracing.
// The viewer owns the terminal, so events go to a file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cache;
use crate::error::{Result, TrendyError};

/// Initialize file logging under the platform cache directory.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. Returns the log path.
pub fn init() -> Result<PathBuf> {
    let dir = cache::cache_dir()
        .ok_or_else(|| TrendyError::Other("no cache directory for this platform".to_string()))?;
    init_in(&dir)
}

/// Initialize file logging into `dir/trendy.log`.
///
/// # Errors
/// Fails if the file can't be opened or a subscriber is already installed.
pub fn init_in(dir: &Path) -> Result<PathBuf> {
    let path = cache::log_path_in(dir);
    let file = open_log(&path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| TrendyError::Other(format!("Failed to initialize tracing: {}", e)))?;

    Ok(path)
}

/// Initialize stderr logging for tests (no-op if already initialized).
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache::log_path_in(&temp_dir.path().join("nested"));

        open_log(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_test_helper() {
        // Should never panic
        init_test();
        init_test();
        tracing::debug!("logging from a test");
    }
}
