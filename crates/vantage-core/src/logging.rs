//! Diagnostics setup.
//!
//! All runtime diagnostics go through `tracing`. Output defaults to stderr;
//! when the config names a log file, writes go through a non-blocking file
//! appender instead.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initializes the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`. Returns the
/// appender guard when file logging is active; the caller must hold it for
/// as long as log output should keep flushing. Calling this twice is not an
/// error (the second call is a no-op).
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &config.log_file {
        let parent = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log_file has no file name: {}", path.display()))?;
        let appender = tracing_appender::rolling::never(parent, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init();
        Ok(Some(guard))
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_reentrant() {
        let config = Config::default();
        assert!(init(&config).unwrap().is_none());
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn file_logging_returns_guard() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("vantage.log")),
            ..Config::default()
        };
        let guard = init(&config).unwrap();
        assert!(guard.is_some());
    }
}
