//! Logging Infrastructure
//!
//! Console output by default, daily rolling files when a log directory is
//! given. Safe to call more than once; later calls are no-ops.

use crate::core::EngineConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logger() -> bool {
    init_logger_with_file(None, None)
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. A `log_dir` that does not
/// exist is ignored and output goes to the console.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "guest-engine");
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .is_ok();
        }
    }

    subscriber.try_init().is_ok()
}

/// Initialize the logger from loaded configuration
pub fn init_from_config(config: &EngineConfig) -> bool {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        // Whichever call wins, the next one must not panic
        init_logger_with_file(Some("debug"), Some(path));
        assert!(!init_logger());
    }
}
