//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_FILTER: &str = "frontend=info,warn";
pub const LOG_FILE_NAME: &str = "frontend.log";

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives (e.g. "frontend=debug,info")
    pub filter: String,
    /// Directory for the daily rolling log; `None` logs to stderr
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Read `RUST_LOG` and `JOURNAL_LOG_DIR`. Empty values count as unset.
    pub fn from_env() -> Self {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let log_dir = std::env::var("JOURNAL_LOG_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self { filter, log_dir }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.filter.contains("debug") || self.filter.contains("trace")
    }
}
