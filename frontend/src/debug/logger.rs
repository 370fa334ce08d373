//! Logging initialization

use std::fs;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_FILTER, LOG_FILE_NAME};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to create log directory: {0}")]
    LogDir(#[from] std::io::Error),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the global subscriber.
///
/// Writes to a daily rolling `frontend.log` in `config.log_dir` when set, and
/// to stderr otherwise. Writes are non-blocking; keep the returned guard alive
/// for as long as logs should be flushed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, LoggerError> {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter '{}': {}", config.filter, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let to_file = config.log_dir.is_some();
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(to_file)
        .with_file(to_file)
        .with_line_number(to_file)
        .with_ansi(!to_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    install_panic_hook();

    tracing::info!(
        filter = %config.filter,
        log_file = ?config.log_file(),
        "Logging initialized"
    );

    Ok(guard)
}

/// Route panics through `tracing` before the default hook runs.
fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");
        default_panic(panic_info);
    }));
}
