//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE: &str = "restsec.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/restsec/logs/`.
/// Log level is controlled by the `RESTSEC_LOG` environment variable.
///
/// # Examples
/// ```bash
/// RESTSEC_LOG=debug restsec play rate-limit --mode attack
/// RESTSEC_LOG=restsec_app=trace restsec play authn --scenario token-expired
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env("RESTSEC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("restsec=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("restsec starting, logging to {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("restsec").join("logs")
}

/// Path of the log file the daily appender writes to
pub fn current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_restsec_logs() {
        let path = current_log_file();
        assert!(path.ends_with("restsec/logs/restsec.log"));
    }
}
