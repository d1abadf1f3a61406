use std::io;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialise tracing with a non-blocking file appender and stderr output
///
/// Stdout is left to the application's own output. The returned guard must be
/// kept alive for the lifetime of the program or buffered log lines are lost.
/// Fails without installing a subscriber if the log directory cannot be created.
pub fn init(app_name: &str, log_dir: &str, default_level: Level) -> io::Result<WorkerGuard> {
    // Create log directory if it doesn't exist
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Respects RUST_LOG env var, falls back to default_level
    let env_filter = EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    // File layer (no ANSI colors)
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(false)
        .compact();

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(true).with_ansi(true).compact();

    tracing_subscriber::registry().with(env_filter).with(file_layer).with(stderr_layer).init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_reports_unusable_log_dir() {
        // A regular file where the directory should go makes create_dir_all fail
        let file = tempfile::NamedTempFile::new().unwrap();
        let log_dir = file.path().join("logs");

        assert!(init("bx_test", log_dir.to_str().unwrap(), Level::INFO).is_err());
        assert!(!log_dir.exists());
    }
}
