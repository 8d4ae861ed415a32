//! Logging setup, mirroring `AppStartup::configure_logging` in
//! `ox-bin/src/main.rs`: a rolling file appender rather than stderr, since
//! stderr is reserved for the picker's TTY frames and the direct-mode `cd`
//! hint. `RUST_LOG` controls verbosity the same way.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

fn log_dir() -> PathBuf {
    std::env::var_os("TMPDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Truncates any previous run's log, installs a non-blocking file writer,
/// and returns the guard the caller must hold for the process lifetime.
/// Returns `None` if a global subscriber is already installed (e.g. a
/// second call within the same process, as in a test harness).
pub fn init() -> Result<Option<WorkerGuard>> {
    let dir = log_dir();
    let log_path = dir.join("try.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(&dir, "try.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        Err(_) => Ok(None),
    }
}
