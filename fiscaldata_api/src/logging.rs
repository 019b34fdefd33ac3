//! Opt-in file logging.
//!
//! The library only emits `tracing` events; nothing here runs implicitly.
//! Applications that want the classic append-only log file call
//! [`init_file_logging`] once at startup.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

/// File name used inside the log directory.
pub const LOG_FILE_NAME: &str = "treasury_api.log";

/// Builds a subscriber that appends plain-text records to
/// `<dir>/treasury_api.log`, creating the directory on first use.
///
/// The returned guard flushes buffered records when dropped; keep it alive
/// for as long as logging should run.
pub fn file_subscriber(
    dir: impl AsRef<Path>,
) -> io::Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard)> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    Ok((subscriber, guard))
}

/// Installs the file subscriber as the process-wide default.
///
/// Fails if a global subscriber is already set. Typical use:
///
/// ```no_run
/// let _guard = fiscaldata_api::logging::init_file_logging("logs")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_file_logging(dir: impl AsRef<Path>) -> io::Result<WorkerGuard> {
    let (subscriber, guard) = file_subscriber(dir)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    Ok(guard)
}
