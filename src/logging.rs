use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Name of the log file written inside the configured log directory.
pub const LOG_FILE_NAME: &str = "mazecraft.log";

/// Sends tracing output to a log file, since the terminal is busy drawing the maze.
///
/// The returned guard flushes pending lines when dropped and must be kept alive for the
/// lifetime of the program.
pub fn init(log_dir: &Path, level: Level) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let installed = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        // Another subscriber was set first, e.g. by a test harness
        tracing::debug!("[logging] global subscriber already installed");
    }
    Ok(guard)
}
