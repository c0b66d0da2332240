use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::common::error::HeimdallError;
use crate::common::result::{HeimdallResult, ResultExt};

/// Name of the log file created inside the log directory
pub const LOG_FILE_NAME: &str = "heimdall.log";

/// Install the file logger. The returned guard must stay alive until exit,
/// otherwise buffered lines are lost.
pub fn init_logging(log_dir: &Path, verbose: bool) -> HeimdallResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_filesystem_error("Cannot create log directory", Some(log_dir.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(default_filter(verbose))
        .try_init()
        .map_err(|e| HeimdallError::config_error(format!("Cannot install logger: {}", e)))?;

    Ok(guard)
}

/// `RUST_LOG` wins over the verbosity flag
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("heimdall=debug")
        } else {
            EnvFilter::new("heimdall=info")
        }
    })
}
