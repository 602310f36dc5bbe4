use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use tracing::Level;
use tracing::event;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::*;

pub const LOG_DIR_VARIABLE: &str = "ITINERARY_LOG_DIR";
pub const LEVEL_VARIABLE: &str = "TRACING_LEVEL";
const LOG_FILE_NAME: &str = "itinerary.developer.log";

/// With `ITINERARY_LOG_DIR` set the events go as json into a fresh log file in
/// that directory, otherwise they go to stderr. The returned guard has to be
/// held until the program exits or buffered file events are lost.
pub fn setup_logging() -> Result<Option<WorkerGuard>>
{
    let env_filter = || {
        EnvFilter::try_from_env(LEVEL_VARIABLE).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let Ok(log_dir) = dotenvy::var(LOG_DIR_VARIABLE) else {
        let stderr_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(env_filter());
        tracing_subscriber::registry()
            .with(stderr_layer)
            .try_init()
            .context("a global tracing subscriber was already set")?;
        return Ok(None);
    };

    fs::create_dir_all(&log_dir)
        .with_context(|| format!("could not create the log directory {}", log_dir))?;
    remove_previous_log_files(Path::new(&log_dir))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber was already set")?;

    event!(Level::INFO, log_dir = %log_dir, "starting logging");
    Ok(Some(worker_guard))
}

fn remove_previous_log_files(log_dir: &Path) -> Result<()>
{
    let previous_log_files = fs::read_dir(log_dir)
        .with_context(|| format!("could not read the log directory {}", log_dir.display()))?;

    for log_file in previous_log_files {
        let path = log_file?.path();
        if path.is_file() && path.extension().is_some_and(|extension| extension == "log") {
            fs::remove_file(&path)
                .with_context(|| format!("could not remove {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use super::remove_previous_log_files;

    #[test]
    fn test_only_log_files_are_removed()
    {
        let log_dir = std::env::temp_dir().join(format!("itinerary-logs-{}", std::process::id()));
        fs::create_dir_all(&log_dir).unwrap();
        fs::write(log_dir.join("old.log"), "{}").unwrap();
        fs::write(log_dir.join(".gitkeep"), "").unwrap();

        remove_previous_log_files(&log_dir).unwrap();

        assert!(!log_dir.join("old.log").exists());
        assert!(log_dir.join(".gitkeep").exists());
        fs::remove_dir_all(&log_dir).unwrap();
    }
}
