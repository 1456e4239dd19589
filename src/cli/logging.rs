//! Logging initialization

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Set up debug logging to a persisted temp file and return its path.
///
/// Logs never go to stdout, which is reserved for the JSON trace output.
/// Returns `None` when debug logging is off or the log file could not be
/// created.
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        return None;
    }

    let created = tempfile::Builder::new()
        .prefix("mqflow-")
        .suffix(".log")
        .tempfile()
        .and_then(|f| f.keep().map_err(|e| e.error));
    let (file, path) = match created {
        Ok(kept) => kept,
        Err(e) => {
            eprintln!("Could not create debug log file: {}", e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(path)
}
