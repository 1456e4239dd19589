//! Config and data directory resolution
//!
//! Directories follow the platform project-directory conventions (XDG base
//! directories on Linux/macOS, Known Folders on Windows), with `MQFLOW_*`
//! environment variables as explicit overrides.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "mqflow")
}

/// Configuration directory, honoring `MQFLOW_CONFIG_DIR`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MQFLOW_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mqflow").join("config"))
}

/// Data directory, honoring `MQFLOW_DATA_DIR`.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MQFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mqflow").join("data"))
}

/// The root configuration file path.
pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// The topology snapshot path used when neither config nor CLI provide one.
pub fn default_snapshot_path() -> PathBuf {
    data_dir().join("topology.yaml")
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
