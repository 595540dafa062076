use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file or its directory could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The settings file exists but is not a valid settings record
    #[error("failed to parse settings at '{path}': {details}")]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// Parser error details
        details: String,
    },

    /// The settings record could not be serialized
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while setting up the settings file watcher.
#[derive(Error, Debug)]
pub enum WatchError {
    /// The underlying file system watcher failed
    #[error("file watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// The settings path has no parent directory to watch
    #[error("settings path '{0}' has no parent directory")]
    NoParent(PathBuf),
}
