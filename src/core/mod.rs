use std::{io, result};

use thiserror::Error;

use crate::{instance::InstanceError, settings::SettingsError};

/// Error types for the ringclock application.
///
/// Wraps the errors that abort startup. Tray and watcher failures are not
/// fatal and are reported to the overlay instead.
#[derive(Error, Debug)]
pub enum RingclockError {
    /// Settings file could not be located, read, parsed or written
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Another instance already holds the single-instance port
    #[error(transparent)]
    Instance(#[from] InstanceError),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for ringclock operations.
pub type Result<T> = result::Result<T, RingclockError>;
