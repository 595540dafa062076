//! Everything that must succeed before the window opens.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    Result,
    instance::InstanceGuard,
    settings::{ConfigPaths, Settings},
};

/// Loaded settings plus the held single-instance port.
#[derive(Debug)]
pub struct Startup {
    /// Settings read (or created) at launch.
    pub settings: Settings,
    /// Where the settings live; the panel writes back here.
    pub settings_path: PathBuf,
    /// Keeps other instances out until dropped.
    pub instance: InstanceGuard,
}

impl Startup {
    /// Loads settings from the default location and claims the instance port.
    ///
    /// # Errors
    /// Returns error if the settings directory cannot be determined, the
    /// settings file cannot be read or created, or another instance holds
    /// the port.
    pub fn prepare() -> Result<Self> {
        let path = ConfigPaths::settings_file()?;
        Self::prepare_at(&path)
    }

    /// Same as [`prepare`](Self::prepare) with an explicit settings path.
    ///
    /// # Errors
    /// See [`prepare`](Self::prepare).
    #[instrument(fields(path = %path.display()))]
    pub fn prepare_at(path: &Path) -> Result<Self> {
        let settings = Settings::load_or_create(path)?;
        info!(?settings, "Settings loaded");

        let instance = InstanceGuard::acquire(settings.port)?;

        Ok(Self {
            settings,
            settings_path: path.to_path_buf(),
            instance,
        })
    }
}
