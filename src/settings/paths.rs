use std::{
    env,
    ffi::OsString,
    fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "ringclock";

/// Locations of the settings file and the log directory.
///
/// Settings follow XDG (`$XDG_CONFIG_HOME/ringclock`, else
/// `$HOME/.config/ringclock`); logs live in `$HOME/.ringclock/logs`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Directory holding `settings.json`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn config_dir() -> Result<PathBuf, Error> {
        resolve_config_dir(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
    }

    /// Path of the settings file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined.
    pub fn settings_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("settings.json"))
    }

    /// Log directory, created if missing.
    ///
    /// # Errors
    /// Returns an error if `HOME` is not set or the directory cannot be created.
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = resolve_log_dir(env::var_os("HOME"))?;
        fs::create_dir_all(&log_dir)?;
        Ok(log_dir)
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn resolve_config_dir(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, Error> {
    non_empty(xdg_config_home)
        .or_else(|| non_empty(home).map(|home| home.join(".config")))
        .map(|base| base.join(APP_DIR))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                "Neither XDG_CONFIG_HOME nor HOME environment variable found",
            )
        })
}

fn resolve_log_dir(home: Option<OsString>) -> Result<PathBuf, Error> {
    non_empty(home)
        .map(|home| home.join(format!(".{APP_DIR}")).join("logs"))
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))
}
