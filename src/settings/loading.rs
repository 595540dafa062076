use std::{fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, instrument};

use super::{Settings, SettingsError};

impl Settings {
    /// Loads the settings file, creating it with defaults if it does not exist.
    ///
    /// Parent directories are created as needed. Keys missing from an
    /// existing file take their defaults; the file is not rewritten in that
    /// case.
    ///
    /// # Errors
    /// Returns error if the file or its directory cannot be created or read,
    /// or if the existing content is not a valid settings record.
    #[instrument(fields(path = %path.display()))]
    pub fn load_or_create(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            return Self::load(path);
        }

        info!("No settings file found, creating defaults");
        let settings = Self::default();
        settings.save(path)?;
        Ok(settings)
    }

    /// Loads and parses an existing settings file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid settings record.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let settings = Self::from_json(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parses a settings record from JSON text.
    ///
    /// # Errors
    /// Returns error if the text is not a JSON object matching the record.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serializes the record as pretty JSON with a four-space indent.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Rewrites the whole settings file.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created or the file cannot be written.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        let content = self.to_json()?;
        fs::write(path, content).map_err(|e| SettingsError::io(path, e))?;

        debug!("Saved settings");
        Ok(())
    }
}
