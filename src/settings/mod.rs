//! The flat settings record and its JSON file.
//!
//! A single `settings.json` holds everything the overlay needs: font, color,
//! position, rainbow toggle and the single-instance port. The file is created
//! with defaults on first run and rewritten wholesale on every change.

mod error;
mod loading;
mod paths;
mod watcher;

#[cfg(test)]
mod tests;

pub use error::{SettingsError, WatchError};
pub use paths::ConfigPaths;
pub use watcher::SettingsWatcher;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgba;

/// Default Pango font description for the clock label.
pub const DEFAULT_FONT: &str = "Ubuntu Mono Medium 24";

/// Default label color.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Default loopback port used by the single-instance guard.
pub const DEFAULT_PORT: u16 = 20323;

/// Persisted overlay settings.
///
/// Keys missing from the file take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Pango font description of the clock text, e.g. "Ubuntu Mono Medium 24".
    pub font: String,

    /// Text color as `#RRGGBB`, used while the rainbow effect is off.
    pub color: String,

    /// Offset of the clock label from the top-left corner of the screen, `[x, y]`.
    pub location: Location,

    /// Whether the text cycles through rainbow hues.
    pub is_rainbow: bool,

    /// Loopback TCP port that marks a running instance.
    pub port: u16,
}

/// Label position in screen pixels, stored as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Location(pub i32, pub i32);

impl Location {
    /// Horizontal offset.
    pub fn x(&self) -> i32 {
        self.0
    }

    /// Vertical offset.
    pub fn y(&self) -> i32 {
        self.1
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            color: DEFAULT_COLOR.to_string(),
            location: Location::default(),
            is_rainbow: false,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Parsed text color. An unparsable value falls back to opaque white.
    pub fn text_color(&self) -> Rgba {
        Rgba::from_hex(&self.color).unwrap_or_else(|| {
            warn!(color = %self.color, "invalid settings color, using white");
            Rgba::WHITE
        })
    }
}
