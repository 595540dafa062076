//! GTK widgets built with relm4: the clock overlay and its settings panel.

mod markup;
mod overlay;
mod settings_panel;

pub use markup::clock_markup;
pub use overlay::{ClockOverlay, OverlayCommand, OverlayInit, OverlayMsg};
pub use settings_panel::{SettingsPanel, SettingsPanelInit, SettingsPanelMsg, SettingsPanelOutput};

use relm4::gtk::{gdk, prelude::*};

/// Application id registered with GTK.
pub const APP_ID: &str = "io.github.ringclock";

/// Pixel size of a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in logical pixels.
    pub width: i32,
    /// Height in logical pixels.
    pub height: i32,
}

impl ScreenSize {
    /// Used when no display or monitor can be queried.
    pub const FALLBACK: ScreenSize = ScreenSize {
        width: 800,
        height: 600,
    };

    /// Size of the first monitor of the default display.
    pub fn primary() -> Self {
        gdk::Display::default()
            .and_then(|display| display.monitors().item(0))
            .and_then(|object| object.downcast::<gdk::Monitor>().ok())
            .map(|monitor| {
                let geometry = monitor.geometry();
                ScreenSize {
                    width: geometry.width(),
                    height: geometry.height(),
                }
            })
            .unwrap_or(Self::FALLBACK)
    }
}
