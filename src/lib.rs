//! ringclock - transparent desktop clock overlay.
//!
//! Renders the current time as a five-line "ring" of nearby seconds and
//! minutes in a borderless, click-through window. The text can cycle through
//! rainbow hues, and a settings panel reachable from the tray icon moves the
//! label and changes its font and color.
//!
//! # Quick Start
//!
//! ```rust
//! use ringclock::{clock::format_signed, color::HueState};
//!
//! assert_eq!(format_signed(59, 1, "+"), "00");
//!
//! let hue = HueState::default().advance();
//! assert_eq!(hue.hue, 1.0);
//! ```

/// Clock readings and the ring display.
pub mod clock;

/// Colors and the rainbow hue animation.
pub mod color;

/// Core error types and result aliases.
pub mod core;

/// Single-instance guard on a loopback port.
pub mod instance;

/// Periodic tasks on the GTK main loop.
pub mod scheduler;

/// The settings record, its file and the file watcher.
pub mod settings;

/// Startup sequence run before the window opens.
pub mod startup;

/// Logging setup.
pub mod tracing_config;

/// System tray icon.
pub mod tray;

/// relm4 widgets.
pub mod ui;

/// Re-exported core types for convenience.
pub use core::{Result, RingclockError};
