//! System tray icon over the StatusNotifierItem D-Bus protocol.
//!
//! The item is served on the session bus and announced to the
//! `org.kde.StatusNotifierWatcher`. Clicks are forwarded to a handler
//! supplied by the caller; the tray never touches UI state directly.

mod item;
mod proxy;

use std::process;

use thiserror::Error;
use tracing::{info, instrument, warn};
use zbus::{Connection, connection};

pub use item::StatusNotifierItem;
pub use proxy::StatusNotifierWatcherProxy;

/// Object path the item is served at.
pub const ITEM_PATH: &str = "/StatusNotifierItem";

/// Freedesktop icon name shown in the tray.
pub const ICON_NAME: &str = "preferences-system-time";

/// Tooltip title.
pub const TOOLTIP: &str = "ringclock is running";

/// Tooltip description listing the click bindings.
pub const TOOLTIP_HINT: &str = "Click for settings, middle-click to quit";

/// What the user asked for through the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// Show the settings panel.
    OpenSettings,
    /// Quit the application.
    Quit,
}

/// Callback receiving tray clicks. Runs on the D-Bus executor thread.
pub type TrayHandler = Box<dyn Fn(TrayEvent) + Send + Sync>;

/// Errors from publishing the tray item.
#[derive(Error, Debug)]
pub enum TrayError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),
}

/// Well-known bus name for this process's item.
pub fn bus_name() -> String {
    format!("org.kde.StatusNotifierItem-{}-1", process::id())
}

/// Serves the tray item and registers it with the tray host.
///
/// The item stays published for as long as the returned connection is alive.
///
/// # Errors
/// Returns error if the session bus is unreachable, the bus name cannot be
/// claimed, or no StatusNotifierWatcher accepts the registration.
#[instrument(skip(handler))]
pub async fn publish(handler: TrayHandler) -> Result<Connection, TrayError> {
    let name = bus_name();

    let connection = connection::Builder::session()?
        .name(name.as_str())?
        .serve_at(ITEM_PATH, StatusNotifierItem::new(handler))?
        .build()
        .await?;

    let watcher = StatusNotifierWatcherProxy::new(&connection).await?;
    watcher.register_status_notifier_item(&name).await?;

    match watcher.is_status_notifier_host_registered().await {
        Ok(true) => info!(bus_name = %name, "Tray item registered"),
        Ok(false) => warn!(bus_name = %name, "Tray item registered but no tray host is running"),
        Err(e) => warn!(error = %e, "Could not query tray host state"),
    }

    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_name_is_unique_per_process() {
        let name = bus_name();

        assert!(name.starts_with("org.kde.StatusNotifierItem-"));
        assert!(name.ends_with(&format!("-{}-1", process::id())));
    }
}
