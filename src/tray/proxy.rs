//! StatusNotifierWatcher interface.

use zbus::proxy;

/// Tray host registry.
///
/// Panels that draw tray icons watch this service for newly registered items.
#[proxy(
    default_service = "org.kde.StatusNotifierWatcher",
    interface = "org.kde.StatusNotifierWatcher",
    default_path = "/StatusNotifierWatcher"
)]
pub trait StatusNotifierWatcher {
    /// Announces a new item to the tray host.
    ///
    /// # Arguments
    /// * `service` - Bus name or object path the item is served at
    fn register_status_notifier_item(&self, service: &str) -> zbus::Result<()>;

    /// Whether any tray host is currently running.
    #[zbus(property)]
    fn is_status_notifier_host_registered(&self) -> zbus::Result<bool>;
}
