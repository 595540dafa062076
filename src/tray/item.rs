use tracing::debug;
use zbus::{
    interface,
    zvariant::{ObjectPath, OwnedObjectPath},
};

use super::{TrayEvent, TrayHandler};

/// Pixmap list as carried in the `ToolTip` property: width, height, ARGB data.
type IconPixmaps = Vec<(i32, i32, Vec<u8>)>;

/// `ToolTip` property: icon name, pixmaps, title, description.
type ToolTip = (String, IconPixmaps, String, String);

/// Tooltip shown by the tray host. Without a menu, the description is the
/// only place the click bindings are spelled out.
fn tool_tip() -> ToolTip {
    (
        super::ICON_NAME.to_string(),
        Vec::new(),
        super::TOOLTIP.to_string(),
        super::TOOLTIP_HINT.to_string(),
    )
}

/// The ringclock tray icon, served as an `org.kde.StatusNotifierItem`.
///
/// There is no D-Bus menu: a primary or context click opens the settings
/// panel and a middle click quits.
pub struct StatusNotifierItem {
    handler: TrayHandler,
}

impl StatusNotifierItem {
    pub(super) fn new(handler: TrayHandler) -> Self {
        Self { handler }
    }

    fn dispatch(&self, event: TrayEvent) {
        debug!(?event, "Tray event");
        (self.handler)(event);
    }
}

#[interface(name = "org.kde.StatusNotifierItem")]
impl StatusNotifierItem {
    fn activate(&self, _x: i32, _y: i32) {
        self.dispatch(TrayEvent::OpenSettings);
    }

    fn context_menu(&self, _x: i32, _y: i32) {
        self.dispatch(TrayEvent::OpenSettings);
    }

    fn secondary_activate(&self, _x: i32, _y: i32) {
        self.dispatch(TrayEvent::Quit);
    }

    fn scroll(&self, _delta: i32, _orientation: String) {}

    #[zbus(property)]
    fn category(&self) -> String {
        "ApplicationStatus".to_string()
    }

    #[zbus(property)]
    fn id(&self) -> String {
        "ringclock".to_string()
    }

    #[zbus(property)]
    fn title(&self) -> String {
        "ringclock".to_string()
    }

    #[zbus(property)]
    fn status(&self) -> String {
        "Active".to_string()
    }

    #[zbus(property)]
    fn icon_name(&self) -> String {
        super::ICON_NAME.to_string()
    }

    #[zbus(property)]
    fn tool_tip(&self) -> ToolTip {
        tool_tip()
    }

    #[zbus(property)]
    fn item_is_menu(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn menu(&self) -> OwnedObjectPath {
        ObjectPath::from_static_str_unchecked("/NO_DBUSMENU").into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_tip_explains_clicks() {
        let (icon, pixmaps, title, description) = tool_tip();

        assert_eq!(icon, crate::tray::ICON_NAME);
        assert!(pixmaps.is_empty());
        assert_eq!(title, "ringclock is running");
        assert!(description.contains("settings"));
        assert!(description.contains("middle-click to quit"));
    }
}
