use std::path::PathBuf;

use relm4::{
    gtk::{self, gdk, prelude::*},
    prelude::*,
};
use tracing::{debug, error, info};

use super::{ScreenSize, markup::clock_markup};
use crate::{color::Rgba, settings::Settings};

const PREVIEW_TEXT: &str = "12:34:56";

/// Dialog for changing font, color, position and the rainbow effect.
///
/// Every change rewrites the settings file and is reported to the overlay.
/// Closing the window only hides it.
pub struct SettingsPanel {
    settings: Settings,
    path: PathBuf,
}

/// Everything the panel needs at construction.
#[derive(Debug)]
pub struct SettingsPanelInit {
    /// Settings to start from.
    pub settings: Settings,
    /// File the panel writes to.
    pub path: PathBuf,
    /// Upper bounds for the position sliders.
    pub screen: ScreenSize,
}

/// Input messages, mostly one per control.
#[derive(Debug)]
pub enum SettingsPanelMsg {
    /// New Pango font description from the font chooser.
    Font(String),
    /// New text color from the color chooser.
    Color(Rgba),
    /// Horizontal slider moved.
    MoveX(i32),
    /// Vertical slider moved.
    MoveY(i32),
    /// Rainbow check box toggled.
    Rainbow(bool),
    /// Settings changed elsewhere; refresh the controls without saving.
    Replace(Settings),
    /// Quit button pressed.
    Quit,
}

/// Messages sent to the overlay.
#[derive(Debug)]
pub enum SettingsPanelOutput {
    /// The settings were changed and saved.
    Changed(Settings),
    /// The user asked to quit.
    Quit,
}

/// Controls kept for refreshing after external changes.
pub struct SettingsPanelWidgets {
    font_button: gtk::FontButton,
    color_button: gtk::ColorButton,
    preview: gtk::Label,
    x_scale: gtk::Scale,
    y_scale: gtk::Scale,
    rainbow: gtk::CheckButton,
}

impl SimpleComponent for SettingsPanel {
    type Input = SettingsPanelMsg;
    type Output = SettingsPanelOutput;
    type Init = SettingsPanelInit;
    type Root = gtk::Window;
    type Widgets = SettingsPanelWidgets;

    fn init_root() -> Self::Root {
        gtk::Window::builder()
            .title("ringclock settings")
            .default_width(360)
            .resizable(false)
            .hide_on_close(true)
            .build()
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let SettingsPanelInit {
            settings,
            path,
            screen,
        } = init;

        let font_button = gtk::FontButton::with_font(&settings.font);
        font_button.set_hexpand(true);
        let color_button = gtk::ColorButton::with_rgba(&to_gdk(settings.text_color()));
        color_button.set_use_alpha(false);

        let chooser_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        chooser_row.append(&font_button);
        chooser_row.append(&color_button);

        let preview = gtk::Label::new(None);
        preview.set_margin_top(8);
        preview.set_margin_bottom(8);

        let x_scale = position_scale(screen.width, settings.location.x());
        let y_scale = position_scale(screen.height, settings.location.y());

        let rainbow = gtk::CheckButton::with_label("Rainbow");
        rainbow.set_active(settings.is_rainbow);

        let quit = gtk::Button::with_label("Quit ringclock");

        let content = gtk::Box::new(gtk::Orientation::Vertical, 6);
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        content.set_margin_start(12);
        content.set_margin_end(12);
        content.append(&chooser_row);
        content.append(&preview);
        content.append(&gtk::Label::new(Some("X")));
        content.append(&x_scale);
        content.append(&gtk::Label::new(Some("Y")));
        content.append(&y_scale);
        content.append(&rainbow);
        content.append(&quit);
        root.set_child(Some(&content));

        let s = sender.clone();
        font_button.connect_font_set(move |button| {
            if let Some(font) = button.font() {
                s.input(SettingsPanelMsg::Font(font.to_string()));
            }
        });

        let s = sender.clone();
        color_button.connect_color_set(move |button| {
            s.input(SettingsPanelMsg::Color(from_gdk(&button.rgba())));
        });

        let s = sender.clone();
        x_scale.connect_value_changed(move |scale| {
            s.input(SettingsPanelMsg::MoveX(scale.value().round() as i32));
        });

        let s = sender.clone();
        y_scale.connect_value_changed(move |scale| {
            s.input(SettingsPanelMsg::MoveY(scale.value().round() as i32));
        });

        let s = sender.clone();
        rainbow.connect_toggled(move |check| {
            s.input(SettingsPanelMsg::Rainbow(check.is_active()));
        });

        let s = sender;
        quit.connect_clicked(move |_| {
            s.input(SettingsPanelMsg::Quit);
        });

        let model = SettingsPanel { settings, path };
        let widgets = SettingsPanelWidgets {
            font_button,
            color_button,
            preview,
            x_scale,
            y_scale,
            rainbow,
        };
        model.refresh(&widgets);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, sender: ComponentSender<Self>) {
        let Some(next) = self.apply(message, &sender) else {
            return;
        };

        self.settings = next;
        if let Err(e) = self.settings.save(&self.path) {
            error!(error = %e, "Failed to save settings");
        }

        notify_overlay(
            sender.output_sender(),
            SettingsPanelOutput::Changed(self.settings.clone()),
        );
    }

    fn update_view(&self, widgets: &mut Self::Widgets, _sender: ComponentSender<Self>) {
        self.refresh(widgets);
    }
}

impl SettingsPanel {
    /// Computes the settings after `message`, or `None` when nothing is to be saved.
    fn apply(
        &mut self,
        message: SettingsPanelMsg,
        sender: &ComponentSender<Self>,
    ) -> Option<Settings> {
        let mut next = self.settings.clone();

        match message {
            SettingsPanelMsg::Font(font) => next.font = font,
            SettingsPanelMsg::Color(color) => next.color = color.to_hex(),
            SettingsPanelMsg::MoveX(x) => next.location.0 = x,
            SettingsPanelMsg::MoveY(y) => next.location.1 = y,
            SettingsPanelMsg::Rainbow(enabled) => next.is_rainbow = enabled,
            SettingsPanelMsg::Replace(settings) => {
                self.settings = settings;
                return None;
            }
            SettingsPanelMsg::Quit => {
                info!("Quit requested from settings panel");
                notify_overlay(sender.output_sender(), SettingsPanelOutput::Quit);
                return None;
            }
        }

        (next != self.settings).then_some(next)
    }

    fn refresh(&self, widgets: &SettingsPanelWidgets) {
        let settings = &self.settings;
        let color = settings.text_color();

        widgets.font_button.set_font(&settings.font);
        widgets.color_button.set_rgba(&to_gdk(color));
        widgets.x_scale.set_value(f64::from(settings.location.x()));
        widgets.y_scale.set_value(f64::from(settings.location.y()));
        widgets.rainbow.set_active(settings.is_rainbow);
        widgets
            .preview
            .set_markup(&clock_markup(PREVIEW_TEXT, &settings.font, color));
    }
}

/// Sends `output` to the overlay. Returns `false` once the overlay is gone.
fn notify_overlay(
    sender: &relm4::Sender<SettingsPanelOutput>,
    output: SettingsPanelOutput,
) -> bool {
    match sender.send(output) {
        Ok(()) => true,
        Err(output) => {
            debug!(?output, "Overlay no longer listening, dropping panel output");
            false
        }
    }
}

fn position_scale(max: i32, value: i32) -> gtk::Scale {
    let scale = gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, f64::from(max), 1.0);
    scale.set_digits(0);
    scale.set_draw_value(true);
    scale.set_hexpand(true);
    scale.set_value(f64::from(value));
    scale
}

fn to_gdk(color: Rgba) -> gdk::RGBA {
    gdk::RGBA::new(
        f32::from(color.red) / 255.0,
        f32::from(color.green) / 255.0,
        f32::from(color.blue) / 255.0,
        f32::from(color.alpha) / 255.0,
    )
}

fn from_gdk(color: &gdk::RGBA) -> Rgba {
    Rgba::from_unit(
        f64::from(color.red()),
        f64::from(color.green()),
        f64::from(color.blue()),
        f64::from(color.alpha()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_reaches_listening_overlay() {
        let (sender, receiver) = relm4::channel::<SettingsPanelOutput>();

        assert!(notify_overlay(&sender, SettingsPanelOutput::Quit));
        assert!(matches!(
            receiver.recv_sync(),
            Some(SettingsPanelOutput::Quit)
        ));
    }

    #[test]
    fn output_to_closed_overlay_is_dropped() {
        let (sender, receiver) = relm4::channel::<SettingsPanelOutput>();
        drop(receiver);

        assert!(!notify_overlay(
            &sender,
            SettingsPanelOutput::Changed(Settings::default())
        ));
    }

    #[test]
    fn gdk_color_conversion_keeps_bytes() {
        let color = Rgba::new(18, 52, 86, 255);

        assert_eq!(from_gdk(&to_gdk(color)), color);
    }
}
