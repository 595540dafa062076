use std::{future, path::PathBuf};

use futures::FutureExt;
use relm4::{
    gtk::{self, cairo, prelude::*},
    prelude::*,
};
use tracing::{debug, info, instrument, warn};

use super::{
    ScreenSize,
    markup::clock_markup,
    settings_panel::{SettingsPanel, SettingsPanelInit, SettingsPanelMsg, SettingsPanelOutput},
};
use crate::{
    clock::ClockReading,
    color::{HueState, Rgba},
    scheduler::{Scheduler, TaskChange, TickPeriods},
    settings::{Settings, SettingsWatcher},
    tray::{self, TrayEvent, TrayHandler},
};

const OVERLAY_CSS_CLASS: &str = "ringclock-overlay";
const OVERLAY_CSS: &str = "window.ringclock-overlay { background: transparent; box-shadow: none; }";

/// The transparent, click-through clock window.
///
/// Owns the animation state, both timers and the settings panel; nothing
/// here is process-global.
///
/// GTK 4 has no skip-taskbar or utility-window hint, so whether the overlay
/// shows up in a task list is up to the window manager.
pub struct ClockOverlay {
    settings: Settings,
    text_color: Rgba,
    hue: HueState,
    reading: ClockReading,
    scheduler: Scheduler,
    panel: Controller<SettingsPanel>,
}

/// Everything the overlay needs at construction.
#[derive(Debug)]
pub struct OverlayInit {
    /// Settings loaded at startup.
    pub settings: Settings,
    /// Settings file, watched for external edits and written by the panel.
    pub settings_path: PathBuf,
    /// Timer periods.
    pub periods: TickPeriods,
}

/// Input messages.
#[derive(Debug)]
pub enum OverlayMsg {
    /// Refresh the clock reading.
    TimeTick,
    /// Advance the rainbow hue.
    ColorTick,
    /// Apply settings changed in the panel.
    Apply(Settings),
    /// Show the settings panel.
    ShowSettings,
    /// Quit the application.
    Quit,
}

/// Results of background work.
#[derive(Debug)]
pub enum OverlayCommand {
    /// The settings file was edited outside the panel.
    Reloaded(Settings),
    /// The tray icon is published.
    TrayReady,
    /// The tray icon could not be published.
    TrayFailed(String),
    /// The settings file cannot be watched.
    WatchFailed(String),
}

/// Widgets updated on every tick.
pub struct OverlayWidgets {
    label: gtk::Label,
}

impl Component for ClockOverlay {
    type CommandOutput = OverlayCommand;
    type Input = OverlayMsg;
    type Output = ();
    type Init = OverlayInit;
    type Root = gtk::Window;
    type Widgets = OverlayWidgets;

    fn init_root() -> Self::Root {
        let window = gtk::Window::builder()
            .title("ringclock")
            .decorated(false)
            .resizable(false)
            .focusable(false)
            .build();
        window.add_css_class(OVERLAY_CSS_CLASS);
        window
    }

    #[instrument(skip_all)]
    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let OverlayInit {
            settings,
            settings_path,
            periods,
        } = init;

        relm4::set_global_css(OVERLAY_CSS);

        let screen = ScreenSize::primary();
        info!(width = screen.width, height = screen.height, "Sizing overlay to primary monitor");
        root.set_default_size(screen.width, screen.height);
        root.connect_realize(make_click_through);

        let label = gtk::Label::builder()
            .halign(gtk::Align::Start)
            .valign(gtk::Align::Start)
            .justify(gtk::Justification::Right)
            .build();
        root.set_child(Some(&label));

        let panel = SettingsPanel::builder()
            .launch(SettingsPanelInit {
                settings: settings.clone(),
                path: settings_path.clone(),
                screen,
            })
            .forward(sender.input_sender(), |output| match output {
                SettingsPanelOutput::Changed(settings) => OverlayMsg::Apply(settings),
                SettingsPanelOutput::Quit => OverlayMsg::Quit,
            });

        let mut model = ClockOverlay {
            text_color: settings.text_color(),
            settings,
            hue: HueState::default(),
            reading: ClockReading::now(),
            scheduler: Scheduler::new(periods),
            panel,
        };

        let input = sender.input_sender().clone();
        model
            .scheduler
            .time
            .start(move || input.emit(OverlayMsg::TimeTick));
        model.sync_color_task(&sender);

        spawn_settings_watcher(&sender, settings_path);
        spawn_tray(&sender);

        let widgets = OverlayWidgets { label };
        model.render(&widgets.label);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match message {
            OverlayMsg::TimeTick => self.reading = ClockReading::now(),
            OverlayMsg::ColorTick => self.hue = self.hue.advance(),
            OverlayMsg::Apply(settings) => self.apply(settings, &sender),
            OverlayMsg::ShowSettings => self.panel.widget().present(),
            OverlayMsg::Quit => {
                info!("Quitting");
                self.scheduler.stop_all();
                relm4::main_application().quit();
            }
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            OverlayCommand::Reloaded(settings) => {
                if settings == self.settings {
                    return;
                }

                info!("Settings file changed on disk");
                self.panel.emit(SettingsPanelMsg::Replace(settings.clone()));
                self.apply(settings, &sender);
            }
            OverlayCommand::TrayReady => debug!("Tray icon published"),
            OverlayCommand::TrayFailed(e) => {
                warn!(error = %e, "Tray icon unavailable; edit settings.json to change settings");
            }
            OverlayCommand::WatchFailed(e) => {
                warn!(error = %e, "Settings file is not watched; external edits need a restart");
            }
        }
    }

    fn update_view(&self, widgets: &mut Self::Widgets, _sender: ComponentSender<Self>) {
        self.render(&widgets.label);
    }
}

impl ClockOverlay {
    fn apply(&mut self, settings: Settings, sender: &ComponentSender<Self>) {
        if settings.port != self.settings.port {
            info!(port = settings.port, "Instance port changed, takes effect on next launch");
        }

        self.text_color = settings.text_color();
        self.settings = settings;
        self.sync_color_task(sender);
    }

    /// Runs the color timer exactly while the rainbow effect is on.
    fn sync_color_task(&mut self, sender: &ComponentSender<Self>) {
        let running = self.scheduler.color.is_running();

        match TaskChange::between(running, self.settings.is_rainbow) {
            TaskChange::Start => {
                let input = sender.input_sender().clone();
                self.scheduler
                    .color
                    .start(move || input.emit(OverlayMsg::ColorTick));
            }
            TaskChange::Stop => self.scheduler.color.stop(),
            TaskChange::Keep => {}
        }
    }

    fn current_color(&self) -> Rgba {
        if self.settings.is_rainbow {
            self.hue.to_color()
        } else {
            self.text_color
        }
    }

    fn render(&self, label: &gtk::Label) {
        let text = self.reading.ring_text();
        label.set_markup(&clock_markup(&text, &self.settings.font, self.current_color()));
        label.set_margin_start(self.settings.location.x().max(0));
        label.set_margin_top(self.settings.location.y().max(0));
    }
}

/// Lets every pointer event fall through to whatever is below the overlay.
fn make_click_through(window: &gtk::Window) {
    match window.surface() {
        Some(surface) => surface.set_input_region(Some(&cairo::Region::create())),
        None => warn!("Overlay has no surface; it will not be click-through"),
    }
}

fn spawn_settings_watcher(sender: &ComponentSender<ClockOverlay>, path: PathBuf) {
    sender.command(move |out, shutdown| {
        shutdown
            .register(async move {
                let mut watcher = match SettingsWatcher::new(&path) {
                    Ok(watcher) => watcher,
                    Err(e) => {
                        out.emit(OverlayCommand::WatchFailed(e.to_string()));
                        return;
                    }
                };

                while let Some(result) = watcher.changed().await {
                    match result {
                        Ok(settings) => out.emit(OverlayCommand::Reloaded(settings)),
                        Err(e) => warn!(error = %e, "Ignoring invalid settings edit"),
                    }
                }
            })
            .drop_on_shutdown()
            .boxed()
    });
}

fn spawn_tray(sender: &ComponentSender<ClockOverlay>) {
    let input = sender.input_sender().clone();

    sender.command(move |out, shutdown| {
        shutdown
            .register(async move {
                let handler: TrayHandler = Box::new(move |event| {
                    input.emit(match event {
                        TrayEvent::OpenSettings => OverlayMsg::ShowSettings,
                        TrayEvent::Quit => OverlayMsg::Quit,
                    });
                });

                match tray::publish(handler).await {
                    Ok(_connection) => {
                        out.emit(OverlayCommand::TrayReady);
                        future::pending::<()>().await;
                    }
                    Err(e) => out.emit(OverlayCommand::TrayFailed(e.to_string())),
                }
            })
            .drop_on_shutdown()
            .boxed()
    });
}
