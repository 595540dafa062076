//! ringclock - transparent desktop clock overlay
//!
//! Loads settings, claims the single-instance port and runs the GTK
//! application. A second launch exits with status 1.

use std::{error::Error, process};

use relm4::RelmApp;
use ringclock::{
    RingclockError,
    scheduler::TickPeriods,
    startup::Startup,
    tracing_config,
    ui::{APP_ID, ClockOverlay, OverlayInit},
};
use tracing::{Level, error, info, span};

fn main() -> Result<(), Box<dyn Error>> {
    let log_guard = tracing_config::init_with_file()?;
    let _span = span!(Level::INFO, "ringclock_main").entered();
    info!("Starting ringclock");

    let startup = match Startup::prepare() {
        Ok(startup) => startup,
        Err(RingclockError::Instance(e)) => {
            error!(error = %e, "Another instance is already running, exiting");
            eprintln!("{e}");
            drop(log_guard);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let Startup {
        settings,
        settings_path,
        instance,
    } = startup;

    RelmApp::new(APP_ID)
        .with_args(Vec::new())
        .run::<ClockOverlay>(OverlayInit {
            settings,
            settings_path,
            periods: TickPeriods::default(),
        });

    drop(instance);
    info!("ringclock stopped");
    Ok(())
}
