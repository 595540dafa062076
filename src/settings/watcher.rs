use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use super::{Settings, SettingsError, WatchError};

/// Quiet period after the last file event before the file is reloaded.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the settings file for edits made outside the settings panel.
///
/// The parent directory is watched rather than the file itself so that
/// editors which replace the file on save are still picked up.
pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
    events: mpsc::UnboundedReceiver<()>,
    path: PathBuf,
}

impl SettingsWatcher {
    /// Starts watching `path`. The file's directory must already exist.
    ///
    /// # Errors
    /// Returns error if the path has no parent or the watcher cannot be set up.
    #[instrument(fields(path = %path.display()))]
    pub fn new(path: &Path) -> Result<Self, WatchError> {
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| WatchError::NoParent(path.to_path_buf()))?;
        let file_name: Option<OsString> = path.file_name().map(ToOwned::to_owned);

        let (event_tx, events) = mpsc::unbounded_channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                return;
            }

            let touches_settings = event
                .paths
                .iter()
                .any(|changed| changed.file_name() == file_name.as_deref());

            if touches_settings {
                let _ = event_tx.send(());
            }
        })?;

        watcher.watch(directory, RecursiveMode::NonRecursive)?;
        debug!(directory = %directory.display(), "Watching settings directory");

        Ok(Self {
            _watcher: watcher,
            events,
            path: path.to_path_buf(),
        })
    }

    /// Waits for the next burst of changes and reloads the file.
    ///
    /// Events are debounced: the file is read once no further event has
    /// arrived for [`DEBOUNCE`]. Returns `None` once the watcher has shut down.
    pub async fn changed(&mut self) -> Option<Result<Settings, SettingsError>> {
        self.events.recv().await?;

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    event?;
                }

                () = tokio::time::sleep(DEBOUNCE) => break,
            }
        }

        Some(Settings::load(&self.path))
    }
}
