//! Settings file watcher for hot reload.
//!
//! Wraps a `notify` watcher on the settings file's parent directory and turns
//! raw file system events into [`SettingsEvent`]s that can be polled from the
//! engine's event loop without blocking.

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

pub use crate::settings::default_settings_path;

/// A change to the watched settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops event delivery.
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. The parent directory must exist.
    pub fn new(path: PathBuf) -> Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            // Receiver gone means the watcher is being torn down.
            let _ = tx.send(res);
        })
        .context("Failed to create settings file watcher")?;

        let dir = path
            .parent()
            .with_context(|| format!("Settings path has no parent: {}", path.display()))?;
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;

        tracing::debug!("Watching settings file {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the next event that concerns the settings file, if any.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.map_event(&event) {
                        return Some(mapped);
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".to_string()));
                }
            }
        }
    }

    fn map_event(&self, event: &Event) -> Option<SettingsEvent> {
        if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}
