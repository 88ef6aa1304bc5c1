//! Engine settings.
//!
//! Settings are stored as JSON in the platform config directory and can be
//! hot-reloaded through [`crate::settings_watcher::SettingsWatcher`]. Every
//! field has a default so partial files are accepted.

use crate::constants::{
    CLICK_SLOP, DEFAULT_COMPONENT_HIGHLIGHT, DEFAULT_HIGHLIGHT_MS, DEFAULT_WIRE_HIGHLIGHT,
    GRID_SIZE, KEYBOARD_PAN_STEP, NUDGE_STEP, NUDGE_STEP_LARGE, PIN_HIT_RADIUS,
    VIRTUALIZATION_THRESHOLD, ZOOM_STEP,
};
use crate::error::{CanvasError, CanvasResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory created under the platform config dir
pub const CONFIG_DIR_NAME: &str = "circuitboard";

/// File name of the settings file
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default settings file location, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Default highlight appearance used when a caller omits options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightDefaults {
    pub component_color: String,
    pub wire_color: String,
    pub duration_ms: u64,
    pub pulse: bool,
}

impl Default for HighlightDefaults {
    fn default() -> Self {
        Self {
            component_color: DEFAULT_COMPONENT_HIGHLIGHT.to_string(),
            wire_color: DEFAULT_WIRE_HIGHLIGHT.to_string(),
            duration_ms: DEFAULT_HIGHLIGHT_MS,
            pulse: true,
        }
    }
}

/// Tunables for the canvas engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Snap dragged and dropped components to the grid
    pub snap_to_grid: bool,
    /// Grid cell size in diagram units
    pub grid_size: f32,
    /// Zoom change per wheel notch
    pub zoom_step: f32,
    /// Pan distance per arrow key (screen px)
    pub pan_step: f32,
    /// Component nudge per arrow key (diagram units)
    pub nudge_step: f32,
    /// Component nudge per arrow key with shift held
    pub nudge_step_large: f32,
    /// Pointer travel below which a press/release counts as a click
    pub click_slop: f32,
    /// Pin hit radius in diagram units
    pub pin_hit_radius: f32,
    /// Component count above which off-screen components are culled
    pub virtualization_threshold: usize,
    /// Wire colour overrides keyed by pin name ("VCC", "GND", "SDA", ...)
    pub wire_colors: HashMap<String, String>,
    pub highlight: HighlightDefaults,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            grid_size: GRID_SIZE,
            zoom_step: ZOOM_STEP,
            pan_step: KEYBOARD_PAN_STEP,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
            click_slop: CLICK_SLOP,
            pin_hit_radius: PIN_HIT_RADIUS,
            virtualization_threshold: VIRTUALIZATION_THRESHOLD,
            wire_colors: HashMap::new(),
            highlight: HighlightDefaults::default(),
        }
    }
}

impl CanvasSettings {
    /// Read and validate settings from `path`.
    pub fn load_from(path: &Path) -> CanvasResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: CanvasSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> CanvasResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> CanvasResult<()> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if !(self.click_slop.is_finite() && self.click_slop >= 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "click_slop must not be negative, got {}",
                self.click_slop
            )));
        }
        if !(self.pin_hit_radius.is_finite() && self.pin_hit_radius > 0.0) {
            return Err(CanvasError::InvalidSettings(format!(
                "pin_hit_radius must be positive, got {}",
                self.pin_hit_radius
            )));
        }
        Ok(())
    }
}
