//! Engine lifecycle - construction, diagram updates, timers and settings reload.

use super::state::{CanvasEngine, CanvasState, PointerState, SettingsState, UiState};
use crate::clock::{Clock, SystemClock};
use crate::highlight::{HighlightScheduler, TimerHandle};
use crate::input::{CaptureHost, InputState, PointerCapture};
use crate::layout::{place_unpositioned, prune_orphans};
use crate::perf::HitTestProfiler;
use crate::settings::CanvasSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::types::{ConnectionKey, Diagram, Point, Rect, Size};
use crate::viewport::Viewport;
use anyhow::Result;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEngine {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Engine whose highlight timers run on `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let settings = CanvasSettings::default();
        Self {
            canvas: CanvasState::default(),
            viewport: Viewport::new(),
            pointer: PointerState::default(),
            ui: UiState::default(),
            highlights: HighlightScheduler::new(settings.highlight.clone()),
            settings: SettingsState {
                data: settings,
                watcher: None,
            },
            clock,
            events: VecDeque::new(),
            hit_profiler: HitTestProfiler::new(),
        }
    }

    pub fn with_settings(mut self, settings: CanvasSettings) -> Self {
        self.apply_settings(settings);
        self
    }

    /// Install the host's pointer capture mechanism.
    pub fn set_capture_host(&mut self, host: Box<dyn CaptureHost + Send>) {
        self.pointer.capture.set_host(host);
    }

    // ========================================================================
    // Diagram
    // ========================================================================

    /// Take a new diagram snapshot from the owner.
    ///
    /// Positions of removed components are dropped and new components are
    /// auto-placed; existing positions are kept. `None` clears everything.
    pub fn set_diagram(&mut self, diagram: Option<Diagram>) {
        let Some(diagram) = diagram else {
            self.clear_diagram();
            return;
        };

        let pruned = prune_orphans(&diagram.components, &mut self.canvas.positions);
        let placed = place_unpositioned(&diagram.components, &mut self.canvas.positions);
        tracing::info!(
            components = diagram.components.len(),
            connections = diagram.connections.len(),
            placed,
            pruned,
            "Diagram loaded"
        );

        let live: HashSet<&str> = diagram.components.iter().map(|c| c.id.as_str()).collect();
        let wires: HashSet<ConnectionKey> = diagram.connections.iter().map(|c| c.key()).collect();

        if self.canvas.selected.as_deref().is_some_and(|id| !live.contains(id)) {
            self.canvas.selected = None;
        }
        if self.ui.hovered.as_deref().is_some_and(|id| !live.contains(id)) {
            self.ui.hovered = None;
        }

        let gesture_target = match &self.pointer.input {
            InputState::DraggingNode { component_id, .. } => Some(component_id.as_str()),
            InputState::DrawingWire(draft) => Some(draft.start_component.as_str()),
            _ => None,
        };
        if gesture_target.is_some_and(|id| !live.contains(id)) {
            tracing::debug!("Gesture target removed from diagram, ending gesture");
            self.abort_gesture();
        }

        self.highlights
            .retain(|id| live.contains(id), |key| wires.contains(key));

        self.canvas.diagram = Some(diagram);
        self.sync_label_edit();
        self.rebuild_index();
    }

    fn clear_diagram(&mut self) {
        tracing::info!("Diagram cleared");
        self.abort_gesture();
        self.canvas = CanvasState::default();
        self.ui.hovered = None;
        self.ui.label_edit = None;
        self.highlights.clear_component(None);
        self.highlights.clear_wire(None);
    }

    /// Rebuild the R-tree from the current positions.
    pub(crate) fn rebuild_index(&mut self) {
        let Some(diagram) = &self.canvas.diagram else {
            self.canvas.index.clear();
            return;
        };
        let positions = &self.canvas.positions;
        let entries = diagram
            .components
            .iter()
            .filter_map(|c| positions.get(&c.id).map(|p| (c.id.clone(), Rect::component_at(*p))));
        self.canvas.index.rebuild(entries);
    }

    /// Move one component and keep the R-tree in sync.
    pub(crate) fn move_component(&mut self, component_id: &str, position: Point) {
        self.canvas.positions.insert(component_id.to_string(), position);
        self.canvas.index.insert(component_id, Rect::component_at(position));
    }

    // ========================================================================
    // Timers
    // ========================================================================

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Expire every highlight whose deadline has passed. Hosts call this
    /// from their event loop, ideally at [`CanvasEngine::next_timer_deadline`].
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        self.highlights.fire_due(now)
    }

    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.highlights.next_deadline()
    }

    /// Fire a single highlight timer. Stale handles are ignored.
    pub fn fire_timer(&mut self, handle: TimerHandle) -> bool {
        self.highlights.fire(handle)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings.data
    }

    /// Replace the active settings. Invalid settings are rejected and the
    /// current ones kept.
    pub fn apply_settings(&mut self, settings: CanvasSettings) -> bool {
        if let Err(e) = settings.validate() {
            tracing::warn!("Ignoring invalid settings: {}", e);
            return false;
        }
        self.highlights.set_defaults(settings.highlight.clone());
        self.settings.data = settings;
        true
    }

    /// Watch a settings file for changes; see [`CanvasEngine::check_settings_reload`].
    pub fn watch_settings(&mut self, path: PathBuf) -> Result<()> {
        self.settings.watcher = Some(SettingsWatcher::new(path)?);
        Ok(())
    }

    /// Check for settings file changes and reload if needed.
    /// Returns true if new settings were applied.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(watcher) = self.settings.watcher.as_mut() else {
            return false;
        };
        let Some(event) = watcher.poll() else {
            return false;
        };

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                let path = watcher.path().to_path_buf();
                match CanvasSettings::load_from(&path) {
                    Ok(settings) => self.apply_settings(settings),
                    Err(e) => {
                        tracing::warn!("Failed to reload settings from {}: {}", path.display(), e);
                        false
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted, keeping current settings");
                false
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
                false
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn diagram(&self) -> Option<&Diagram> {
        self.canvas.diagram.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Record the canvas element's on-screen rectangle.
    pub fn set_viewport_bounds(&mut self, origin: Point, size: Size) {
        self.viewport.set_bounds(origin, size);
    }

    pub fn input_state(&self) -> &InputState {
        &self.pointer.input
    }

    pub fn pointer_capture(&self) -> &PointerCapture {
        &self.pointer.capture
    }

    /// Last pointer position in diagram space.
    pub fn cursor(&self) -> Point {
        self.pointer.cursor
    }

    pub fn selected(&self) -> Option<&str> {
        self.canvas.selected.as_deref()
    }

    /// Select a component (or clear with `None`). Unknown ids clear the selection.
    pub fn select(&mut self, component_id: Option<&str>) {
        self.canvas.selected = component_id
            .filter(|id| self.canvas.positions.contains_key(*id))
            .map(str::to_string);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.ui.hovered.as_deref()
    }

    pub fn set_hovered(&mut self, component_id: Option<&str>) {
        self.ui.hovered = component_id.map(str::to_string);
    }

    pub fn is_drag_over(&self) -> bool {
        self.ui.drag_over
    }

    pub fn search_query(&self) -> &str {
        &self.ui.search_query
    }

    /// Filter the scene to components whose name contains `query`
    /// (case-insensitive). Empty shows everything.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.ui.search_query = query.into();
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.ui.type_filter.as_deref()
    }

    /// Only show components of `component_type`; `None` shows all types.
    pub fn set_type_filter(&mut self, component_type: Option<&str>) {
        self.ui.type_filter = component_type.map(str::to_string);
    }

    pub fn highlights(&self) -> &HighlightScheduler {
        &self.highlights
    }

    pub fn hit_profiler(&self) -> &HitTestProfiler {
        &self.hit_profiler
    }
}
