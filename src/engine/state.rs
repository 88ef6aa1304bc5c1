//! Engine state - the CanvasEngine struct definition and sub-structs.

use super::events::CanvasEvent;
use super::wire_editing::LabelEdit;
use crate::clock::Clock;
use crate::highlight::HighlightScheduler;
use crate::input::{InputState, PointerCapture};
use crate::perf::HitTestProfiler;
use crate::settings::CanvasSettings;
use crate::settings_watcher::SettingsWatcher;
use crate::spatial_index::SpatialIndex;
use crate::types::{Diagram, Point};
use crate::viewport::Viewport;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Diagram snapshot and everything keyed by component id
#[derive(Default)]
pub struct CanvasState {
    /// Latest snapshot; `None` until the owner supplies one
    pub diagram: Option<Diagram>,
    /// Diagram-space top-left corner of each component
    pub positions: HashMap<String, Point>,
    /// R-tree over component boxes, kept in sync with `positions`
    pub index: SpatialIndex,
    /// Selected component (keyboard nudge target)
    pub selected: Option<String>,
}

/// Pointer gesture state
#[derive(Default)]
pub struct PointerState {
    pub input: InputState,
    pub capture: PointerCapture,
    /// Last pointer position in diagram space
    pub cursor: Point,
}

/// Transient UI flags that feed the scene
#[derive(Default)]
pub struct UiState {
    pub hovered: Option<String>,
    /// An inventory item is being dragged over the canvas
    pub drag_over: bool,
    pub search_query: String,
    /// Only show components of this type
    pub type_filter: Option<String>,
    pub label_edit: Option<LabelEdit>,
}

/// Active settings and their hot-reload source
#[derive(Default)]
pub struct SettingsState {
    pub data: CanvasSettings,
    pub watcher: Option<SettingsWatcher>,
}

/// Headless editing engine for one circuit diagram canvas.
///
/// Inputs arrive through the pointer / keyboard / drop handlers, the
/// [`crate::control::CanvasControl`] surface and [`CanvasEngine::set_diagram`].
/// Outputs are queued [`CanvasEvent`]s and the [`crate::engine::Scene`]
/// returned by [`CanvasEngine::scene`].
pub struct CanvasEngine {
    pub(crate) canvas: CanvasState,
    pub(crate) viewport: Viewport,
    pub(crate) pointer: PointerState,
    pub(crate) ui: UiState,
    pub(crate) highlights: HighlightScheduler,
    pub(crate) settings: SettingsState,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) events: VecDeque<CanvasEvent>,
    pub(crate) hit_profiler: HitTestProfiler,
}
