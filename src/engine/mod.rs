//! The canvas engine.
//!
//! ## Modules
//!
//! - `state` - CanvasEngine struct and its sub-state structs
//! - `lifecycle` - Construction, diagram updates, timers, settings reload, accessors
//! - `events` - Events queued for the owner
//! - `scene` - Renderable scene description
//! - `wire_editing` - Wire deletion and label editing

mod events;
mod lifecycle;
mod scene;
mod state;
mod wire_editing;

pub use events::CanvasEvent;
pub use scene::{Scene, SceneDraft, SceneNode, ScenePin, ScenePlaceholder, SceneWire};
pub use state::{CanvasEngine, CanvasState, PointerState, SettingsState, UiState};
pub use wire_editing::LabelEdit;
