//! Headless editing engine for node-and-wire circuit diagrams.
//!
//! The engine owns the view transform, component positions, wire geometry
//! and pointer interaction of one diagram canvas. Hosts feed it diagrams and
//! input events, paint the [`Scene`] it builds, and apply the
//! [`CanvasEvent`]s it queues.
//!
//! ```ignore
//! let mut engine = CanvasEngine::new();
//! engine.set_viewport_bounds(Point::ZERO, Size::new(800.0, 600.0));
//! engine.set_diagram(Some(diagram));
//!
//! engine.handle_pointer_down(&PointerEvent::at(240.0, 90.0));
//! engine.handle_pointer_up(&PointerEvent::at(400.0, 290.0));
//! for event in engine.drain_events() {
//!     // store DiagramChanged snapshots, add dropped components, ...
//! }
//! let scene = engine.scene();
//! ```

pub mod clock;
pub mod constants;
pub mod control;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod input;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
pub mod viewport;
pub mod wiring;

pub use clock::{Clock, ManualClock, SystemClock};
pub use control::{CanvasControl, SharedCanvas};
pub use engine::{CanvasEngine, CanvasEvent, LabelEdit, Scene, SceneNode, ScenePlaceholder, SceneWire};
pub use error::{CanvasError, CanvasResult};
pub use highlight::{HighlightOptions, HighlightScheduler, TimerHandle};
pub use input::{HitTarget, InputState, NavKey, PointerEvent, PointerId};
pub use settings::CanvasSettings;
pub use types::{Component, Connection, ConnectionKey, Diagram, Point, Rect, Size};
pub use viewport::{ViewState, Viewport};
