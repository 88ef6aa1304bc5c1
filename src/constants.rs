//! Engine-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Component Geometry
// ============================================================================

/// Width of a component box in diagram units
pub const COMPONENT_WIDTH: f32 = 140.0;

/// Height of a component box in diagram units
pub const COMPONENT_HEIGHT: f32 = 100.0;

/// Vertical offset of the first pin from the top of the component
pub const PIN_OFFSET_Y: f32 = 40.0;

/// Vertical spacing between consecutive pins
pub const PIN_SPACING: f32 = 15.0;

/// Distance below the component box used for unknown-pin anchors
pub const FALLBACK_ANCHOR_OFFSET: f32 = 10.0;

/// Radius around a pin anchor that counts as a hit (diagram units)
pub const PIN_HIT_RADIUS: f32 = 6.0;

// ============================================================================
// Auto Layout
// ============================================================================

/// Lane x position for power components
pub const LANE_POWER_X: f32 = 100.0;

/// Lane x position for controller components
pub const LANE_CONTROLLER_X: f32 = 400.0;

/// Lane x position for everything else
pub const LANE_PERIPHERAL_X: f32 = 700.0;

/// First y slot probed by the placer
pub const LAYOUT_START_Y: f32 = 50.0;

/// Vertical step between y slots
pub const LAYOUT_STEP_Y: f32 = 200.0;

/// Two boxes closer than this on both axes collide
pub const LAYOUT_COLLISION_DISTANCE: f32 = 50.0;

/// Probe attempts before an overlap is accepted
pub const LAYOUT_MAX_PROBES: usize = 100;

/// Padding around the diagram bounding box
pub const BOUNDS_PADDING: f32 = 50.0;

/// Bounds reported for a diagram without components
pub const DEFAULT_BOUNDS_SIZE: (f32, f32) = (500.0, 300.0);

// ============================================================================
// Wire Routing
// ============================================================================

/// Reversed wires narrower than this are routed as a staircase
pub const STAIRCASE_THRESHOLD: f32 = 100.0;

/// Horizontal stub length of a staircase route
pub const STAIRCASE_STUB: f32 = 20.0;

/// Control point distance as a fraction of the horizontal span
pub const CURVE_TENSION: f32 = 0.5;

/// Description given to wires drawn by hand
pub const DEFAULT_WIRE_DESCRIPTION: &str = "New Wire";

/// Colour given to wires drawn by hand
pub const DEFAULT_WIRE_COLOR: &str = "#00f3ff";

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level (applies to every zoom path)
pub const MIN_ZOOM: f32 = 0.2;

/// Maximum zoom level (applies to every zoom path)
pub const MAX_ZOOM: f32 = 4.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for one scroll wheel notch
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom step for the `+` / `-` keys
pub const KEYBOARD_ZOOM_STEP: f32 = 0.2;

/// Pan distance for one arrow key press
pub const KEYBOARD_PAN_STEP: f32 = 20.0;

/// Component nudge for one arrow key press
pub const NUDGE_STEP: f32 = 1.0;

/// Component nudge for one arrow key press with shift held
pub const NUDGE_STEP_LARGE: f32 = 10.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Pointer travel (screen px) below which a press/release is a click
pub const CLICK_SLOP: f32 = 3.0;

/// Grid size used for snapping
pub const GRID_SIZE: f32 = 10.0;

// ============================================================================
// Highlights
// ============================================================================

/// Default component highlight colour
pub const DEFAULT_COMPONENT_HIGHLIGHT: &str = "#00f3ff";

/// Default wire highlight colour
pub const DEFAULT_WIRE_HIGHLIGHT: &str = "#ff00ff";

/// Default highlight lifetime in milliseconds
pub const DEFAULT_HIGHLIGHT_MS: u64 = 3000;

// ============================================================================
// Viewport Culling
// ============================================================================

/// Component count above which off-screen components are culled
pub const VIRTUALIZATION_THRESHOLD: usize = 100;

/// Margin in diagram units around the viewport for culling
pub const CULLING_MARGIN: f32 = 240.0;
