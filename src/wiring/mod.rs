//! Wire geometry: where wires attach, how they are routed and coloured.
//!
//! - `anchor` - pin anchor positions, per-wire side choice, pin hit testing
//! - `route` - curve / staircase routing between two anchors
//! - `color` - pin-name colour overrides from settings

pub mod anchor;
pub mod color;
pub mod route;

pub use anchor::{PinSide, WireEndpoints, fallback_anchor, pin_anchor, pin_at, wire_endpoints, wire_sides};
pub use color::resolve_wire_color;
pub use route::{WirePath, route};
