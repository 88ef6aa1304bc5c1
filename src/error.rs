//! Error types for the canvas engine.
//!
//! In-memory inconsistencies in a diagram never produce errors (they degrade
//! to skipped wires, fallback anchors or no-ops). Errors only come from the
//! boundaries: drop payloads and settings files.

use thiserror::Error;

/// Errors that can occur at the engine's boundaries
#[derive(Error, Debug)]
pub enum CanvasError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Drop payload could not be read as a component
    #[error("Invalid drop payload: {0}")]
    InvalidDropPayload(String),

    /// Settings values out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
