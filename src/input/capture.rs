//! Pointer capture.
//!
//! While a gesture is active the canvas keeps receiving the pointer even when
//! it leaves the element. The host owns the actual capture mechanism; the
//! engine holds a [`PointerCapture`] that acquires it on press and releases it
//! on up, cancel, leave, or when the capture itself is dropped.

use std::fmt;

/// Identifier of a pointer (mouse, pen, touch contact) as given by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer#{}", self.0)
    }
}

/// Host side of pointer capture.
pub trait CaptureHost {
    fn set_capture(&mut self, pointer: PointerId);
    fn release_capture(&mut self, pointer: PointerId);
}

/// Host without a capture mechanism.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl CaptureHost for NoCapture {
    fn set_capture(&mut self, _pointer: PointerId) {}
    fn release_capture(&mut self, _pointer: PointerId) {}
}

/// Owned pointer capture. At most one pointer is held at a time.
pub struct PointerCapture {
    host: Box<dyn CaptureHost + Send>,
    held: Option<PointerId>,
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}

impl Default for PointerCapture {
    fn default() -> Self {
        Self::new(Box::new(NoCapture))
    }
}

impl PointerCapture {
    pub fn new(host: Box<dyn CaptureHost + Send>) -> Self {
        Self { host, held: None }
    }

    /// Pointer currently captured
    pub fn held(&self) -> Option<PointerId> {
        self.held
    }

    /// Capture `pointer`, releasing any other pointer first.
    pub fn capture(&mut self, pointer: PointerId) {
        if self.held == Some(pointer) {
            return;
        }
        self.release();
        self.host.set_capture(pointer);
        self.held = Some(pointer);
    }

    /// Release the held pointer. Returns it, or `None` if nothing was held.
    pub fn release(&mut self) -> Option<PointerId> {
        let pointer = self.held.take()?;
        self.host.release_capture(pointer);
        Some(pointer)
    }

    /// Swap the host, releasing any capture on the old one.
    pub fn set_host(&mut self, host: Box<dyn CaptureHost + Send>) {
        self.release();
        self.host = host;
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.release();
    }
}
