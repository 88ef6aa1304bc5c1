//! Performance instrumentation.
//!
//! Pointer-down hit testing and scene building are the hot paths of the
//! engine. They are wrapped in [`profile_scope!`] so slow calls show up in the
//! logs when the `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! circuitboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn build_scene() {
//!     profile_scope!("build_scene");
//!     // ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Threshold used by [`ScopedTimer::for_profiling`]
pub const PROFILING_THRESHOLD_MS: f64 = 1.0;

/// Threshold for operations that run once per input event
pub const INPUT_THRESHOLD_MS: f64 = 4.0;

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros
// ============================================================================

/// Profile a scope with the given name. Compiles to nothing without the
/// `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling output at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs the duration of a scope on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the low profiling threshold (1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        {
            if is_profiling_enabled() {
                trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Run `f` and return its result with the elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// Run `f` and warn if it took longer than `threshold_ms`.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Tracks how many candidates each pointer-down hit test had to inspect.
#[derive(Debug, Clone, Default)]
pub struct HitTestProfiler {
    /// Candidates inspected by the last hit test
    pub items_tested: usize,
    pub last_test_ms: f64,
    avg_items: f64,
    test_count: u64,
}

impl HitTestProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, items_tested: usize, elapsed_ms: f64) {
        self.items_tested = items_tested;
        self.last_test_ms = elapsed_ms;
        self.test_count += 1;

        if self.test_count == 1 {
            self.avg_items = items_tested as f64;
        } else {
            // Exponential moving average
            let alpha = 0.1;
            self.avg_items = self.avg_items * (1.0 - alpha) + items_tested as f64 * alpha;
        }
    }

    pub fn test_count(&self) -> u64 {
        self.test_count
    }

    pub fn average_items(&self) -> f64 {
        self.avg_items
    }

    /// More than 100 candidates on average and over a millisecond per test.
    pub fn is_bottleneck(&self) -> bool {
        self.avg_items > 100.0 && self.last_test_ms > 1.0
    }
}
