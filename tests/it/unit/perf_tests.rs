//! Unit tests for perf module.

use circuitboard::perf::{
    HitTestProfiler, ScopedTimer, is_profiling_enabled, measure, measure_and_log, set_profiling_enabled,
};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it logs nothing
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);

    assert_eq!(measure_and_log("sum", 1000.0, || 1 + 1), 2);
}

#[test]
fn test_hit_test_profiler_average() {
    let mut profiler = HitTestProfiler::new();
    profiler.record(10, 0.1);
    assert_eq!(profiler.average_items(), 10.0);

    profiler.record(20, 0.1);
    assert_eq!(profiler.test_count(), 2);
    assert_eq!(profiler.items_tested, 20);
    assert!((profiler.average_items() - 11.0).abs() < 1e-9);
    assert!(!profiler.is_bottleneck());
}

#[test]
fn test_hit_test_profiler_bottleneck() {
    let mut profiler = HitTestProfiler::new();
    profiler.record(500, 2.0);
    assert!(profiler.is_bottleneck());
    profiler.record(500, 0.5);
    assert!(!profiler.is_bottleneck());
}

#[test]
fn test_profiling_toggle() {
    let initial = is_profiling_enabled();
    set_profiling_enabled(!initial);
    assert_eq!(is_profiling_enabled(), !initial);
    set_profiling_enabled(initial);
    assert_eq!(is_profiling_enabled(), initial);
}
