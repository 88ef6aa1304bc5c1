//! Unit tests for the highlight scheduler.

use circuitboard::clock::{Clock, ManualClock};
use circuitboard::settings::HighlightDefaults;
use circuitboard::{ConnectionKey, HighlightOptions, HighlightScheduler};
use std::time::Duration;

fn scheduler() -> HighlightScheduler {
    HighlightScheduler::new(HighlightDefaults::default())
}

#[test]
fn test_expires_after_duration() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    let handle = s
        .highlight_component("A", &HighlightOptions::new(), clock.now())
        .unwrap();
    assert_eq!(handle.deadline(), clock.now() + Duration::from_millis(3000));

    clock.advance_ms(2999);
    assert_eq!(s.fire_due(clock.now()), 0);
    assert!(s.component("A", clock.now()).is_some());

    clock.advance_ms(1);
    assert_eq!(s.fire_due(clock.now()), 1);
    assert!(s.is_empty());
}

#[test]
fn test_last_call_wins() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    s.highlight_component("A", &HighlightOptions::new().duration_ms(100), clock.now());
    s.highlight_component(
        "A",
        &HighlightOptions::new().color("#ff0000").pulse(false).duration_ms(1000),
        clock.now(),
    );

    // The first timer's deadline passes without removing the new highlight
    clock.advance_ms(500);
    assert_eq!(s.fire_due(clock.now()), 0);
    let h = s.component("A", clock.now()).unwrap();
    assert_eq!(h.color, "#ff0000");
    assert!(!h.pulse);
}

#[test]
fn test_cleared_timer_never_fires() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    let handle = s
        .highlight_component("A", &HighlightOptions::new(), clock.now())
        .unwrap();
    assert_eq!(s.clear_component(Some("A")), 1);

    clock.advance_ms(5000);
    assert!(!s.fire(handle));
    assert_eq!(s.fire_due(clock.now()), 0);
    assert_eq!(s.next_deadline(), None);
}

#[test]
fn test_clear_all_only_touches_one_kind() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    let key = ConnectionKey::new("A", "VCC", "B", "VCC");
    s.highlight_component("A", &HighlightOptions::new(), clock.now());
    s.highlight_component("B", &HighlightOptions::new(), clock.now());
    s.highlight_wire(key.clone(), &HighlightOptions::new(), clock.now());

    assert_eq!(s.clear_component(None), 2);
    assert!(s.wire(&key, clock.now()).is_some());
    assert_eq!(s.clear_wire(None), 1);
    assert!(s.is_empty());
}

#[test]
fn test_next_deadline_is_earliest() {
    let clock = ManualClock::new();
    let start = clock.now();
    let mut s = scheduler();
    s.highlight_component("A", &HighlightOptions::new().duration_ms(800), start);
    s.highlight_wire(
        ConnectionKey::new("A", "VCC", "B", "VCC"),
        &HighlightOptions::new().duration_ms(200),
        start,
    );
    assert_eq!(s.next_deadline(), Some(start + Duration::from_millis(200)));
}

#[test]
fn test_defaults_follow_settings() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    s.set_defaults(HighlightDefaults {
        component_color: "#123456".to_string(),
        wire_color: "#654321".to_string(),
        duration_ms: 0,
        pulse: false,
    });

    assert!(s.highlight_component("A", &HighlightOptions::new(), clock.now()).is_none());
    let h = s.component("A", clock.now()).unwrap();
    assert_eq!(h.color, "#123456");
    assert!(!h.pulse);
}

#[test]
fn test_retain_drops_removed_targets() {
    let clock = ManualClock::new();
    let mut s = scheduler();
    let kept = ConnectionKey::new("A", "VCC", "B", "VCC");
    let dropped = ConnectionKey::new("A", "GND", "C", "GND");
    s.highlight_component("A", &HighlightOptions::new(), clock.now());
    s.highlight_component("C", &HighlightOptions::new(), clock.now());
    s.highlight_wire(kept.clone(), &HighlightOptions::new(), clock.now());
    s.highlight_wire(dropped.clone(), &HighlightOptions::new(), clock.now());

    s.retain(|id| id != "C", |key| !key.touches("C"));

    assert!(s.component("A", clock.now()).is_some());
    assert!(s.component("C", clock.now()).is_none());
    assert!(s.wire(&kept, clock.now()).is_some());
    assert!(s.wire(&dropped, clock.now()).is_none());
}
