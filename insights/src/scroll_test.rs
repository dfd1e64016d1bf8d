use super::*;
use crate::event::ParamValue;

// Document 3000px tall, viewport 1000px: 2000px scrollable.
fn at(top: f64) -> ScrollSample {
    ScrollSample::new(top, 1000.0, 3000.0)
}

fn percents(events: &[Event]) -> Vec<f64> {
    events
        .iter()
        .filter(|e| e.name == "scroll_depth")
        .filter_map(|e| e.param("percent").and_then(ParamValue::as_f64))
        .collect()
}

// =============================================================
// depth_percent
// =============================================================

#[test]
fn depth_percent_floors_partial_progress() {
    assert_eq!(at(0.0).depth_percent(), 0);
    assert_eq!(at(499.0).depth_percent(), 24);
    assert_eq!(at(500.0).depth_percent(), 25);
    assert_eq!(at(1998.0).depth_percent(), 99);
}

#[test]
fn depth_percent_snaps_within_a_pixel_of_bottom() {
    assert_eq!(at(1999.2).depth_percent(), 100);
    assert_eq!(at(2000.0).depth_percent(), 100);
}

#[test]
fn depth_percent_clamps_overscroll_and_negative() {
    assert_eq!(at(2600.0).depth_percent(), 100);
    assert_eq!(at(-40.0).depth_percent(), 0);
    assert_eq!(at(f64::NAN).depth_percent(), 0);
}

#[test]
fn short_page_never_reports_depth() {
    let sample = ScrollSample::new(0.0, 1000.0, 800.0);
    assert!(!sample.is_scrollable());
    assert_eq!(sample.scrollable_height(), 1.0);
    assert_eq!(sample.depth_percent(), 0);
}

// =============================================================
// milestones
// =============================================================

#[test]
fn each_milestone_fires_once() {
    let mut tracker = ScrollDepthTracker::new();
    let mut all = Vec::new();
    for top in [0.0, 600.0, 600.0, 1100.0, 400.0, 1100.0, 1600.0, 1700.0] {
        all.extend(tracker.observe(at(top), 0.0));
    }
    assert_eq!(percents(&all), vec![25.0, 50.0, 75.0]);
    assert!(!tracker.reached_bottom());
}

#[test]
fn jump_to_bottom_emits_all_milestones_in_order() {
    let mut tracker = ScrollDepthTracker::new();
    let events = tracker.observe(at(2000.0), 10.0);
    assert_eq!(percents(&events), vec![25.0, 50.0, 75.0, 100.0]);
    assert!(tracker.reached_bottom());
    for mark in MILESTONES {
        assert!(tracker.has_reached(mark));
    }
}

#[test]
fn high_frequency_sampling_is_duplicate_free() {
    let mut tracker = ScrollDepthTracker::new();
    let mut all = Vec::new();
    for step in 0..=4000 {
        all.extend(tracker.observe(at(f64::from(step) * 0.5), f64::from(step)));
    }
    assert_eq!(percents(&all), vec![25.0, 50.0, 75.0, 100.0]);
}

// =============================================================
// return to top
// =============================================================

#[test]
fn return_to_top_requires_bottom_first() {
    let mut tracker = ScrollDepthTracker::new();
    tracker.observe(at(1600.0), 0.0);
    let events = tracker.observe(at(0.0), 1000.0);
    assert!(events.is_empty());
    assert!(!tracker.returned_to_top());
}

#[test]
fn return_to_top_reports_seconds_since_bottom() {
    let mut tracker = ScrollDepthTracker::new();
    tracker.observe(at(2000.0), 1_000.0);
    assert!(tracker.observe(at(900.0), 2_000.0).is_empty());
    let events = tracker.observe(at(149.0), 4_456.7);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "return_to_top_after_bottom");
    assert_eq!(events[0].param("seconds_since_bottom").and_then(ParamValue::as_f64), Some(3.46));
}

#[test]
fn return_to_top_fires_once() {
    let mut tracker = ScrollDepthTracker::new();
    tracker.observe(at(2000.0), 0.0);
    assert_eq!(tracker.observe(at(0.0), 500.0).len(), 1);
    tracker.observe(at(2000.0), 900.0);
    assert!(tracker.observe(at(0.0), 1500.0).is_empty());
    assert!(tracker.returned_to_top());
}

#[test]
fn near_top_threshold_is_exclusive() {
    let mut tracker = ScrollDepthTracker::new();
    tracker.observe(at(2000.0), 0.0);
    assert!(tracker.observe(at(150.0), 100.0).is_empty());
    assert_eq!(tracker.observe(at(149.9), 200.0).len(), 1);
}

#[test]
fn short_page_bottom_is_not_a_return_to_top() {
    // 120px scrollable: near-top threshold drops to 60px.
    let short = |top| ScrollSample::new(top, 1000.0, 1120.0);
    let mut tracker = ScrollDepthTracker::new();
    assert_eq!(percents(&tracker.observe(short(120.0), 0.0)), vec![25.0, 50.0, 75.0, 100.0]);
    assert!(tracker.observe(short(120.0), 500.0).is_empty());
    assert!(tracker.observe(short(70.0), 800.0).is_empty());
    let events = tracker.observe(short(59.0), 1_250.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].param("seconds_since_bottom").and_then(ParamValue::as_f64), Some(1.25));
}
