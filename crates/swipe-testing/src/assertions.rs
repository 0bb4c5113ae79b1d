//! Assertion helpers for swipe tests.

use swipe_ui::{SwipeFrame, SwipePresentation};

/// Assert that a value is within `tolerance` of `expected`.
///
/// Animated offsets are sampled on frame boundaries, so intermediate
/// values are best compared loosely.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that `value` lies strictly between two bounds, in either order.
pub fn assert_strictly_between(value: f32, a: f32, b: f32, msg: &str) {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    assert!(
        value > low && value < high,
        "{}: expected a value strictly between {} and {}, got {}",
        msg,
        low,
        high,
        value
    );
}

/// Assert that a frame shows a row at rest: no offset, no affordance,
/// content interactive.
pub fn assert_frame_at_rest(frame: &SwipeFrame) {
    assert_eq!(frame.presentation, SwipePresentation::Rest, "presentation");
    assert_eq!(frame.content_offset, 0.0, "content offset");
    assert_eq!(frame.background_width, 0.0, "background width");
    assert!(frame.content_enabled, "content should be enabled at rest");
    assert!(!frame.tap_to_dismiss_armed, "tap-to-dismiss armed at rest");
    assert!(frame.icon.is_none(), "icon visible at rest: {:?}", frame.icon);
}
