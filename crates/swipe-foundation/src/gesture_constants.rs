//! Shared gesture thresholds, in logical pixels.

/// Distance the pointer must travel before a drag is recognized.
///
/// Translation reported once the drag starts is still measured from the
/// press position, so the first delivered sample is already at least this
/// far from zero.
pub const MIN_DRAG_DISTANCE: f32 = 10.0;

/// Movement that turns a press into "not a tap".
///
/// Matches [`MIN_DRAG_DISTANCE`] so there is no band where a gesture is
/// neither a tap nor a drag.
pub const TAP_SLOP: f32 = MIN_DRAG_DISTANCE;
