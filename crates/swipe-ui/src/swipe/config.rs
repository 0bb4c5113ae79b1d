//! Tunable thresholds for the swipe interaction.

use std::time::Duration;
use swipe_animation::AnimationSpec;
use swipe_foundation::gesture_constants::MIN_DRAG_DISTANCE;

/// Resting offset of a row whose delete action is peeking.
pub const DEFAULT_PEEK_WIDTH: f32 = -80.0;
/// Share of the peek distance after which the delete icon shows up.
pub const DEFAULT_REVEAL_FRACTION: f32 = 0.75;
/// Share of the row width past which a release deletes the row.
pub const DEFAULT_DELETE_FRACTION: f32 = 0.75;
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);
pub const DEFAULT_DELETE_SYMBOL: &str = "trash.fill";
pub const DEFAULT_DELETE_LABEL: &str = "Delete";

/// Swipe thresholds and affordance content.
///
/// Built with `SwipeConfig::default()` and the `with_*` methods:
///
/// ```
/// use swipe_ui::SwipeConfig;
///
/// let config = SwipeConfig::default()
///     .with_peek_width(-96.0)
///     .with_delete_label("Remove");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    pub peek_width: f32,
    pub reveal_fraction: f32,
    pub delete_fraction: f32,
    pub animation: AnimationSpec,
    pub min_drag_distance: f32,
    pub delete_symbol: String,
    pub delete_label: String,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            peek_width: DEFAULT_PEEK_WIDTH,
            reveal_fraction: DEFAULT_REVEAL_FRACTION,
            delete_fraction: DEFAULT_DELETE_FRACTION,
            animation: AnimationSpec::tween(DEFAULT_ANIMATION_DURATION, Default::default()),
            min_drag_distance: MIN_DRAG_DISTANCE,
            delete_symbol: DEFAULT_DELETE_SYMBOL.to_string(),
            delete_label: DEFAULT_DELETE_LABEL.to_string(),
        }
    }
}

impl SwipeConfig {
    pub fn with_peek_width(mut self, peek_width: f32) -> Self {
        self.peek_width = peek_width;
        self
    }

    pub fn with_reveal_fraction(mut self, fraction: f32) -> Self {
        self.reveal_fraction = fraction;
        self
    }

    pub fn with_delete_fraction(mut self, fraction: f32) -> Self {
        self.delete_fraction = fraction;
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation.duration = duration;
        self
    }

    pub fn with_min_drag_distance(mut self, distance: f32) -> Self {
        self.min_drag_distance = distance;
        self
    }

    pub fn with_delete_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.delete_symbol = symbol.into();
        self
    }

    pub fn with_delete_label(mut self, label: impl Into<String>) -> Self {
        self.delete_label = label.into();
        self
    }

    /// Release offsets less negative than this snap back to rest.
    pub fn peek_threshold(&self) -> f32 {
        self.peek_width / 2.0
    }

    /// Release offsets more negative than this commit the deletion.
    /// Unbounded while the row width is unknown.
    pub fn delete_threshold(&self, container_width: f32) -> f32 {
        -(container_width * self.delete_fraction)
    }

    /// Offset past which the delete icon is shown.
    pub fn reveal_threshold(&self) -> f32 {
        self.peek_width * self.reveal_fraction
    }

    /// Delay between committing a deletion and notifying the host, and again
    /// between the notification and the fallback reset.
    pub fn completion_delay(&self) -> Duration {
        self.animation.total()
    }

    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        if !self.peek_width.is_finite() || self.peek_width >= 0.0 {
            return Err(SwipeConfigError::NonNegativePeekWidth(self.peek_width));
        }
        for (name, value) in [
            ("reveal_fraction", self.reveal_fraction),
            ("delete_fraction", self.delete_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SwipeConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.animation.duration.is_zero() {
            return Err(SwipeConfigError::ZeroAnimationDuration);
        }
        if !(self.min_drag_distance >= 0.0) {
            return Err(SwipeConfigError::NegativeMinDragDistance(
                self.min_drag_distance,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeConfigError {
    NonNegativePeekWidth(f32),
    FractionOutOfRange { name: &'static str, value: f32 },
    ZeroAnimationDuration,
    NegativeMinDragDistance(f32),
}

impl std::fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeConfigError::NonNegativePeekWidth(width) => {
                write!(f, "peek width must be a finite negative offset, got {width}")
            }
            SwipeConfigError::FractionOutOfRange { name, value } => {
                write!(f, "{name} must be in (0, 1], got {value}")
            }
            SwipeConfigError::ZeroAnimationDuration => {
                write!(f, "animation duration must be non-zero")
            }
            SwipeConfigError::NegativeMinDragDistance(distance) => {
                write!(f, "minimum drag distance must be non-negative, got {distance}")
            }
        }
    }
}

impl std::error::Error for SwipeConfigError {}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
