//! What a swiped row looks like at a given instant.

use super::controller::SwipeController;

/// Visual state of a row, derived from its offset and whether a deletion
/// is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePresentation {
    Rest,
    Revealed,
    Deleting,
}

/// Interaction state of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeState {
    Rest,
    Dragging,
    Revealed,
    CommittingDelete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteIcon {
    pub symbol: String,
    pub label: String,
    /// Scale-in transition progress, `0.0..=1.0`.
    pub scale: f32,
}

/// Render description of a swipe-enabled row.
///
/// The delete affordance is a red strip pinned to the trailing edge whose
/// width follows the content offset; the button inside it grows with the
/// drag up to the peek width.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeFrame {
    pub content_offset: f32,
    pub content_enabled: bool,
    pub tap_to_dismiss_armed: bool,
    pub background_width: f32,
    pub button_width: f32,
    pub icon: Option<DeleteIcon>,
    pub presentation: SwipePresentation,
}

impl SwipeFrame {
    pub fn capture(controller: &SwipeController) -> Self {
        let config = controller.config();
        let visual = controller.visual_offset();
        let locked = controller.is_interaction_locked();
        let scale = controller.affordance_scale();
        let icon = (controller.is_action_revealed() || scale > 0.0).then(|| DeleteIcon {
            symbol: config.delete_symbol.clone(),
            label: config.delete_label.clone(),
            scale,
        });
        Self {
            content_offset: visual,
            content_enabled: !locked,
            tap_to_dismiss_armed: locked,
            background_width: (-visual).max(0.0),
            button_width: (-visual).min(-config.peek_width).max(0.0),
            icon,
            presentation: controller.presentation(),
        }
    }

    /// Horizontal span of the delete button inside a row of `row_width`.
    pub fn button_span(&self, row_width: f32) -> Option<(f32, f32)> {
        if self.icon.is_none() || self.button_width <= 0.0 {
            return None;
        }
        Some((row_width - self.button_width, row_width))
    }
}
