//! Transient gesture state for reordering and swipe-to-delete.
//!
//! Both machines only track indices and coordinates; the component applies
//! the resulting moves and deletions to the [`Gallery`](super::Gallery).

use crate::config::swipe::{DELETE_THRESHOLD_PX, MAX_TRAVEL_PX};

// ============================================================================
// DragState
// ============================================================================

/// Pointer drag reordering (wide layout).
///
/// The list is reordered live on every drag-over rather than on drop, so the
/// tracked source follows the dragged entry to its new position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: usize },
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        *self = Self::Dragging { source: index };
    }

    /// Handle a drag-over of the entry at `target`.
    ///
    /// Returns the `(from, to)` move to apply, or `None` when idle or
    /// hovering the dragged entry itself.
    pub fn over(&mut self, target: usize) -> Option<(usize, usize)> {
        match *self {
            Self::Dragging { source } if source != target => {
                *self = Self::Dragging { source: target };
                Some((source, target))
            }
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn source(&self) -> Option<usize> {
        match self {
            Self::Dragging { source } => Some(*source),
            Self::Idle => None,
        }
    }

    /// Whether a drop on the list may carry new files.
    ///
    /// A drop that ends an in-page reorder is never an import, even when the
    /// browser attaches the dragged image to `dataTransfer.files`.
    pub fn accepts_file_drop(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

// ============================================================================
// SwipeState
// ============================================================================

/// Horizontal touch swipe on a thumbnail (compact layout).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeState {
    #[default]
    Idle,
    Swiping {
        index: usize,
        start_x: f64,
        /// Latest x reported by a move event; `None` until the finger moves.
        current_x: Option<f64>,
    },
}

impl SwipeState {
    pub fn start(&mut self, index: usize, x: f64) {
        *self = Self::Swiping {
            index,
            start_x: x,
            current_x: None,
        };
    }

    /// Record the latest touch position. Ignored when idle.
    pub fn track(&mut self, x: f64) {
        if let Self::Swiping { current_x, .. } = self {
            *current_x = Some(x);
        }
    }

    /// Index of the entry being swiped.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Swiping { index, .. } => Some(*index),
            Self::Idle => None,
        }
    }

    /// Leftward travel so far (negative when moving right).
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Swiping {
                start_x,
                current_x: Some(x),
                ..
            } => Some(start_x - x),
            _ => None,
        }
    }

    /// Horizontal translation to render, in `[-MAX_TRAVEL_PX, 0]`.
    pub fn offset(&self) -> f64 {
        self.distance()
            .map(|d| (-d).clamp(-MAX_TRAVEL_PX, 0.0))
            .unwrap_or(0.0)
    }

    /// Opacity to render, fading out with travel.
    pub fn opacity(&self) -> f64 {
        1.0 - self.offset().abs() / MAX_TRAVEL_PX
    }

    /// End the gesture, returning the index to delete if the swipe went far
    /// enough left. Always resets to idle.
    pub fn finish(&mut self) -> Option<usize> {
        let target = match (self.index(), self.distance()) {
            (Some(index), Some(d)) if d > DELETE_THRESHOLD_PX => Some(index),
            _ => None,
        };
        *self = Self::Idle;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_idle_ignores_over() {
        let mut drag = DragState::default();
        assert_eq!(drag.over(2), None);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_drag_same_index_is_noop() {
        let mut drag = DragState::default();
        drag.start(1);
        assert_eq!(drag.over(1), None);
        assert_eq!(drag.source(), Some(1));
    }

    #[test]
    fn test_drag_follows_entry() {
        let mut drag = DragState::default();
        drag.start(0);
        assert_eq!(drag.over(1), Some((0, 1)));
        assert_eq!(drag.over(2), Some((1, 2)));
        assert_eq!(drag.over(2), None);
        assert_eq!(drag.source(), Some(2));
        drag.end();
        assert_eq!(drag.source(), None);
    }

    #[test]
    fn test_file_drop_ignored_during_reorder() {
        let mut drag = DragState::default();
        assert!(drag.accepts_file_drop());
        drag.start(0);
        drag.over(1);
        assert!(!drag.accepts_file_drop());
        drag.end();
        assert!(drag.accepts_file_drop());
    }

    #[test]
    fn test_swipe_past_threshold_deletes() {
        let mut swipe = SwipeState::default();
        swipe.start(1, 300.0);
        swipe.track(220.0);
        assert_eq!(swipe.finish(), Some(1));
        assert_eq!(swipe, SwipeState::Idle);
    }

    #[test]
    fn test_swipe_at_threshold_keeps_entry() {
        let mut swipe = SwipeState::default();
        swipe.start(0, 100.0);
        swipe.track(50.0);
        assert_eq!(swipe.finish(), None);
        assert_eq!(swipe, SwipeState::Idle);
    }

    #[test]
    fn test_swipe_right_never_deletes() {
        let mut swipe = SwipeState::default();
        swipe.start(0, 100.0);
        swipe.track(400.0);
        assert_eq!(swipe.offset(), 0.0);
        assert_eq!(swipe.opacity(), 1.0);
        assert_eq!(swipe.finish(), None);
    }

    #[test]
    fn test_tap_without_move_resets() {
        let mut swipe = SwipeState::default();
        swipe.start(2, 100.0);
        assert_eq!(swipe.offset(), 0.0);
        assert_eq!(swipe.finish(), None);
        assert_eq!(swipe.index(), None);
    }

    #[test]
    fn test_swipe_offset_and_opacity() {
        let mut swipe = SwipeState::default();
        swipe.start(0, 300.0);
        swipe.track(200.0);
        assert_eq!(swipe.offset(), -100.0);
        assert_eq!(swipe.opacity(), 0.5);

        swipe.track(0.0);
        assert_eq!(swipe.offset(), -MAX_TRAVEL_PX);
        assert_eq!(swipe.opacity(), 0.0);
    }

    #[test]
    fn test_track_while_idle_is_ignored() {
        let mut swipe = SwipeState::default();
        swipe.track(10.0);
        assert_eq!(swipe, SwipeState::Idle);
        assert_eq!(swipe.distance(), None);
    }
}
