//! Click-versus-drag classification for pointer gestures.

use crate::config::GesturePolicy;
use crate::model::PointerPosition;

/// How a finished gesture should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureRelease {
    Click,
    DragEnd,
    /// Neither moved far enough to drag nor released quickly enough to click.
    Ignored,
}

/// A pointer-down to pointer-up interaction on a draggable surface.
///
/// Once the pointer travels past the drag threshold the gesture stays a drag, even if the pointer
/// returns to where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    policy: GesturePolicy,
    start: PointerPosition,
    started_at_ms: f64,
    dragged: bool,
}

impl PointerGesture {
    pub fn begin(policy: GesturePolicy, start: PointerPosition, now_ms: f64) -> Self {
        Self {
            policy,
            start,
            started_at_ms: now_ms,
            dragged: false,
        }
    }

    fn delta(&self, pointer: PointerPosition) -> (f64, f64) {
        (
            f64::from(pointer.x - self.start.x),
            f64::from(pointer.y - self.start.y),
        )
    }

    /// Feeds a pointer move and returns whether the gesture is a drag.
    pub fn track(&mut self, pointer: PointerPosition) -> bool {
        if !self.dragged {
            let (dx, dy) = self.delta(pointer);
            self.dragged = self.policy.exceeds_drag_threshold(dx, dy);
        }
        self.dragged
    }

    pub fn release(self, pointer: PointerPosition, now_ms: f64) -> GestureRelease {
        if self.dragged {
            return GestureRelease::DragEnd;
        }
        let (dx, dy) = self.delta(pointer);
        let threshold = self.policy.drag_threshold_px;
        let elapsed_ms = now_ms - self.started_at_ms;
        if dx.abs() < threshold && dy.abs() < threshold && elapsed_ms < self.policy.click_max_ms as f64
        {
            GestureRelease::Click
        } else {
            GestureRelease::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DEFAULT_SHELL_CONFIG;

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn gesture() -> PointerGesture {
        PointerGesture::begin(DEFAULT_SHELL_CONFIG.gesture, at(20, 20), 1_000.0)
    }

    #[test]
    fn quick_still_release_is_a_click() {
        let mut gesture = gesture();
        assert!(!gesture.track(at(22, 19)));
        assert_eq!(gesture.release(at(22, 19), 1_120.0), GestureRelease::Click);
    }

    #[test]
    fn slow_release_is_not_a_click() {
        let gesture = gesture();
        assert_eq!(gesture.release(at(20, 20), 1_300.0), GestureRelease::Ignored);
    }

    #[test]
    fn movement_past_threshold_becomes_drag() {
        let mut gesture = gesture();
        assert!(gesture.track(at(26, 20)));
        assert_eq!(gesture.release(at(26, 20), 1_050.0), GestureRelease::DragEnd);
    }

    #[test]
    fn drag_classification_is_sticky() {
        let mut gesture = gesture();
        gesture.track(at(20, 40));
        assert!(gesture.track(at(20, 20)));
        assert_eq!(gesture.release(at(20, 20), 1_010.0), GestureRelease::DragEnd);
    }

    #[test]
    fn release_at_exact_threshold_is_neither() {
        let mut gesture = gesture();
        assert!(!gesture.track(at(25, 20)));
        assert_eq!(gesture.release(at(25, 20), 1_010.0), GestureRelease::Ignored);
    }
}
