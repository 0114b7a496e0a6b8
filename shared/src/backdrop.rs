//! Telling a backdrop click apart from a drag that happens to end on it.
//!
//! A click event fires on the nearest common ancestor of the press and the
//! release. Pressing inside the dialog content and releasing over the
//! backdrop therefore produces a click whose target is the backdrop, which
//! must not dismiss. Comparing the mouse-down target with the click target
//! filters those out.

/// Remembers what was under the pointer when the button went down
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropTracker<T> {
    mouse_down_target: Option<T>,
}

impl<T> Default for BackdropTracker<T> {
    fn default() -> Self {
        Self {
            mouse_down_target: None,
        }
    }
}

impl<T: PartialEq> BackdropTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the target of a mouse-down, replacing any earlier one
    pub fn mouse_down(&mut self, target: Option<T>) {
        self.mouse_down_target = target;
    }

    /// Consume the recorded mouse-down and report whether this click both
    /// started and ended on the same element.
    ///
    /// A click with no preceding mouse-down (keyboard activation, synthetic
    /// clicks) never counts.
    pub fn click(&mut self, target: Option<&T>) -> bool {
        let pressed = self.mouse_down_target.take();
        matches!((pressed.as_ref(), target), (Some(pressed), Some(released)) if pressed == released)
    }

    pub fn pending(&self) -> Option<&T> {
        self.mouse_down_target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKDROP: &str = "backdrop";
    const CONTENT: &str = "content";

    #[test]
    fn test_press_and_release_on_backdrop_dismisses() {
        let mut tracker = BackdropTracker::new();
        tracker.mouse_down(Some(BACKDROP));
        assert!(tracker.click(Some(&BACKDROP)));
    }

    #[test]
    fn test_drag_from_content_to_backdrop_does_not_dismiss() {
        let mut tracker = BackdropTracker::new();
        tracker.mouse_down(Some(CONTENT));
        assert!(!tracker.click(Some(&BACKDROP)));
    }

    #[test]
    fn test_click_without_mouse_down_does_not_dismiss() {
        let mut tracker = BackdropTracker::<&str>::new();
        assert!(!tracker.click(Some(&BACKDROP)));
        assert!(!tracker.click(None));
    }

    #[test]
    fn test_recorded_target_is_consumed_by_click() {
        let mut tracker = BackdropTracker::new();
        tracker.mouse_down(Some(BACKDROP));
        assert!(tracker.click(Some(&BACKDROP)));
        assert_eq!(tracker.pending(), None);
        assert!(!tracker.click(Some(&BACKDROP)));
    }

    #[test]
    fn test_latest_mouse_down_wins() {
        let mut tracker = BackdropTracker::new();
        tracker.mouse_down(Some(CONTENT));
        tracker.mouse_down(Some(BACKDROP));
        assert_eq!(tracker.pending(), Some(&BACKDROP));
        assert!(tracker.click(Some(&BACKDROP)));
    }
}
