//! Mouse State Tracker
//!
//! Drag-to-orbit mouse handling with delta accumulation. Cursor motion
//! while the right button is held accumulates between frames and is
//! consumed atomically once per update, along with scroll-wheel zoom
//! and a left-click edge used to detonate.

/// Mouse state for orbit control.
///
/// - **Delta accumulation**: drag deltas accumulate until consumed
/// - **Atomic consumption**: `consume_*` returns the accumulated value
///   and resets it
#[derive(Debug, Clone, Default)]
pub struct DragMouseState {
    dragging: bool,
    delta_x: f32,
    delta_y: f32,
    scroll: f32,
    clicked: bool,
}

impl DragMouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a right-button transition from the event loop.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        // Drop stale motion so releasing and re-grabbing never jumps.
        if !dragging {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulate cursor motion. Only counts while dragging.
    pub fn accumulate_motion(&mut self, dx: f32, dy: f32) {
        if self.dragging {
            self.delta_x += dx;
            self.delta_y += dy;
        }
    }

    /// Accumulate scroll-wheel lines (positive = toward the scene).
    pub fn accumulate_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Record a left-button press.
    pub fn record_click(&mut self) {
        self.clicked = true;
    }

    /// Consume the accumulated drag delta, resetting it to zero.
    pub fn consume_drag(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Consume the accumulated scroll amount.
    pub fn consume_scroll(&mut self) -> f32 {
        let scroll = self.scroll;
        self.scroll = 0.0;
        scroll
    }

    /// Consume the click edge, if any.
    pub fn consume_click(&mut self) -> bool {
        let clicked = self.clicked;
        self.clicked = false;
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_only_counts_while_dragging() {
        let mut mouse = DragMouseState::new();
        mouse.accumulate_motion(5.0, 5.0);
        assert_eq!(mouse.consume_drag(), (0.0, 0.0));

        mouse.set_dragging(true);
        mouse.accumulate_motion(3.0, -2.0);
        mouse.accumulate_motion(1.0, 1.0);
        assert_eq!(mouse.consume_drag(), (4.0, -1.0));
        assert_eq!(mouse.consume_drag(), (0.0, 0.0));
    }

    #[test]
    fn test_release_drops_stale_delta() {
        let mut mouse = DragMouseState::new();
        mouse.set_dragging(true);
        mouse.accumulate_motion(10.0, 10.0);
        mouse.set_dragging(false);
        assert_eq!(mouse.consume_drag(), (0.0, 0.0));
    }

    #[test]
    fn test_click_is_an_edge() {
        let mut mouse = DragMouseState::new();
        mouse.record_click();
        assert!(mouse.consume_click());
        assert!(!mouse.consume_click());
    }
}
