//! Keyboard Input Module
//!
//! Tracks the handful of keys the demo reacts to, with edge detection so
//! actions fire once per press. Decoupled from winit - the window layer
//! translates physical keys into these generic codes.

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Detonate the castle.
    Space,
    /// Toggle fullscreen.
    F,
    /// Reset the camera framing.
    R,
    /// Quit.
    Escape,
}

const KEY_COUNT: usize = 4;

fn slot(key: KeyCode) -> usize {
    match key {
        KeyCode::Space => 0,
        KeyCode::F => 1,
        KeyCode::R => 2,
        KeyCode::Escape => 3,
    }
}

/// Per-key held/pressed state with one-frame edge detection.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key transition from the event loop.
    pub fn handle_key(&mut self, key: KeyCode, down: bool) {
        let i = slot(key);
        if down && !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = down;
    }

    /// True while the key is held down.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held[slot(key)]
    }

    /// True exactly once per physical press. Cleared by [`end_frame`].
    ///
    /// [`end_frame`]: KeyboardState::end_frame
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed[slot(key)]
    }

    /// Clear the per-frame press edges. Call once at the end of update.
    pub fn end_frame(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_fires_once() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Space, true);
        assert!(keys.just_pressed(KeyCode::Space));
        keys.end_frame();

        // Key repeat sends more "down" events; no new edge until release.
        keys.handle_key(KeyCode::Space, true);
        assert!(!keys.just_pressed(KeyCode::Space));
        assert!(keys.is_held(KeyCode::Space));

        keys.handle_key(KeyCode::Space, false);
        keys.handle_key(KeyCode::Space, true);
        assert!(keys.just_pressed(KeyCode::Space));
    }
}
