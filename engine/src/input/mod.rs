//! Input Module
//!
//! Keyboard and mouse state tracking for the demo.
//! Decoupled from winit to use generic key codes.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::DragMouseState;
