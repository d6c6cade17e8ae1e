//! Camera Module
//!
//! Provides the orbit camera for the castle scene.
//! This module is window-system agnostic - it only deals with camera state and math.
//! Input handling happens externally and feeds the camera delta values.

pub mod orbit;

pub use orbit::OrbitCamera;
