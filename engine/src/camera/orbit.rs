//! Orbit Camera
//!
//! Spherical-coordinate camera that orbits a fixed look target. Yaw is
//! unrestricted, pitch is clamped so the camera never flips over the
//! pole, and distance is clamped to keep the castle in frame.

use glam::{Mat4, Vec3};

const PITCH_LIMIT: f32 = 1.45;
const MIN_DISTANCE: f32 = 8.0;
const MAX_DISTANCE: f32 = 60.0;

const DEFAULT_YAW: f32 = 0.6;
const DEFAULT_PITCH: f32 = 0.35;
const DEFAULT_DISTANCE: f32 = 26.0;

/// Orbit camera state. Angles are radians.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Point the camera looks at (roughly mid-tower).
    pub target: Vec3,
    /// Horizontal angle - unrestricted, wraps naturally.
    pub yaw: f32,
    /// Vertical angle - clamped to avoid gimbal flip.
    pub pitch: f32,
    /// Distance from the target.
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 6.0, 0.0),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            fov_y: 50.0_f32.to_radians(),
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mouse-drag delta (pixels scaled by the caller).
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a scroll-wheel zoom. Positive moves the camera closer.
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Restore the framing used at startup.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ) * self.distance;
        self.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, 0.1, 300.0)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_clamps_at_limits() {
        let mut camera = OrbitCamera::new();
        camera.rotate(0.0, 100.0);
        assert!(camera.pitch <= PITCH_LIMIT);
        camera.rotate(0.0, -200.0);
        assert!(camera.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_clamps_distance() {
        let mut camera = OrbitCamera::new();
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = OrbitCamera::new();
        camera.rotate(2.0, 0.5);
        camera.zoom(5.0);
        camera.reset();
        let fresh = OrbitCamera::new();
        assert_eq!(camera.yaw, fresh.yaw);
        assert_eq!(camera.pitch, fresh.pitch);
        assert_eq!(camera.distance, fresh.distance);
    }

    #[test]
    fn test_eye_sits_at_distance_from_target() {
        let camera = OrbitCamera::new();
        let d = (camera.eye() - camera.target).length();
        assert!((d - camera.distance).abs() < 1e-3);
    }
}
