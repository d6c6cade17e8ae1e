//! Per-Block Simulation State
//!
//! Numeric state for one structural block. The simulator is the sole writer;
//! the rendering layer reads positions and rotations by index and never
//! mutates these fields.

use glam::Vec3;

/// Simulation state for a single castle block.
///
/// A block at rest sits exactly at `rest_position` with zero velocities and
/// `active == false`. An armed block falls, bounces on its own resting height
/// and eventually settles back to where it started - there is no shared
/// ground plane and no block-block collision.
#[derive(Debug, Clone, Copy)]
pub struct BlockState {
    /// Position occupied while the structure is intact. Never changes.
    pub rest_position: Vec3,
    /// Yaw assigned at creation (tower tangent angle, 0 for wall/roof
    /// pieces). Composed with simulated rotation, never mutated.
    pub rest_yaw: f32,
    /// Live position, starts at `rest_position`.
    pub position: Vec3,
    /// Linear velocity, zero at rest.
    pub velocity: Vec3,
    /// Angular velocity, zero at rest, decays while active.
    pub angular_velocity: Vec3,
    /// Pitch/yaw/roll accumulator, starts at `(0, rest_yaw, 0)`.
    pub rotation: Vec3,
    /// Reserved for future per-block tuning; always 1.0 today.
    pub mass: f32,
    /// True while the block is falling or bouncing.
    pub active: bool,
}

impl BlockState {
    /// Create a block at rest at `rest_position` with the given yaw.
    pub fn new(rest_position: Vec3, rest_yaw: f32) -> Self {
        Self {
            rest_position,
            rest_yaw,
            position: rest_position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            rotation: Vec3::new(0.0, rest_yaw, 0.0),
            mass: 1.0,
            active: false,
        }
    }

    /// Force the block back to its exact rest state.
    ///
    /// Restores the inactive-block contract: position equals rest position,
    /// both velocities are exactly zero, rotation is `(0, rest_yaw, 0)`.
    pub fn reset(&mut self) {
        self.position = self.rest_position;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.rotation = Vec3::new(0.0, self.rest_yaw, 0.0);
        self.active = false;
    }

    /// Check the inactive-block contract.
    pub fn is_at_rest(&self) -> bool {
        !self.active
            && self.position == self.rest_position
            && self.velocity == Vec3::ZERO
            && self.angular_velocity == Vec3::ZERO
    }
}
