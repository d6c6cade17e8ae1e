//! Procedural Castle Generator
//!
//! Lays out every brick of the demo castle as a [`BlockState`] plus a
//! parallel [`BlockVisual`] (size and color, read by the renderer at the
//! same index). Placement is fully deterministic; the only "randomness"
//! is a pure hash of the block index used for cosmetic shade variation,
//! kept separate from the physics jitter so retuning one never moves the
//! other.
//!
//! # Pieces
//!
//! - **Tower**: octagonal, built from courses of bricks with four doorway
//!   cutouts on the front face
//! - **Roof**: tapering cone of tile rings above the tower
//! - **Walls**: a back wall and two side walls with battlements
//! - **Props**: non-simulated set dressing (charges, detonator, clouds)

use glam::Vec3;

use crate::sim::BlockState;

mod props;
mod roof;
mod tower;
mod walls;

pub use props::{Prop, CHARGE_COLOR, DETONATOR_POS, PLUNGER_TRAVEL};
pub use tower::{doorway_cutouts, DoorwayCutout, COURSE_HEIGHT, TOWER_RADIUS, TOWER_ROWS};

/// Per-block render attributes, parallel to the block list by index.
/// The simulation never reads these.
#[derive(Debug, Clone, Copy)]
pub struct BlockVisual {
    pub half_extents: Vec3,
    pub color: [f32; 4],
}

/// The generated scene: simulation blocks, their visuals, and the
/// non-simulated props.
#[derive(Debug)]
pub struct Castle {
    pub blocks: Vec<BlockState>,
    pub visuals: Vec<BlockVisual>,
    pub props: Vec<Prop>,
    /// Index into `props` of the detonator handle, so the app can
    /// animate it when the castle is blown.
    pub plunger_handle: usize,
}

impl Castle {
    /// Build the whole castle. Deterministic: two calls produce
    /// bit-identical block lists.
    pub fn generate() -> Self {
        let mut blocks = Vec::new();
        let mut visuals = Vec::new();

        tower::build(&mut blocks, &mut visuals);
        roof::build(&mut blocks, &mut visuals);
        walls::build(&mut blocks, &mut visuals);

        debug_assert_eq!(blocks.len(), visuals.len());
        debug_assert!(blocks.iter().all(|b| b.rest_position.is_finite()));

        let (props, plunger_handle) = props::build();

        Self {
            blocks,
            visuals,
            props,
            plunger_handle,
        }
    }
}

/// Cosmetic shade variation in `[0, 1)`, a pure hash of the block index.
/// Distinct from the physics jitter by construction.
pub(crate) fn shade_jitter(index: usize) -> f32 {
    ((index as u32).wrapping_mul(2_654_435_761) % 1000) as f32 / 1000.0
}

/// Lighten or darken a base color by the per-index shade hash.
pub(crate) fn vary_shade(base: [f32; 3], index: usize, spread: f32) -> [f32; 4] {
    let t = (shade_jitter(index) - 0.5) * 2.0 * spread;
    [base[0] + t, base[1] + t, base[2] + t, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_generation_starts_at_rest() {
        let castle = Castle::generate();
        assert!(!castle.blocks.is_empty());
        for block in &castle.blocks {
            assert!(!block.active);
            assert_eq!(block.position, block.rest_position);
            assert_eq!(block.velocity, Vec3::ZERO);
            assert_eq!(block.angular_velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = Castle::generate();
        let b = Castle::generate();
        assert_eq!(a.blocks.len(), b.blocks.len());
        for (x, y) in a.blocks.iter().zip(b.blocks.iter()) {
            assert_eq!(x.rest_position.to_array(), y.rest_position.to_array());
            assert_eq!(x.rest_yaw.to_bits(), y.rest_yaw.to_bits());
        }
    }

    #[test]
    fn test_visuals_parallel_blocks() {
        let castle = Castle::generate();
        assert_eq!(castle.blocks.len(), castle.visuals.len());
        for visual in &castle.visuals {
            assert!(visual.half_extents.cmpgt(Vec3::ZERO).all());
        }
    }

    #[test]
    fn test_shade_jitter_is_pure_and_bounded() {
        for i in 0..500 {
            let s = shade_jitter(i);
            assert_eq!(s.to_bits(), shade_jitter(i).to_bits());
            assert!((0.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_plunger_handle_index_valid() {
        let castle = Castle::generate();
        assert!(castle.plunger_handle < castle.props.len());
    }
}
