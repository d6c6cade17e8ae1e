//! Conical roof built from shrinking rings of tiles.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::sim::BlockState;

use super::tower::{COURSE_HEIGHT, TOWER_RADIUS, TOWER_ROWS};
use super::{vary_shade, BlockVisual};

const ROOF_RINGS: usize = 7;
const RING_HEIGHT: f32 = 0.5;
const TILE_HALF_EXTENTS: Vec3 = Vec3::new(0.45, 0.12, 0.3);
const TILE: [f32; 3] = [0.52, 0.24, 0.18];

/// Tiles per unit of ring circumference.
const TILE_DENSITY: f32 = 0.75;

pub(super) fn build(blocks: &mut Vec<BlockState>, visuals: &mut Vec<BlockVisual>) {
    let base_y = TOWER_ROWS as f32 * COURSE_HEIGHT;

    for ring in 0..=ROOF_RINGS {
        // Taper to a point; the apex ring degenerates to radius zero and
        // is skipped rather than emitting a zero-count ring.
        let radius = TOWER_RADIUS * (1.0 - ring as f32 / ROOF_RINGS as f32);
        let tiles = (radius * TAU * TILE_DENSITY).round() as usize;
        if radius < 1e-3 || tiles == 0 {
            continue;
        }

        let y = base_y + ring as f32 * RING_HEIGHT + TILE_HALF_EXTENTS.y;
        for tile in 0..tiles {
            let angle = tile as f32 / tiles as f32 * TAU;
            let position = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
            let index = blocks.len();
            blocks.push(BlockState::new(position, FRAC_PI_2 - angle));
            visuals.push(BlockVisual {
                half_extents: TILE_HALF_EXTENTS,
                color: vary_shade(TILE, index, 0.05),
            });
        }
    }
}
