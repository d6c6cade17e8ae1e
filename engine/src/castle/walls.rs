//! Back wall and side walls with battlements.
//!
//! All wall pieces are axis-aligned (yaw 0); the side walls just use
//! depth-major brick extents instead of rotating anything.

use glam::Vec3;

use crate::sim::BlockState;

use super::tower::COURSE_HEIGHT;
use super::{vary_shade, BlockVisual};

const BACK_WALL_Z: f32 = -7.0;
const BACK_WALL_COLS: usize = 12;
const BACK_WALL_ROWS: usize = 10;
const BACK_BRICK: Vec3 = Vec3::new(0.55, 0.26, 0.25);

const SIDE_WALL_X: f32 = 7.5;
const SIDE_WALL_COLS: usize = 9;
const SIDE_WALL_ROWS: usize = 8;
const SIDE_BRICK: Vec3 = Vec3::new(0.25, 0.26, 0.55);

const MERLON: Vec3 = Vec3::new(0.3, 0.3, 0.3);
const STONE: [f32; 3] = [0.5, 0.47, 0.44];

pub(super) fn build(blocks: &mut Vec<BlockState>, visuals: &mut Vec<BlockVisual>) {
    back_wall(blocks, visuals);
    side_wall(blocks, visuals, -SIDE_WALL_X);
    side_wall(blocks, visuals, SIDE_WALL_X);
}

fn back_wall(blocks: &mut Vec<BlockState>, visuals: &mut Vec<BlockVisual>) {
    for row in 0..BACK_WALL_ROWS {
        let y = row as f32 * COURSE_HEIGHT + COURSE_HEIGHT * 0.5;
        for col in 0..BACK_WALL_COLS {
            let x = (col as f32 - (BACK_WALL_COLS - 1) as f32 * 0.5) * (BACK_BRICK.x * 2.0);
            push(blocks, visuals, Vec3::new(x, y, BACK_WALL_Z), BACK_BRICK);
        }
    }
}

fn side_wall(blocks: &mut Vec<BlockState>, visuals: &mut Vec<BlockVisual>, x: f32) {
    for row in 0..SIDE_WALL_ROWS {
        let y = row as f32 * COURSE_HEIGHT + COURSE_HEIGHT * 0.5;
        for col in 0..SIDE_WALL_COLS {
            let z = BACK_WALL_Z + (col as f32 + 0.5) * (SIDE_BRICK.z * 2.0);
            push(blocks, visuals, Vec3::new(x, y, z), SIDE_BRICK);
        }
    }

    // Battlements: merlons on alternating columns above the top course.
    let top_y = SIDE_WALL_ROWS as f32 * COURSE_HEIGHT + MERLON.y;
    for col in (0..SIDE_WALL_COLS).step_by(2) {
        let z = BACK_WALL_Z + (col as f32 + 0.5) * (SIDE_BRICK.z * 2.0);
        push(blocks, visuals, Vec3::new(x, top_y, z), MERLON);
    }
}

fn push(
    blocks: &mut Vec<BlockState>,
    visuals: &mut Vec<BlockVisual>,
    position: Vec3,
    half_extents: Vec3,
) {
    let index = blocks.len();
    blocks.push(BlockState::new(position, 0.0));
    visuals.push(BlockVisual {
        half_extents,
        color: vary_shade(STONE, index, 0.05),
    });
}
