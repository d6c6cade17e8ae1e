//! Octagonal tower courses with doorway cutouts.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::sim::BlockState;

use super::{vary_shade, BlockVisual};

/// Distance from the tower axis to brick centers.
pub const TOWER_RADIUS: f32 = 5.0;
/// Number of horizontal courses.
pub const TOWER_ROWS: usize = 20;
/// Height of one course.
pub const COURSE_HEIGHT: f32 = 0.55;

const SIDES: usize = 8;
const BRICKS_PER_SIDE: usize = 3;
const BRICK_HALF_EXTENTS: Vec3 = Vec3::new(0.62, 0.26, 0.26);
const STONE: [f32; 3] = [0.55, 0.52, 0.48];

/// One rectangular opening on the front face of the tower. Row ranges
/// are counted from the top course so the openings keep their place if
/// the tower grows taller. The test is against the brick's world x
/// on the front half (`z > 0`).
#[derive(Debug, Clone, Copy)]
pub struct DoorwayCutout {
    /// First affected row, counted from the top (inclusive).
    pub first_from_top: usize,
    /// Last affected row, counted from the top (inclusive).
    pub last_from_top: usize,
    /// Half the opening width in world units.
    pub half_width: f32,
}

impl DoorwayCutout {
    /// Whether a brick at this row with this world position falls
    /// inside the opening.
    pub fn contains(&self, row: usize, position: Vec3) -> bool {
        let from_top = (TOWER_ROWS - 1).saturating_sub(row);
        from_top >= self.first_from_top
            && from_top <= self.last_from_top
            && position.z > 0.0
            && position.x.abs() < self.half_width
    }
}

/// The four openings: three windows and the gate at ground level.
/// Ranges are disjoint; the exact numbers are the visual design.
pub fn doorway_cutouts() -> [DoorwayCutout; 4] {
    [
        DoorwayCutout { first_from_top: 2, last_from_top: 4, half_width: 0.7 },
        DoorwayCutout { first_from_top: 7, last_from_top: 9, half_width: 0.7 },
        DoorwayCutout { first_from_top: 12, last_from_top: 14, half_width: 0.8 },
        DoorwayCutout { first_from_top: 16, last_from_top: 19, half_width: 2.0 },
    ]
}

pub(super) fn build(blocks: &mut Vec<BlockState>, visuals: &mut Vec<BlockVisual>) {
    let cutouts = doorway_cutouts();

    for row in 0..TOWER_ROWS {
        let y = row as f32 * COURSE_HEIGHT + COURSE_HEIGHT * 0.5;
        for side in 0..SIDES {
            let corner_a = side as f32 / SIDES as f32 * TAU;
            let corner_b = (side + 1) as f32 / SIDES as f32 * TAU;
            for col in 0..BRICKS_PER_SIDE {
                // Brick centers interpolate in angle between the side's
                // corners; the yaw follows the local tangent so the
                // courses read as a continuous curved wall.
                let t = (col as f32 + 0.5) / BRICKS_PER_SIDE as f32;
                let angle = corner_a + (corner_b - corner_a) * t;
                let position =
                    Vec3::new(angle.cos() * TOWER_RADIUS, y, angle.sin() * TOWER_RADIUS);

                if cutouts.iter().any(|c| c.contains(row, position)) {
                    continue;
                }

                let index = blocks.len();
                blocks.push(BlockState::new(position, FRAC_PI_2 - angle));
                visuals.push(BlockVisual {
                    half_extents: BRICK_HALF_EXTENTS,
                    color: vary_shade(STONE, index, 0.06),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutout_rows_are_disjoint() {
        let cutouts = doorway_cutouts();
        for (i, a) in cutouts.iter().enumerate() {
            assert!(a.first_from_top <= a.last_from_top);
            assert!(a.last_from_top < TOWER_ROWS);
            for b in &cutouts[i + 1..] {
                assert!(
                    a.last_from_top < b.first_from_top || b.last_from_top < a.first_from_top
                );
            }
        }
    }

    #[test]
    fn test_cutout_only_affects_front_face() {
        let gate = doorway_cutouts()[3];
        let row = 0; // bottom course, inside the gate's row range
        assert!(gate.contains(row, Vec3::new(0.0, 0.3, TOWER_RADIUS)));
        assert!(!gate.contains(row, Vec3::new(0.0, 0.3, -TOWER_RADIUS)));
        assert!(!gate.contains(row, Vec3::new(gate.half_width + 0.1, 0.3, TOWER_RADIUS)));
    }

    #[test]
    fn test_doorway_excludes_front_bricks() {
        let mut blocks = Vec::new();
        let mut visuals = Vec::new();
        build(&mut blocks, &mut visuals);

        let gate = doorway_cutouts()[3];
        for block in &blocks {
            assert!(!gate.contains(
                ((block.rest_position.y / COURSE_HEIGHT) as usize).min(TOWER_ROWS - 1),
                block.rest_position
            ));
        }

        // The gate actually removes bricks from its rows.
        let bricks_in_row = |row: usize| {
            let y = row as f32 * COURSE_HEIGHT + COURSE_HEIGHT * 0.5;
            blocks
                .iter()
                .filter(|b| (b.rest_position.y - y).abs() < 1e-4)
                .count()
        };
        assert!(bricks_in_row(0) < SIDES * BRICKS_PER_SIDE);
        assert_eq!(bricks_in_row(4), SIDES * BRICKS_PER_SIDE);

        // Back half is untouched: every course keeps bricks with z < 0.
        for row in 0..TOWER_ROWS {
            let y = row as f32 * COURSE_HEIGHT + COURSE_HEIGHT * 0.5;
            assert!(blocks
                .iter()
                .any(|b| (b.rest_position.y - y).abs() < 1e-4 && b.rest_position.z < 0.0));
        }
    }
}
