//! Collapse Kinematics
//!
//! The two operations of the per-brick simulator: `arm` assigns the initial
//! collapse impulses, `step` advances every active block by one clamped time
//! increment. Both are O(n) over the block list with no block-block coupling.
//!
//! All "randomness" is a pure hash-sine function of the block index, so two
//! runs over the same block ordering produce bit-identical impulses.

use glam::Vec3;

use super::block::BlockState;

/// Gravity in length units per second squared. Deliberately far below real
/// gravity - tuned for the visual pacing of the collapse.
pub const GRAVITY: f32 = 6.0;

/// Upper bound for a single integration step. Frame hitches are clamped to
/// this so per-step displacement stays bounded.
pub const MAX_STEP_DT: f32 = 1.0 / 60.0;

/// Vertical velocity multiplier on ground contact (inverted and damped).
const BOUNCE_DAMPING: f32 = -0.1;
/// Horizontal velocity multiplier per axis on ground contact.
const CONTACT_FRICTION: f32 = 0.85;
/// A block settles once every velocity component is below this magnitude.
const SETTLE_THRESHOLD: f32 = 0.1;
/// Angular velocity multiplier per step while airborne.
const SPIN_DECAY: f32 = 0.95;

/// Sideways impulse amplitude assigned by `arm`.
const LATERAL_SPREAD: f32 = 1.6;
/// Minimum upward impulse for a block resting at height zero.
const UPWARD_BASE: f32 = 2.0;
/// Extra upward impulse per unit of rest height. Higher blocks launch
/// harder, which sequences the collapse top-down.
const UPWARD_HEIGHT_GAIN: f32 = 0.35;
/// Index-jitter amplitude on the upward impulse.
const UPWARD_JITTER: f32 = 0.8;

/// Deterministic jitter in `[-0.5, 0.5)` from a block index and a channel
/// frequency. A smooth hash, not a statistical RNG: the same `(index, freq)`
/// pair always yields the same value.
pub fn impulse_jitter(index: usize, freq: f32) -> f32 {
    // Fractional part on the GLSL convention (x - floor(x)), so the
    // result lands in [0, 1) before centering even for negative sines.
    let x = (index as f32 * freq).sin() * 43758.5453;
    x - x.floor() - 0.5
}

/// Assign collapse impulses to the whole population and activate it.
///
/// Velocities are derived purely from block index and rest height, so the
/// collapse is reproducible. Calling this again before a previous collapse
/// has settled is supported: velocities are simply overwritten, including
/// for blocks still in flight.
pub fn arm(blocks: &mut [BlockState]) {
    for (i, block) in blocks.iter_mut().enumerate() {
        let jx = impulse_jitter(i, 12.9898);
        let jy = impulse_jitter(i, 39.3461);
        let jz = impulse_jitter(i, 78.2330);

        block.velocity = Vec3::new(
            jx * LATERAL_SPREAD,
            UPWARD_BASE + block.rest_position.y * UPWARD_HEIGHT_GAIN + jy * UPWARD_JITTER,
            jz * LATERAL_SPREAD,
        );
        // Rotation drift comes only from the in-flight decay term, never
        // from an initial spin impulse.
        block.angular_velocity = Vec3::ZERO;
        block.active = true;
    }
}

/// Advance every active block by one time step.
///
/// `dt` is clamped to [`MAX_STEP_DT`]. Each block integrates gravity and
/// position, bounces inelastically on its own rest height, and settles
/// (snapping exactly back to rest) once all velocity components drop below
/// the threshold. Settled blocks are skipped entirely.
pub fn step(blocks: &mut [BlockState], dt: f32) {
    let dt = dt.min(MAX_STEP_DT);

    for block in blocks.iter_mut().filter(|b| b.active) {
        block.velocity.y -= GRAVITY * dt;
        block.position += block.velocity * dt;

        // Ground contact against the block's own resting height - bricks
        // fall back to where they started, not to a shared floor.
        if block.position.y <= block.rest_position.y {
            block.position.y = block.rest_position.y;
            block.velocity.y *= BOUNCE_DAMPING;
            block.velocity.x *= CONTACT_FRICTION;
            block.velocity.z *= CONTACT_FRICTION;

            if block.velocity.x.abs() < SETTLE_THRESHOLD
                && block.velocity.y.abs() < SETTLE_THRESHOLD
                && block.velocity.z.abs() < SETTLE_THRESHOLD
            {
                block.reset();
                continue;
            }
        }

        block.rotation += block.angular_velocity * dt;
        block.angular_velocity *= SPIN_DECAY;
    }
}

/// Number of blocks still under simulation.
pub fn active_count(blocks: &[BlockState]) -> usize {
    blocks.iter().filter(|b| b.active).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(heights: &[f32]) -> Vec<BlockState> {
        heights
            .iter()
            .map(|&y| BlockState::new(Vec3::new(0.0, y, 0.0), 0.0))
            .collect()
    }

    #[test]
    fn test_impulse_jitter_is_pure() {
        for i in 0..64 {
            let a = impulse_jitter(i, 12.9898);
            let b = impulse_jitter(i, 12.9898);
            assert_eq!(a.to_bits(), b.to_bits());
            assert!((-0.5..0.5).contains(&a), "jitter out of range: {a}");
        }
    }

    #[test]
    fn test_jitter_channels_are_distinct() {
        // The x and z channels must not collapse into one another.
        let differs = (0..32).any(|i| {
            impulse_jitter(i, 12.9898).to_bits() != impulse_jitter(i, 78.2330).to_bits()
        });
        assert!(differs);
    }

    #[test]
    fn test_arm_activates_all() {
        let mut blocks = column(&[0.0, 1.0, 2.0]);
        arm(&mut blocks);
        for block in &blocks {
            assert!(block.active);
            assert!(block.velocity.y > 0.0);
            assert_eq!(block.angular_velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_step_clamps_large_dt() {
        let mut blocks = column(&[0.0]);
        arm(&mut blocks);
        let v0 = blocks[0].velocity.y;
        // A one-second frame hitch must integrate as a 1/60 step.
        step(&mut blocks, 1.0);
        let dv = v0 - blocks[0].velocity.y;
        assert!((dv - GRAVITY * MAX_STEP_DT).abs() < 1e-6);
    }

    #[test]
    fn test_settled_block_snaps_exactly() {
        let mut blocks = column(&[3.0]);
        arm(&mut blocks);
        for _ in 0..10_000 {
            step(&mut blocks, 1.0 / 60.0);
            if !blocks[0].active {
                break;
            }
        }
        assert!(!blocks[0].active, "block never settled");
        assert_eq!(blocks[0].position, blocks[0].rest_position);
        assert_eq!(blocks[0].velocity, Vec3::ZERO);
    }
}
