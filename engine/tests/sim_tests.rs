//! Simulation Tests - Arming, Stepping, Settling, Phasing
//!
//! End-to-end properties of the collapse simulation over the generated
//! castle population.

use castle_blast_engine::castle::Castle;
use castle_blast_engine::sim::{active_count, arm, step, BlockState, CollapseDirector};
use glam::Vec3;

const FRAME_DT: f32 = 0.016;

// ============================================================================
// Arm Tests
// ============================================================================

#[test]
fn test_arm_activates_every_block() {
    let mut castle = Castle::generate();
    arm(&mut castle.blocks);

    assert_eq!(active_count(&castle.blocks), castle.blocks.len());
    for block in &castle.blocks {
        assert!(block.active);
        assert_eq!(block.angular_velocity, Vec3::ZERO);
    }
}

#[test]
fn test_arm_upward_kick_grows_with_height() {
    let mut castle = Castle::generate();
    arm(&mut castle.blocks);

    // Bucket by rest height; jitter averages out within a bucket, so
    // mean upward speed must climb strictly from bucket to bucket.
    let max_y = castle
        .blocks
        .iter()
        .map(|b| b.rest_position.y)
        .fold(0.0_f32, f32::max);
    let buckets = 3;
    let mut sums = vec![0.0_f32; buckets];
    let mut counts = vec![0usize; buckets];
    for block in &castle.blocks {
        let i = ((block.rest_position.y / max_y * buckets as f32) as usize).min(buckets - 1);
        sums[i] += block.velocity.y;
        counts[i] += 1;
    }

    let means: Vec<f32> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| s / c as f32)
        .collect();
    assert!(counts.iter().all(|&c| c > 10));
    assert!(means[0] < means[1] && means[1] < means[2]);
}

#[test]
fn test_arm_is_deterministic_across_runs() {
    let mut a = Castle::generate();
    let mut b = Castle::generate();
    arm(&mut a.blocks);
    arm(&mut b.blocks);

    for (x, y) in a.blocks.iter().zip(b.blocks.iter()) {
        assert_eq!(x.velocity.x.to_bits(), y.velocity.x.to_bits());
        assert_eq!(x.velocity.y.to_bits(), y.velocity.y.to_bits());
        assert_eq!(x.velocity.z.to_bits(), y.velocity.z.to_bits());
    }
}

// ============================================================================
// Step Tests
// ============================================================================

#[test]
fn test_step_never_drops_below_rest_height() {
    let mut castle = Castle::generate();
    arm(&mut castle.blocks);

    for _ in 0..600 {
        step(&mut castle.blocks, FRAME_DT);
        for block in &castle.blocks {
            assert!(block.position.y >= block.rest_position.y - 1e-6);
        }
    }
}

#[test]
fn test_settled_block_is_inert_until_rearmed() {
    let mut blocks = vec![BlockState::new(Vec3::new(1.0, 0.8, -2.0), 0.3)];
    arm(&mut blocks);

    let mut steps = 0;
    while blocks[0].active {
        step(&mut blocks, FRAME_DT);
        steps += 1;
        assert!(steps < 10_000, "block never settled");
    }

    let snapshot = blocks[0];
    assert_eq!(snapshot.position, snapshot.rest_position);
    assert_eq!(snapshot.velocity, Vec3::ZERO);

    for _ in 0..100 {
        step(&mut blocks, FRAME_DT);
        assert_eq!(blocks[0].position, snapshot.position);
        assert_eq!(blocks[0].rotation, snapshot.rotation);
        assert_eq!(blocks[0].velocity, Vec3::ZERO);
    }

    arm(&mut blocks);
    assert!(blocks[0].active);
}

#[test]
fn test_collapse_settles_within_six_seconds() {
    let mut castle = Castle::generate();
    arm(&mut castle.blocks);
    let armed = active_count(&castle.blocks);

    let steps = (6.0 / FRAME_DT) as usize;
    for _ in 0..steps {
        step(&mut castle.blocks, FRAME_DT);
    }

    assert!(active_count(&castle.blocks) < armed);
}

// ============================================================================
// Director Tests
// ============================================================================

#[test]
fn test_director_full_timeline() {
    let mut castle = Castle::generate();
    let mut director = CollapseDirector::new();
    director.trigger(0.0);

    // Pause phase: nothing moves.
    let mut now = 0.0;
    while now < 2.0 {
        director.update(now, FRAME_DT, &mut castle.blocks);
        now += FRAME_DT;
    }
    assert_eq!(active_count(&castle.blocks), 0);

    // Collapse phase: the arm frame activates everything.
    let fired = director.update(2.05, FRAME_DT, &mut castle.blocks);
    assert!(fired);
    assert!(active_count(&castle.blocks) > 0);

    // Drive to completion; the animation must end by the hard timeout.
    now = 2.05;
    while now < 8.2 {
        now += FRAME_DT;
        director.update(now, FRAME_DT, &mut castle.blocks);
    }
    assert!(director.is_idle());
    for block in &castle.blocks {
        assert!(!block.active);
    }
}

#[test]
fn test_director_hard_timeout_at_eight_and_a_half() {
    let mut castle = Castle::generate();
    let mut director = CollapseDirector::new();
    director.trigger(0.0);
    director.update(2.05, FRAME_DT, &mut castle.blocks);

    // Jump straight past the cutoff with blocks still mid-air.
    director.update(8.5, FRAME_DT, &mut castle.blocks);
    assert!(director.is_idle());

    // The following idle frame restores rest state.
    director.update(8.6, FRAME_DT, &mut castle.blocks);
    for block in &castle.blocks {
        assert!(!block.active);
        assert_eq!(block.position, block.rest_position);
    }
}
