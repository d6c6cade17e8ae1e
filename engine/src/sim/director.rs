//! Collapse Direction
//!
//! Phases the collapse over wall-clock time: idle, a dramatic two-second
//! pause, a one-shot arming window, the stepped collapse, and a settle
//! window with an early exit plus a hard eight-second timeout. The render
//! loop calls [`CollapseDirector::update`] once per frame.

use super::block::BlockState;
use super::collapse::{active_count, arm, step};

/// Hold duration before the charges go off.
pub const PAUSE_SECS: f32 = 2.0;
/// Arming fires once inside `[PAUSE_SECS, PAUSE_SECS + ARM_WINDOW_SECS)`.
pub const ARM_WINDOW_SECS: f32 = 0.1;
/// End of the guaranteed stepping phase.
pub const SETTLE_START_SECS: f32 = 6.0;
/// Unconditional end of the animation.
pub const HARD_TIMEOUT_SECS: f32 = 8.0;
/// Earliest elapsed time at which an all-settled collapse may end early.
/// Kept at 4.0 even though arming finishes by 2.1 - retuned impulses that
/// settle sooner simply render at rest until the settle window opens.
const EARLY_EXIT_MIN_SECS: f32 = 4.0;

/// Drives the collapse phase machine. One per scene.
///
/// `start_time` is the app-clock second at which the current collapse was
/// triggered; `None` means idle. Triggering mid-animation restarts the
/// timeline and re-arms, overwriting the velocities of blocks that were
/// still settling - intentional, everything runs on one thread.
#[derive(Debug, Default)]
pub struct CollapseDirector {
    start_time: Option<f32>,
    armed: bool,
}

impl CollapseDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or restart) a collapse at app-clock time `now`.
    pub fn trigger(&mut self, now: f32) {
        self.start_time = Some(now);
        self.armed = false;
    }

    /// True when no collapse is in progress.
    pub fn is_idle(&self) -> bool {
        self.start_time.is_none()
    }

    /// Seconds since the current collapse was triggered, if any.
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        self.start_time.map(|start| now - start)
    }

    /// Advance one frame. Returns `true` on the frame the charges fire
    /// (the caller plays the detonation sound on that edge).
    pub fn update(&mut self, now: f32, dt: f32, blocks: &mut [BlockState]) -> bool {
        let Some(start) = self.start_time else {
            // Idle: pin everything to rest against residual drift.
            for block in blocks.iter_mut() {
                block.reset();
            }
            return false;
        };
        let elapsed = now - start;

        if elapsed >= HARD_TIMEOUT_SECS {
            self.start_time = None;
            return false;
        }

        if elapsed < PAUSE_SECS {
            // Dramatic pause: hold at rest. Also wipes mid-air state left
            // over when a running collapse is re-triggered.
            for block in blocks.iter_mut() {
                block.reset();
            }
            return false;
        }

        let mut fired = false;
        if !self.armed && elapsed < PAUSE_SECS + ARM_WINDOW_SECS {
            arm(blocks);
            self.armed = true;
            fired = true;
        }

        step(blocks, dt);

        if elapsed >= SETTLE_START_SECS
            && elapsed > EARLY_EXIT_MIN_SECS
            && active_count(blocks) == 0
        {
            self.start_time = None;
        }

        fired
    }
}
