//! Per-block collapse simulation
//!
//! Purely numeric: blocks are plain state structs, the integrator mutates
//! them in place, and the director sequences the whole show. Nothing in
//! here touches the GPU - the renderer reads block state by index.

pub mod block;
pub mod collapse;
pub mod director;

pub use block::BlockState;
pub use collapse::{active_count, arm, impulse_jitter, step, GRAVITY, MAX_STEP_DT};
pub use director::CollapseDirector;
