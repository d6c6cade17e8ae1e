//! Rendering Module
//!
//! wgpu plumbing for the demo: shared GPU context, the instanced cube
//! pipeline, and per-block instance data. The renderer reads simulation
//! state by index and never writes it back.

pub mod block_mesh;
pub mod gpu_context;
pub mod instancing;
pub mod scene;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use instancing::{pack_rgba, BlockInstance, MAX_INSTANCES};
pub use scene::CastleScene;
