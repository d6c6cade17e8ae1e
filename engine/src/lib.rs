//! Castle Blast Engine Library
//!
//! Everything behind the castle-collapse demo: the procedural castle
//! generator, the per-block collapse simulation, and the rendering,
//! camera, input, and audio glue around them.
//!
//! # Modules
//!
//! - [`castle`] - Procedural brick layout for the tower, walls, roof, and props
//! - [`sim`] - Per-block physics: arming impulses, stepping, settling, phasing
//! - [`render`] - wgpu instanced-cube pipeline and GPU context
//! - [`camera`] - Orbit camera, window-system agnostic
//! - [`input`] - Keyboard and mouse state tracking
//! - [`audio`] - Synthesized detonation sound
//! - [`settings`] - Optional settings.json
//!
//! # Example
//!
//! ```ignore
//! use castle_blast_engine::castle::Castle;
//! use castle_blast_engine::sim::CollapseDirector;
//!
//! let mut castle = Castle::generate();
//! let mut director = CollapseDirector::new();
//!
//! // On the detonate gesture:
//! director.trigger(now);
//!
//! // Once per frame:
//! let fired = director.update(now, dt, &mut castle.blocks);
//! if fired {
//!     // play the boom
//! }
//! ```

pub mod audio;
pub mod camera;
pub mod castle;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
