//! Input data model
//!
//! Parsed toolpath records as the geometry builders consume them. The
//! parsers themselves live outside this workspace; anything that can answer
//! the [`ToolMovement`] questions can be turned into vertex buffers.

pub mod movement;

pub use movement::{Movement, MovementKind, ToolMovement};

/// RGBA color with components in `0.0..=1.0`
pub type Rgba = [f32; 4];
