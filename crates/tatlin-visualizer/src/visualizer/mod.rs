//! Renderable geometry
//!
//! This module provides:
//! - Axis-aligned bounding boxes with a lazily filled cache
//! - Toolpath geometry (path, color and direction-arrow buffers per layer)
//! - Mesh geometry for triangulated solid models
//! - The build platform grid

pub mod bounds;
pub mod geometry;
pub mod mesh;
pub mod platform;
pub mod toolpath;

pub use bounds::BoundingBox;
pub use geometry::{BoundsCache, Geometry, RenderMode};
pub use mesh::{Axis, MeshGeometry};
pub use platform::PlatformGeometry;
pub use toolpath::{RenderRanges, ToolpathGeometry, ToolpathStats};
