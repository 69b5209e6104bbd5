//! # Tatlin Visualizer
//!
//! Geometry construction and view transforms for toolpath and mesh preview.
//! Builds vertex, color and direction-arrow buffers with layer indices and
//! bounding boxes, and computes projection/modelview matrices for the
//! orthographic (2D) and perspective (3D) view modes. Buffer upload and draw
//! calls are left to the renderer.

pub mod math;
pub mod view;
pub mod visualizer;

pub use math::MatrixStack;

pub use view::{
    CameraState, FrameScope, OrthographicView, PerspectiveView, Projection, RenderState,
    ViewMode, ViewPreset, ViewSet, ViewState,
};

pub use visualizer::{
    Axis, BoundingBox, BoundsCache, Geometry, MeshGeometry, PlatformGeometry, RenderMode,
    RenderRanges, ToolpathGeometry, ToolpathStats,
};
