//! # Tatlin
//!
//! Geometry and view-transform core of a toolpath and 3D model previewer.
//!
//! ## Architecture
//!
//! Tatlin is organized as a workspace with multiple crates:
//!
//! 1. **tatlin-core** - Movement data model, errors, configuration, constants
//! 2. **tatlin-visualizer** - Vector math, bounding boxes, toolpath and mesh
//!    geometry, orthographic and perspective view modes
//! 3. **tatlin** - Logging setup and a demo binary that drives both
//!
//! ## Features
//!
//! - **Toolpath buffers**: Per-layer path vertices, per-movement colors and
//!   direction arrows, with layer indices for partial drawing
//! - **Mesh buffers**: Triangulated models with normals, scale/rotate/translate
//!   in place and platform centering
//! - **View modes**: Orbiting perspective camera with an orthographic
//!   substitute, top-down 2D view, savable camera restore points

pub use tatlin_core::{config, constants, data};
pub use tatlin_visualizer::{math, view, visualizer};

pub use tatlin_core::{
    ColorMap, Error, GeometryError, Movement, MovementKind, PlatformConfig, Result, Rgba,
    ToolMovement, ToolpathStyle, ViewError, ZoomLimits,
};

pub use tatlin_visualizer::{
    Axis, BoundingBox, BoundsCache, CameraState, FrameScope, Geometry, MatrixStack, MeshGeometry,
    OrthographicView, PerspectiveView, PlatformGeometry, Projection, RenderMode, RenderRanges,
    RenderState, ToolpathGeometry, ToolpathStats, ViewMode, ViewPreset, ViewSet, ViewState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
