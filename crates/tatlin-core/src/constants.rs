//! Shared numeric constants.
//!
//! These are the defaults behind the configuration structs in
//! [`crate::config`]; code that needs a tunable value should read it from
//! the config instance rather than from here.

/// Lower zoom bound shared by all view modes
pub const ZOOM_MIN: f32 = 0.1;
/// Upper zoom bound shared by all view modes
pub const ZOOM_MAX: f32 = 1000.0;
/// Multiplicative step applied when zooming in
pub const ZOOM_IN_STEP: f32 = 1.2;
/// Multiplicative step applied when zooming out
pub const ZOOM_OUT_STEP: f32 = 0.83;

/// Arrowhead drawn at the end of every movement, tip at the origin and
/// barbs trailing along -X. Rotated by the travel angle before use.
pub const ARROW_TEMPLATE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [-0.4, -0.1, 0.0], [-0.4, 0.1, 0.0]];

/// Build platform width in millimetres
pub const PLATFORM_WIDTH_MM: u32 = 120;
/// Build platform depth in millimetres
pub const PLATFORM_DEPTH_MM: u32 = 100;
/// Largest platform side the grid is built for, in millimetres
pub const PLATFORM_MAX_MM: u32 = 10_000;
/// Spacing of major platform graduations in millimetres
pub const PLATFORM_GRADUATIONS_MAJOR: u32 = 10;

/// Gap between the overlay indicator and the viewport edge
pub const UI_OVERLAY_MARGIN: f32 = 20.0;

/// Decimal places kept by bounding box extents
pub const EXTENT_DECIMALS: i32 = 2;
