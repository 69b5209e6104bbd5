//! Per-instance configuration for geometry and views
//!
//! Every tunable number the geometry builders and view modes use lives in
//! one of these structs. They derive `serde` so a host application can keep
//! them inside its own settings file; this crate does not own a file format.
//!
//! - [`ColorMap`]: RGBA per movement class
//! - [`ToolpathStyle`]: colors plus the direction arrow template
//! - [`ZoomLimits`]: zoom clamp range and step factors
//! - [`PlatformConfig`]: build platform size and grid colors

use crate::constants;
use crate::data::{MovementKind, Rgba};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Movement colors, one per [`MovementKind`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMap {
    /// Extruder off (gray)
    pub travel: Rgba,
    /// Loops (yellow)
    pub loops: Rgba,
    /// Outermost perimeter (cyan)
    pub outer_perimeter: Rgba,
    /// Inner perimeters (green)
    pub inner_perimeter: Rgba,
    /// Everything else (red)
    pub fill: Rgba,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            travel: [0.6, 0.6, 0.6, 0.6],
            loops: [1.0, 0.875, 0.0, 0.6],
            outer_perimeter: [0.0, 0.875, 0.875, 0.6],
            inner_perimeter: [0.0, 1.0, 0.0, 0.6],
            fill: [1.0, 0.0, 0.0, 0.6],
        }
    }
}

impl ColorMap {
    pub fn color_for(&self, kind: MovementKind) -> Rgba {
        match kind {
            MovementKind::Travel => self.travel,
            MovementKind::Loop => self.loops,
            MovementKind::OuterPerimeter => self.outer_perimeter,
            MovementKind::InnerPerimeter => self.inner_perimeter,
            MovementKind::Fill => self.fill,
        }
    }
}

/// Styling used when building toolpath geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolpathStyle {
    pub colors: ColorMap,
    /// Arrowhead template: tip first, pointing along +X
    pub arrow: [[f32; 3]; 3],
    /// Whether direction arrows are drawn initially
    pub arrows_enabled: bool,
}

impl Default for ToolpathStyle {
    fn default() -> Self {
        Self {
            colors: ColorMap::default(),
            arrow: constants::ARROW_TEMPLATE,
            arrows_enabled: true,
        }
    }
}

/// Zoom clamp range and per-direction step factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    /// Multiplier for one zoom-in step (> 1)
    pub step_in: f32,
    /// Multiplier for one zoom-out step (< 1)
    pub step_out: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: constants::ZOOM_MIN,
            max: constants::ZOOM_MAX,
            step_in: constants::ZOOM_IN_STEP,
            step_out: constants::ZOOM_OUT_STEP,
        }
    }
}

impl ZoomLimits {
    /// Returns a copy with `min <= max`, swapping the bounds if needed.
    pub fn sanitized(self) -> Self {
        if self.min <= self.max {
            return self;
        }
        warn!(
            "Zoom limits inverted (min={}, max={}), swapping",
            self.min, self.max
        );
        Self {
            min: self.max,
            max: self.min,
            ..self
        }
    }

    /// Apply one zoom step in the direction of `delta` and clamp.
    ///
    /// Positive `delta` zooms in, negative zooms out, zero leaves the factor unchanged.
    pub fn step(&self, factor: f32, delta: f32) -> f32 {
        if delta > 0.0 {
            (factor * self.step_in).min(self.max)
        } else if delta < 0.0 {
            (factor * self.step_out).max(self.min)
        } else {
            factor
        }
    }
}

/// Build platform drawn under the model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Width along X in millimetres
    pub width: u32,
    /// Depth along Y in millimetres
    pub depth: u32,
    /// Every n-th line is a major graduation; every n/2-th an intermediate one
    pub graduations_major: u32,
    pub color_major: Rgba,
    pub color_intermediate: Rgba,
    pub color_minor: Rgba,
    pub color_fill: Rgba,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        let green = [0xaf as f32 / 255.0, 0xdf as f32 / 255.0, 0x5f as f32 / 255.0];
        let with_alpha = |a: f32| [green[0], green[1], green[2], a];
        Self {
            width: constants::PLATFORM_WIDTH_MM,
            depth: constants::PLATFORM_DEPTH_MM,
            graduations_major: constants::PLATFORM_GRADUATIONS_MAJOR,
            color_major: with_alpha(0.33),
            color_intermediate: with_alpha(0.2),
            color_minor: with_alpha(0.1),
            color_fill: with_alpha(0.05),
        }
    }
}

impl PlatformConfig {
    /// Limit both sides to [`constants::PLATFORM_MAX_MM`]
    pub fn clamped(self) -> Self {
        let max = constants::PLATFORM_MAX_MM;
        if self.width <= max && self.depth <= max {
            return self;
        }
        warn!(
            "Platform {}x{} mm exceeds {} mm, clamping",
            self.width, self.depth, max
        );
        Self {
            width: self.width.min(max),
            depth: self.depth.min(max),
            ..self
        }
    }

    /// Color of the grid line at millimetre index `i`
    pub fn graduation_color(&self, i: u32) -> Rgba {
        let major = self.graduations_major.max(1);
        let intermediate = (major / 2).max(1);
        if i % major == 0 {
            self.color_major
        } else if i % intermediate == 0 {
            self.color_intermediate
        } else {
            self.color_minor
        }
    }
}
