//! Build platform grid drawn beneath models.

use super::bounds::BoundingBox;
use super::geometry::{BoundsCache, Geometry};
use crate::math::vector::translate_in_place;
use glam::Vec3;
use tatlin_core::{PlatformConfig, Rgba};
use tracing::debug;

/// Millimetre grid plus a translucent fill, centred on the origin at Z = 0
#[derive(Debug, Clone)]
pub struct PlatformGeometry {
    config: PlatformConfig,
    /// Line list, two vertices per grid line
    vertices: Vec<Vec3>,
    /// One color per grid vertex
    colors: Vec<Rgba>,
    /// Two triangles covering the platform
    fill: Vec<Vec3>,
    bounds: BoundsCache,
}

impl Default for PlatformGeometry {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl PlatformGeometry {
    /// Build the grid. Sides larger than [`tatlin_core::constants::PLATFORM_MAX_MM`] are clamped.
    pub fn new(config: PlatformConfig) -> Self {
        let config = config.clamped();
        let width = config.width as f32;
        let depth = config.depth as f32;
        let line_count = config.width as usize + config.depth as usize + 2;

        let mut vertices = Vec::with_capacity(line_count * 2);
        let mut colors = Vec::with_capacity(line_count * 2);

        for i in 0..=config.width {
            let color = config.graduation_color(i);
            vertices.push(Vec3::new(i as f32, 0.0, 0.0));
            vertices.push(Vec3::new(i as f32, depth, 0.0));
            colors.extend([color; 2]);
        }
        for i in 0..=config.depth {
            let color = config.graduation_color(i);
            vertices.push(Vec3::new(0.0, i as f32, 0.0));
            vertices.push(Vec3::new(width, i as f32, 0.0));
            colors.extend([color; 2]);
        }

        #[rustfmt::skip]
        let mut fill = vec![
            Vec3::new(0.0,   0.0,   0.0),
            Vec3::new(width, 0.0,   0.0),
            Vec3::new(width, depth, 0.0),
            Vec3::new(width, depth, 0.0),
            Vec3::new(0.0,   depth, 0.0),
            Vec3::new(0.0,   0.0,   0.0),
        ];

        let center = Vec3::new(-width / 2.0, -depth / 2.0, 0.0);
        translate_in_place(&mut vertices, center);
        translate_in_place(&mut fill, center);

        debug!(
            "Platform {}x{} mm: {} grid lines",
            config.width, config.depth, line_count
        );

        Self {
            config,
            vertices,
            colors,
            fill,
            bounds: BoundsCache::new(),
        }
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn fill(&self) -> &[Vec3] {
        &self.fill
    }

    pub fn fill_color(&self) -> Rgba {
        self.config.color_fill
    }

    /// Size handed to [`crate::view::ViewMode::ui_transform`] for the orientation indicator
    pub fn indicator_length(&self) -> f32 {
        self.config.width.max(self.config.depth) as f32 / 2.0
    }
}

impl Geometry for PlatformGeometry {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds.get_or_compute(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_platform_layout() {
        let platform = PlatformGeometry::default();
        assert_eq!(platform.vertices().len(), (121 + 101) * 2);
        assert_eq!(platform.colors().len(), platform.vertices().len());
        assert_eq!(platform.fill().len(), 6);
        assert_eq!(platform.width(), 120.0);
        assert_eq!(platform.depth(), 100.0);
        assert_eq!(platform.height(), 0.0);
        assert_eq!(platform.bounding_box().center(), Vec3::ZERO);
    }

    #[test]
    fn test_first_line_is_major() {
        let platform = PlatformGeometry::default();
        let config = platform.config();
        assert_eq!(platform.colors()[0], config.color_major);
        // line 1 along X is minor, line 5 intermediate
        assert_eq!(platform.colors()[2], config.color_minor);
        assert_eq!(platform.colors()[10], config.color_intermediate);
    }

    #[test]
    fn test_oversized_config_builds_clamped_grid() {
        let platform = PlatformGeometry::new(PlatformConfig {
            width: u32::MAX,
            depth: 20,
            ..Default::default()
        });
        let max = tatlin_core::constants::PLATFORM_MAX_MM;
        assert_eq!(platform.config().width, max);
        assert_eq!(platform.vertices().len(), (max as usize + 1 + 21) * 2);
        assert_eq!(platform.width(), max as f32);
    }
}
