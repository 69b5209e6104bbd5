//! Axis-aligned bounding boxes for geometry buffers.

use glam::Vec3;
use tatlin_core::constants::EXTENT_DECIMALS;
use tracing::trace;

/// Rectangular box (cuboid) enclosing a model, defined by its lower and upper corners.
///
/// Only constructible from a vertex buffer, so `upper_corner >= lower_corner`
/// holds on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    upper_corner: Vec3,
    lower_corner: Vec3,
}

impl BoundingBox {
    /// Compute the box enclosing `vertices`.
    ///
    /// Each axis is reduced independently. An empty buffer gives a zero-size
    /// box at the origin.
    pub fn from_vertices(vertices: &[Vec3]) -> Self {
        if vertices.is_empty() {
            trace!("Bounding box of empty vertex buffer, using zero-size box");
            return Self {
                upper_corner: Vec3::ZERO,
                lower_corner: Vec3::ZERO,
            };
        }

        let (lower_corner, upper_corner) = vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(*v), hi.max(*v)),
        );

        Self {
            upper_corner,
            lower_corner,
        }
    }

    pub fn upper_corner(&self) -> Vec3 {
        self.upper_corner
    }

    pub fn lower_corner(&self) -> Vec3 {
        self.lower_corner
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        round_extent(self.upper_corner.x - self.lower_corner.x)
    }

    /// Extent along Y
    pub fn depth(&self) -> f32 {
        round_extent(self.upper_corner.y - self.lower_corner.y)
    }

    /// Extent along Z
    pub fn height(&self) -> f32 {
        round_extent(self.upper_corner.z - self.lower_corner.z)
    }

    /// Unrounded per-axis extent
    pub fn size(&self) -> Vec3 {
        self.upper_corner - self.lower_corner
    }

    pub fn center(&self) -> Vec3 {
        (self.upper_corner + self.lower_corner) * 0.5
    }
}

fn round_extent(value: f32) -> f32 {
    let scale = 10f32.powi(EXTENT_DECIMALS);
    (value.abs() * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_from_mixed_vertices() {
        let bbox = BoundingBox::from_vertices(&[
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-1.0, 5.0, 0.0),
            Vec3::new(0.5, 0.0, 7.5),
        ]);
        assert_eq!(bbox.lower_corner(), Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bbox.upper_corner(), Vec3::new(1.0, 5.0, 7.5));
        assert_eq!(bbox.width(), 2.0);
        assert_eq!(bbox.depth(), 7.0);
        assert_eq!(bbox.height(), 7.5);
        assert_eq!(bbox.center(), Vec3::new(0.0, 1.5, 3.75));
    }

    #[test]
    fn test_extents_round_to_two_places() {
        let bbox = BoundingBox::from_vertices(&[Vec3::ZERO, Vec3::new(1.23456, 0.005, 9.999)]);
        assert!((bbox.width() - 1.23).abs() < 1e-6);
        assert!((bbox.height() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_buffer_is_zero_box() {
        let bbox = BoundingBox::from_vertices(&[]);
        assert_eq!(bbox.size(), Vec3::ZERO);
        assert_eq!(bbox.width(), 0.0);
    }

    #[test]
    fn test_single_vertex_has_zero_extent() {
        let bbox = BoundingBox::from_vertices(&[Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(bbox.lower_corner(), bbox.upper_corner());
        assert_eq!(bbox.height(), 0.0);
    }
}
