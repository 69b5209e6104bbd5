//! # Mesh Geometry
//!
//! Triangulated solid models (STL and similar) held as flat vertex and
//! normal buffers, with in-place scale, translate and rotate edits.

use super::bounds::BoundingBox;
use super::geometry::{BoundsCache, Geometry};
use crate::math::vector::{rotate_in_place, rotation_matrix, translate_in_place};
use glam::Vec3;
use std::time::Instant;
use tatlin_core::GeometryError;
use tracing::{debug, info, warn};

/// Principal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A triangulated mesh for visualization
#[derive(Debug, Clone)]
pub struct MeshGeometry {
    /// Three vertices per triangle
    vertices: Vec<Vec3>,
    /// One normal per vertex, parallel to `vertices`
    normals: Vec<Vec3>,
    /// Cumulative uniform scale relative to the loaded data
    scaling_factor: f32,
    /// Absolute rotation per principal axis in degrees, see [`MeshGeometry::set_rotation`]
    rotation: [f32; 3],
    bounds: BoundsCache,
}

impl MeshGeometry {
    /// Create a mesh from already triangulated data
    pub fn new(vertices: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self, GeometryError> {
        let t_start = Instant::now();

        if vertices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangles {
                vertices: vertices.len(),
            });
        }
        if normals.len() != vertices.len() {
            return Err(GeometryError::NormalCountMismatch {
                vertices: vertices.len(),
                normals: normals.len(),
            });
        }

        let mesh = Self {
            vertices,
            normals,
            scaling_factor: 1.0,
            rotation: [0.0; 3],
            bounds: BoundsCache::new(),
        };

        info!(
            "Initialized mesh geometry in {:.2} seconds",
            t_start.elapsed().as_secs_f64()
        );
        info!("Vertex count: {}", mesh.vertices.len());

        Ok(mesh)
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn scaling_factor(&self) -> f32 {
        self.scaling_factor
    }

    /// Scale to `factor` times the loaded size.
    ///
    /// The factor is absolute: the vertices are rescaled by `factor / scaling_factor`,
    /// so `scale(2.0)` followed by `scale(1.0)` restores the original coordinates.
    /// Non-positive or non-finite factors are ignored.
    pub fn scale(&mut self, factor: f32) {
        if factor == self.scaling_factor {
            return;
        }
        if !factor.is_finite() || factor <= 0.0 {
            warn!("Ignoring invalid scaling factor {}", factor);
            return;
        }

        let ratio = factor / self.scaling_factor;
        debug!("Scaling mesh vertices by {} (factor {})", ratio, factor);
        for v in self.vertices.iter_mut() {
            *v *= ratio;
        }
        self.scaling_factor = factor;
        self.bounds.invalidate();
    }

    /// Move every vertex by `(x, y, z)`. Non-finite offsets are ignored.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        let offset = Vec3::new(x, y, z);
        if !offset.is_finite() {
            warn!("Ignoring non-finite mesh offset {:?}", offset);
            return;
        }
        translate_in_place(&mut self.vertices, offset);
        self.bounds.invalidate();
    }

    /// Rotate by `angle` degrees about the axis `(x, y, z)`.
    ///
    /// Normals are rotated with the vertices so lighting stays correct.
    /// Non-finite angles are ignored.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) {
        if !angle.is_finite() {
            warn!("Ignoring non-finite rotation angle {}", angle);
            return;
        }
        debug!("Rotating mesh by {} degrees about ({}, {}, {})", angle, x, y, z);
        let matrix = rotation_matrix(angle, Vec3::new(x, y, z));
        rotate_in_place(&mut self.vertices, matrix);
        rotate_in_place(&mut self.normals, matrix);
        self.bounds.invalidate();
    }

    /// Absolute rotation about a principal axis, as last set by [`MeshGeometry::set_rotation`]
    pub fn rotation(&self, axis: Axis) -> f32 {
        self.rotation[axis.index()]
    }

    /// Rotate about a principal axis to an absolute angle.
    ///
    /// Only the difference to the current angle is applied. Rotations made
    /// through [`MeshGeometry::rotate`] are not tracked here. A non-finite
    /// angle leaves both the mesh and the stored angle unchanged.
    pub fn set_rotation(&mut self, axis: Axis, angle: f32) {
        if !angle.is_finite() {
            warn!("Ignoring non-finite {:?} rotation {}", axis, angle);
            return;
        }
        let delta = angle - self.rotation[axis.index()];
        if delta == 0.0 {
            return;
        }
        let unit = axis.unit();
        self.rotate(delta, unit.x, unit.y, unit.z);
        self.rotation[axis.index()] = angle;
    }

    /// Move the mesh so it is centred on the origin in X/Y and rests on Z = 0.
    pub fn center_on_platform(&mut self) {
        if self.is_empty() {
            return;
        }
        let bbox = self.bounding_box();
        let center = bbox.center();
        let floor = bbox.lower_corner().z;
        self.translate(-center.x, -center.y, -floor);
    }
}

impl Geometry for MeshGeometry {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds.get_or_compute(&self.vertices)
    }
}
