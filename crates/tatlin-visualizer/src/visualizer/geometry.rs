//! Shared contract for renderable geometry.

use super::bounds::BoundingBox;
use glam::{Mat4, Vec3};
use std::cell::OnceCell;

/// How the active view presents geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Orthographic 2D view: one layer at a time, Z discarded
    Flat,
    /// Perspective 3D view: all layers up to the selected one
    Volumetric,
}

/// Geometry that owns a vertex buffer and can report its bounds.
pub trait Geometry {
    fn vertices(&self) -> &[Vec3];

    /// Bounding box of the current vertex buffer, computed on first access
    /// after construction or the last mutation.
    fn bounding_box(&self) -> BoundingBox;

    /// Transform applied on top of the view transform when drawing.
    fn model_transform(&self, _mode: RenderMode) -> Mat4 {
        Mat4::IDENTITY
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn width(&self) -> f32 {
        self.bounding_box().width()
    }

    fn depth(&self) -> f32 {
        self.bounding_box().depth()
    }

    fn height(&self) -> f32 {
        self.bounding_box().height()
    }

    /// Vertex buffer as raw bytes for upload, tightly packed `f32` triples.
    fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }
}

/// Lazily computed bounding box.
///
/// Either holds the box for the current vertex buffer or nothing. Every
/// mutating entry point of a geometry type must call [`BoundsCache::invalidate`]
/// before returning.
#[derive(Debug, Clone, Default)]
pub struct BoundsCache {
    cached: OnceCell<BoundingBox>,
}

impl BoundsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, vertices: &[Vec3]) -> BoundingBox {
        *self
            .cached
            .get_or_init(|| BoundingBox::from_vertices(vertices))
    }

    pub fn invalidate(&mut self) {
        self.cached.take();
    }

    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }
}
