use glam::{Mat4, Vec3};
use tracing::warn;

/// Fixed-function style matrix stack.
///
/// Every operation post-multiplies the current matrix, so the transform issued
/// last is the first one applied to a vertex.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed matrix. Popping an empty stack resets to identity.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => {
                warn!("Matrix stack underflow, loading identity");
                self.current = Mat4::IDENTITY;
            }
        }
    }

    pub fn load_identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    pub fn load(&mut self, matrix: Mat4) {
        self.current = matrix;
    }

    pub fn multiply(&mut self, matrix: Mat4) {
        self.current *= matrix;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(Mat4::from_translation(Vec3::new(x, y, z)));
    }

    /// Rotate by `angle` degrees about `(x, y, z)`
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) {
        let rotation = super::vector::rotation_matrix(angle, Vec3::new(x, y, z));
        self.multiply(Mat4::from_mat3(rotation));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(Mat4::from_scale(Vec3::new(x, y, z)));
    }
}
