//! Affine operations on vertex arrays.
//!
//! Pure functions return a new buffer; the `_in_place` variants are what the
//! mutable geometry types use so large meshes are not copied on every edit.

use glam::{Mat3, Vec3};
use tracing::warn;

/// Axis lengths below this are treated as zero
const AXIS_EPSILON: f32 = 1e-6;

/// Return a copy of `vertices` offset by `(x, y, z)`
pub fn translate(vertices: &[Vec3], x: f32, y: f32, z: f32) -> Vec<Vec3> {
    let offset = Vec3::new(x, y, z);
    vertices.iter().map(|v| *v + offset).collect()
}

pub fn translate_in_place(vertices: &mut [Vec3], offset: Vec3) {
    for v in vertices.iter_mut() {
        *v += offset;
    }
}

/// Return a copy of `vertices` rotated by `angle` degrees about the axis `(x, y, z)`.
///
/// See [`rotation_matrix`] for axis handling and rotation direction.
pub fn rotate(vertices: &[Vec3], angle: f32, x: f32, y: f32, z: f32) -> Vec<Vec3> {
    let matrix = rotation_matrix(angle, Vec3::new(x, y, z));
    vertices.iter().map(|v| matrix * *v).collect()
}

pub fn rotate_in_place(vertices: &mut [Vec3], matrix: Mat3) {
    for v in vertices.iter_mut() {
        *v = matrix * *v;
    }
}

/// Rodrigues rotation matrix for `angle` degrees about `axis`.
///
/// The axis does not have to be unit length; it is normalized here. A zero
/// length or non-finite axis yields the identity matrix. Positive angles
/// rotate counter-clockwise when looking down the axis toward the origin.
///
/// The matrix is applied as `M * v`. Row-vector code that computes `v * M`
/// with the same matrix rotates the opposite way, so a +90 degree turn about
/// Z sends X to +Y here and to -Y there.
pub fn rotation_matrix(angle: f32, axis: Vec3) -> Mat3 {
    let length = axis.length();
    if !length.is_finite() || length < AXIS_EPSILON {
        warn!("Degenerate rotation axis {:?}, rotation skipped", axis);
        return Mat3::IDENTITY;
    }
    let Vec3 { x, y, z } = axis / length;

    let (s, c) = angle.to_radians().sin_cos();
    let cc = 1.0 - c;

    Mat3::from_cols(
        Vec3::new(x * x * cc + c, y * x * cc + z * s, x * z * cc - y * s),
        Vec3::new(x * y * cc - z * s, y * y * cc + c, y * z * cc + x * s),
        Vec3::new(x * z * cc + y * s, y * z * cc - x * s, z * z * cc + c),
    )
}
