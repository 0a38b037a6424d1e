//! Vector math
//!
//! Positions and directions are plain `glam::Vec3` values. Arithmetic
//! (`+`, `-`, `* f32`), `length()` and `distance()` come straight from glam;
//! this module adds the few operations the simulation needs on top.

use glam::Vec3;

/// 3D vector used throughout the simulation
pub type Vector3 = Vec3;

/// Normalize `v`, returning the zero vector when `v` has zero length
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    let len = v.length();
    if len == 0.0 {
        return Vector3::ZERO;
    }
    v / len
}

/// Distance between two points
#[inline]
pub fn distance(a: Vector3, b: Vector3) -> f32 {
    (a - b).length()
}

/// Rotate a camera-local direction into world space around the Y axis
///
/// `x' = x·cosθ − z·sinθ`, `z' = x·sinθ + z·cosθ`. The Y component is kept.
#[inline]
pub fn rotate_by_yaw(v: Vector3, yaw: f32) -> Vector3 {
    let (sin, cos) = yaw.sin_cos();
    Vector3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

/// Flatten a slice of vectors into `[x, y, z, x, y, z, ...]`
pub fn flatten(points: &[Vector3]) -> Vec<f32> {
    bytemuck::cast_slice::<Vector3, f32>(points).to_vec()
}
