//! 3-vector algebra for rotating frames
//!
//! Cross products and angular momentum on the first three components of
//! position and momentum slices.

use nalgebra::Vector3;

/// First three components of a slice as a Vector3
///
/// Panics if `v` has fewer than three entries.
#[inline]
pub fn vec3(v: &[f64]) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

/// Cross product a × b
///
/// ```text
/// (a × b)ₓ = a_y b_z − a_z b_y
/// (a × b)_y = −aₓ b_z + a_z bₓ
/// (a × b)_z = aₓ b_y − a_y bₓ
/// ```
#[inline]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}

/// Angular momentum L = q × p
///
/// Uses only the first three entries of `q` and `p`.
#[inline]
pub fn angular_momentum(q: &[f64], p: &[f64]) -> Vector3<f64> {
    cross(&vec3(q), &vec3(p))
}

/// Accumulate a 3-vector into the first three slots of `out`
#[inline]
pub fn add_assign3(out: &mut [f64], v: &Vector3<f64>) {
    out[0] += v.x;
    out[1] += v.y;
    out[2] += v.z;
}
