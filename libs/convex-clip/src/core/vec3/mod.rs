//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep the plane arithmetic readable while avoiding
//! direct dependencies on `glam` from higher layers.

pub use glam::DVec3 as Vec3;

/// Scalar triple product `u · (v × w)`.
///
/// Equals the determinant of the 3x3 matrix with rows `u`, `v`, `w`.
///
/// # Examples
/// ```
/// use convex_clip::core::vec3::{triple_product, Vec3};
/// assert_eq!(triple_product(Vec3::X, Vec3::Y, Vec3::Z), 1.0);
/// assert_eq!(triple_product(Vec3::Y, Vec3::X, Vec3::Z), -1.0);
/// ```
#[inline]
pub fn triple_product(u: Vec3, v: Vec3, w: Vec3) -> f64 {
    u.dot(v.cross(w))
}

/// Midpoint of the segment `a → b`.
///
/// # Examples
/// ```
/// use convex_clip::core::vec3::{midpoint, Vec3};
/// let m = midpoint(Vec3::ZERO, Vec3::new(2.0, 4.0, -6.0));
/// assert_eq!(m, Vec3::new(1.0, 2.0, -3.0));
/// ```
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
///
/// # Examples
/// ```
/// use convex_clip::core::vec3::{average, Vec3};
/// let pts = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
/// assert_eq!(average(pts.iter().copied()), Some(Vec3::new(1.0, 0.0, 0.0)));
/// assert_eq!(average(std::iter::empty()), None);
/// ```
pub fn average(points: impl IntoIterator<Item = Vec3>) -> Option<Vec3> {
    let (sum, count) = points
        .into_iter()
        .fold((Vec3::ZERO, 0usize), |(sum, count), p| (sum + p, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests;
