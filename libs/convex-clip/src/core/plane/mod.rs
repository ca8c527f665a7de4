//! # Plane
//!
//! The plane through three ordered points, used as the half-space of a face.
//!
//! The winding of the three points fixes the orientation: the normal
//! `(b - a) × (c - a)` points to the *outside*, and the closed half-space on
//! the other side (signed distance `<= 0`) is the *inside*.

use super::vec3::{midpoint, triple_product, Vec3};

/// Oriented plane through three points `a`, `b`, `c`.
///
/// # Examples
/// ```
/// use convex_clip::core::plane::Plane;
/// use convex_clip::Vec3;
///
/// // Counter-clockwise seen from +Z: normal points up, inside is below.
/// let plane = Plane::through(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert!(plane.is_inside(Vec3::new(0.2, 0.2, -1.0)));
/// assert!(!plane.is_inside(Vec3::new(0.2, 0.2, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    a: Vec3,
    b: Vec3,
    c: Vec3,
}

impl Plane {
    /// Creates the plane through `a`, `b`, `c` in that winding order.
    pub fn through(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Signed scalar proportional to the distance of `point` from the plane.
    ///
    /// Computed as the scalar triple product of `(b - point, c - point,
    /// point - a)`, which equals `normal() · (point - a)`. Positive values are
    /// outside, negative values inside.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        triple_product(self.b - point, self.c - point, point - self.a)
    }

    /// Closed half-space test: points on the plane count as inside.
    #[inline]
    pub fn is_inside(&self, point: Vec3) -> bool {
        self.signed_distance(point) <= 0.0
    }

    /// Un-normalized outward normal `(b - a) × (c - a)`.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Euclidean signed distance of `point` from the plane.
    ///
    /// Returns `None` when the three defining points are collinear.
    pub fn distance(&self, point: Vec3) -> Option<f64> {
        let length = self.normal().length();
        (length > 0.0).then(|| self.signed_distance(point) / length)
    }

    /// Point where the segment `p1 → p2` crosses the plane.
    ///
    /// Interpolates with `t = -d1 / (d2 - d1)`. When the two signed distances
    /// compare equal the segment is parallel to (or lies in) the plane and the
    /// midpoint is returned instead.
    ///
    /// An endpoint lying exactly on the plane is returned as-is rather than
    /// through the formula. `p1 + (p2 - p1) * 1.0` can land one ulp away from
    /// `p2`, which would defeat exact vertex de-duplication.
    ///
    /// # Examples
    /// ```
    /// use convex_clip::core::plane::Plane;
    /// use convex_clip::Vec3;
    ///
    /// let plane = Plane::through(Vec3::ZERO, Vec3::X, Vec3::Y);
    /// let hit = plane.intersect(Vec3::new(1.0, 1.0, -1.0), Vec3::new(1.0, 1.0, 3.0));
    /// assert_eq!(hit, Vec3::new(1.0, 1.0, 0.0));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn intersect(&self, p1: Vec3, p2: Vec3) -> Vec3 {
        let d1 = self.signed_distance(p1);
        let d2 = self.signed_distance(p2);
        if d1 == d2 {
            return midpoint(p1, p2);
        }
        if d1 == 0.0 {
            return p1;
        }
        if d2 == 0.0 {
            return p2;
        }
        let t = -d1 / (d2 - d1);
        p1 + (p2 - p1) * t
    }

    /// The same plane with the opposite orientation.
    pub fn flipped(&self) -> Self {
        Self::through(self.a, self.c, self.b)
    }

    /// The three defining points in winding order.
    pub fn points(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}
