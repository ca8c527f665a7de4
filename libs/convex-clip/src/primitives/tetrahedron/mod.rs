/// Tetrahedron primitive.
///
/// `p1`, `p2`, `p3` form the base and `p4` the apex; the winding of the
/// inputs does not matter because every face is rewound against the
/// centroid.


use crate::core::vec3::{triple_product, Vec3};
use crate::error::{ClipError, ClipResult};
use crate::face::Face;
use crate::polyhedron::Polyhedron;

/// Creates a tetrahedron from four corner points.
///
/// # Returns
/// A four-faced `Polyhedron`, or `InvalidPrimitive` when the points are
/// coplanar (zero volume) or not finite.
///
/// # Examples
/// ```
/// use convex_clip::primitives::tetrahedron;
/// use convex_clip::Vec3;
///
/// let t = tetrahedron(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z).unwrap();
/// assert_eq!(t.face_count(), 4);
/// assert!((t.volume() - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn tetrahedron(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> ClipResult<Polyhedron> {
    if ![p1, p2, p3, p4].iter().all(|p| p.is_finite()) {
        return Err(ClipError::InvalidPrimitive(
            "Tetrahedron vertices must be finite".to_string(),
        ));
    }
    if triple_product(p2 - p1, p3 - p1, p4 - p1) == 0.0 {
        return Err(ClipError::InvalidPrimitive(format!(
            "Tetrahedron vertices {p1}, {p2}, {p3}, {p4} are coplanar"
        )));
    }

    let center = (p1 + p2 + p3 + p4) * 0.25;

    let faces = [
        [p1, p2, p3], // base
        [p1, p3, p4],
        [p1, p4, p2],
        [p4, p3, p2],
    ]
    .into_iter()
    .map(|triangle| Face::oriented(triangle, center))
    .collect::<ClipResult<Vec<_>>>()?;

    Ok(Polyhedron::from_faces(faces))
}
