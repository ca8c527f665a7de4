/// Box and parallelepiped primitives.
///
/// Corners are named by which input corner each coordinate comes from:
/// `hlh` takes x from the high corner, y from the low corner and z from the
/// high corner.


use crate::core::vec3::{midpoint, Vec3};
use crate::error::{ClipError, ClipResult};
use crate::face::Face;
use crate::polyhedron::Polyhedron;

/// Creates an axis-aligned box spanning two opposite corners.
///
/// # Arguments
/// * `corner1` - One corner of the box
/// * `corner2` - The opposite corner
///
/// # Returns
/// A six-faced `Polyhedron`, or `InvalidPrimitive` when the corners share a
/// coordinate (zero thickness) or are not finite.
///
/// # Examples
/// ```
/// use convex_clip::primitives::cuboid;
/// use convex_clip::Vec3;
///
/// let b = cuboid(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 2.0, 3.0)).unwrap();
/// assert_eq!(b.face_count(), 6);
/// assert_eq!(b.bounding_box(), Some((Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 2.0, 3.0))));
/// ```
pub fn cuboid(corner1: Vec3, corner2: Vec3) -> ClipResult<Polyhedron> {
    skewed_cuboid(corner1, corner2, Vec3::ZERO)
}

/// Creates a parallelepiped: a box whose `corner2.y` layer is shifted by
/// `skew`.
///
/// Shifting a whole layer keeps every face planar, so the result is still
/// convex with six quadrilateral faces.
///
/// # Examples
/// ```
/// use convex_clip::primitives::skewed_cuboid;
/// use convex_clip::Vec3;
///
/// let p = skewed_cuboid(Vec3::splat(-2.0), Vec3::splat(2.0), Vec3::new(-2.5, 0.0, 0.0)).unwrap();
/// assert!((p.volume() - 64.0).abs() < 1e-9);
/// ```
pub fn skewed_cuboid(corner1: Vec3, corner2: Vec3, skew: Vec3) -> ClipResult<Polyhedron> {
    validate(corner1, corner2, skew)?;

    let corner = |x_high: bool, y_high: bool, z_high: bool| {
        let pick = |high: bool, low: f64, hi: f64| if high { hi } else { low };
        let base = Vec3::new(
            pick(x_high, corner1.x, corner2.x),
            pick(y_high, corner1.y, corner2.y),
            pick(z_high, corner1.z, corner2.z),
        );
        if y_high {
            base + skew
        } else {
            base
        }
    };

    let hhh = corner(true, true, true);
    let hhl = corner(true, true, false);
    let hlh = corner(true, false, true);
    let hll = corner(true, false, false);
    let lhh = corner(false, true, true);
    let lhl = corner(false, true, false);
    let llh = corner(false, false, true);
    let lll = corner(false, false, false);

    // Half of the corners carry the skew, so the vertex average moves by half.
    let center = midpoint(corner1, corner2) + skew * 0.5;

    let faces = [
        [hhh, hhl, lhl, lhh], // top (y = corner2.y)
        [hlh, hll, lll, llh], // bottom (y = corner1.y)
        [hll, hhl, hhh, hlh], // x = corner2.x
        [lll, lhl, lhh, llh], // x = corner1.x
        [hhh, hlh, llh, lhh], // z = corner2.z
        [hhl, hll, lll, lhl], // z = corner1.z
    ]
    .into_iter()
    .map(|quad| Face::oriented(quad, center))
    .collect::<ClipResult<Vec<_>>>()?;

    Ok(Polyhedron::from_faces(faces))
}

fn validate(corner1: Vec3, corner2: Vec3, skew: Vec3) -> ClipResult<()> {
    if !corner1.is_finite() || !corner2.is_finite() || !skew.is_finite() {
        return Err(ClipError::InvalidPrimitive(
            "Box corners and skew must be finite".to_string(),
        ));
    }
    let extent = corner2 - corner1;
    if extent.x == 0.0 || extent.y == 0.0 || extent.z == 0.0 {
        return Err(ClipError::InvalidPrimitive(format!(
            "Box corners {corner1} and {corner2} must differ on every axis"
        )));
    }
    Ok(())
}
