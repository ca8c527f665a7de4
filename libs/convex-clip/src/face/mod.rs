//! # Face
//!
//! A planar convex polygon that doubles as the closed half-space behind its
//! plane.
//!
//! ## Orientation
//!
//! Vertices wind counter-clockwise when seen from outside the solid, so the
//! normal `(b - a) × (c - a)` of the face's plane points outward and
//! `is_inside` means "on the solid side". Faces built by the primitive
//! creators are oriented once with [`Face::rewind`]; faces produced by
//! clipping inherit both orientation and plane from the face they were cut
//! from.
//!
//! ## Plane
//!
//! A face built from vertices takes the plane through vertex 0 and the two
//! later vertices spanning the widest triangle with it. For a face whose
//! first three vertices are not collinear and of equal spread this is the
//! plane through those three. A clipped face keeps its parent's plane, since
//! rounded intersection points can make its own leading vertices collinear.
//!
//! ## Clipping
//!
//! [`Face::clip_face`] is one Sutherland–Hodgman step against another face's
//! half-space:
//!
//! | start inside | end inside | emitted |
//! |---|---|---|
//! | no | yes | intersection, end |
//! | yes | yes | end |
//! | yes | no | intersection |
//! | no | no | nothing |

use std::fmt;

use config::constants::MIN_FACE_VERTICES;
use tracing::trace;

use crate::core::plane::Plane;
use crate::core::vec3::{average, Vec3};
use crate::error::{ClipError, ClipResult};

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Ordered, winding-consistent convex polygon in 3D.
///
/// ## Invariants
///
/// - No two vertices compare equal (exact component equality)
/// - Plane queries need 3 vertices that are not all collinear
/// - After `rewind(interior)`, `is_inside(interior)` holds
///
/// ## Example
///
/// ```rust
/// use convex_clip::{Face, Vec3};
///
/// let mut face = Face::new();
/// face.add_vertex(Vec3::new(0.0, 0.0, 0.0));
/// face.add_vertex(Vec3::new(1.0, 0.0, 0.0));
/// face.add_vertex(Vec3::new(0.0, 1.0, 0.0));
/// face.add_vertex(Vec3::new(1.0, 0.0, 0.0)); // duplicate, skipped
/// assert_eq!(face.vertex_count(), 3);
///
/// face.rewind(Vec3::new(0.2, 0.2, -1.0)).unwrap();
/// assert!(face.is_inside(Vec3::new(0.2, 0.2, -1.0)).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Face {
    vertices: Vec<Vec3>,
    /// Plane of the face this one was clipped from, if any.
    support: Option<Plane>,
}

/// Faces compare by their vertex sequence only.
impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Face {
    /// Creates an empty face.
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(6),
            support: None,
        }
    }

    /// Builds a face from `vertices` and orients it against `interior`.
    ///
    /// Duplicates are dropped as with [`Face::add_vertex`]. Fails with
    /// [`ClipError::DegenerateFace`] when fewer than 3 distinct vertices
    /// remain.
    pub fn oriented(vertices: impl IntoIterator<Item = Vec3>, interior: Vec3) -> ClipResult<Self> {
        let mut face = Self::new();
        for vertex in vertices {
            face.add_vertex(vertex);
        }
        face.rewind(interior)?;
        face.support = Some(face.spanning_plane()?);
        Ok(face)
    }

    /// Appends `vertex` unless an equal vertex is already present.
    ///
    /// A new vertex discards any inherited plane; the plane is derived from
    /// the vertices again.
    pub fn add_vertex(&mut self, vertex: Vec3) {
        if !self.vertices.contains(&vertex) {
            self.vertices.push(vertex);
            self.support = None;
        }
    }

    /// Number of vertices (and edges).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true when the face has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`, if any.
    pub fn vertex(&self, index: usize) -> Option<&Vec3> {
        self.vertices.get(index)
    }

    /// All vertices in winding order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Start of edge `index`, i.e. vertex `index`.
    pub fn edge_start(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// End of edge `index`, i.e. vertex `(index + 1) mod N`.
    ///
    /// The last edge wraps back to vertex 0, closing the polygon.
    pub fn edge_end(&self, index: usize) -> Option<Vec3> {
        if index >= self.vertices.len() {
            return None;
        }
        self.vertices.get((index + 1) % self.vertices.len()).copied()
    }

    /// Iterates the closed boundary as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    // =========================================================================
    // HALF-SPACE QUERIES
    // =========================================================================

    /// Plane of this face: the inherited one, or one spanned by the vertices.
    ///
    /// Fails with [`ClipError::DegenerateFace`] when there are fewer than 3
    /// vertices or all of them are collinear.
    pub fn plane(&self) -> ClipResult<Plane> {
        match self.support {
            Some(plane) => Ok(plane),
            None => self.spanning_plane(),
        }
    }

    /// Plane through vertex 0 and the later pair spanning the widest
    /// triangle with it. Ties keep the earliest pair.
    fn spanning_plane(&self) -> ClipResult<Plane> {
        let degenerate = || ClipError::DegenerateFace {
            vertices: self.vertices.len(),
        };
        let (&origin, rest) = self.vertices.split_first().ok_or_else(degenerate)?;

        let mut widest = (0.0, origin, origin);
        for (j, &b) in rest.iter().enumerate() {
            for &c in &rest[j + 1..] {
                let spread = (b - origin).cross(c - origin).length_squared();
                if spread > widest.0 {
                    widest = (spread, b, c);
                }
            }
        }

        match widest {
            (spread, b, c) if spread > 0.0 => Ok(Plane::through(origin, b, c)),
            _ => Err(degenerate()),
        }
    }

    /// Signed scalar proportional to the distance of `point` from the plane.
    ///
    /// Positive is outside, zero is on the plane, negative is inside.
    pub fn plane_signed_distance(&self, point: Vec3) -> ClipResult<f64> {
        Ok(self.plane()?.signed_distance(point))
    }

    /// Returns true when `point` lies in the closed half-space of this face.
    pub fn is_inside(&self, point: Vec3) -> ClipResult<bool> {
        Ok(self.plane()?.is_inside(point))
    }

    /// Un-normalized outward normal of the plane.
    pub fn normal(&self) -> ClipResult<Vec3> {
        Ok(self.plane()?.normal())
    }

    /// Reverses the winding if `interior` is classified outside.
    ///
    /// Call once after all vertices have been added and before the face takes
    /// part in any clip.
    pub fn rewind(&mut self, interior: Vec3) -> ClipResult<()> {
        if !self.is_inside(interior)? {
            trace!(?interior, "interior point outside face, reversing winding");
            self.vertices.reverse();
            self.support = self.support.map(|plane| plane.flipped());
        }
        Ok(())
    }

    /// Point where the segment `p1 → p2` crosses this face's plane.
    ///
    /// Falls back to the midpoint when both signed distances are equal.
    pub fn intersect(&self, p1: Vec3, p2: Vec3) -> ClipResult<Vec3> {
        Ok(self.plane()?.intersect(p1, p2))
    }

    /// Returns true when this face lies on `other`'s plane, facing the same
    /// way, with every vertex within `tolerance` of the plane.
    pub fn is_coplanar_with(&self, other: &Face, tolerance: f64) -> ClipResult<bool> {
        Ok(self.lies_on(&other.plane()?, tolerance))
    }

    /// Same test as [`Face::is_coplanar_with`] against a derived plane.
    ///
    /// Degenerate faces never lie on a plane.
    pub(crate) fn lies_on(&self, plane: &Plane, tolerance: f64) -> bool {
        let facing = self
            .plane()
            .is_ok_and(|own| own.normal().dot(plane.normal()) > 0.0);
        facing
            && self.vertices.iter().all(|v| {
                plane
                    .distance(*v)
                    .is_some_and(|distance| distance.abs() <= tolerance)
            })
    }

    // =========================================================================
    // CLIPPING
    // =========================================================================

    /// Clips this face to the half-space of `clipping`.
    ///
    /// Returns `None` when fewer than 3 vertices survive, i.e. the face lies
    /// entirely outside or only touches the plane. Neither face is modified.
    pub fn clip_face(&self, clipping: &Face) -> ClipResult<Option<Face>> {
        Ok(self.clip_to_plane(&clipping.plane()?))
    }

    /// Sutherland–Hodgman step against an already derived plane.
    ///
    /// The result lies on this face's plane and keeps it.
    pub(crate) fn clip_to_plane(&self, plane: &Plane) -> Option<Face> {
        let mut clipped = Face::new();

        for (start, end) in self.edges() {
            let start_inside = plane.is_inside(start);
            let end_inside = plane.is_inside(end);

            match (start_inside, end_inside) {
                // Entering: first inside point is the crossing, then the end.
                (false, true) => {
                    clipped.add_vertex(plane.intersect(start, end));
                    clipped.add_vertex(end);
                }
                // Start was already emitted as the previous edge's end.
                (true, true) => clipped.add_vertex(end),
                // Leaving: keep the crossing only.
                (true, false) => clipped.add_vertex(plane.intersect(start, end)),
                (false, false) => {}
            }
        }

        trace!(
            before = self.vertex_count(),
            after = clipped.vertex_count(),
            "clipped face"
        );
        clipped.support = self.plane().ok();
        clipped.into_valid()
    }

    fn into_valid(self) -> Option<Face> {
        (self.vertices.len() >= MIN_FACE_VERTICES).then_some(self)
    }

    // =========================================================================
    // MEASUREMENTS
    // =========================================================================

    /// Average of the vertices, or `None` for an empty face.
    pub fn centroid(&self) -> Option<Vec3> {
        average(self.vertices.iter().copied())
    }

    /// Area of the polygon (fan triangulation from vertex 0).
    pub fn area(&self) -> f64 {
        let Some(&origin) = self.vertices.first() else {
            return 0.0;
        };
        let doubled = self
            .vertices
            .windows(2)
            .skip(1)
            .fold(Vec3::ZERO, |acc, pair| {
                acc + (pair[0] - origin).cross(pair[1] - origin)
            });
        0.5 * doubled.length()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face([")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {}, {})", v.x, v.y, v.z)?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests;
