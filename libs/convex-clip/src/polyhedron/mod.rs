//! # Polyhedron
//!
//! Closed convex solid stored as an unordered list of [`Face`]s, and the
//! Boolean intersection of two such solids.
//!
//! ## Algorithm
//!
//! ```text
//! working = self
//! for cutter in other.faces:
//!     body = [f.clip_face(cutter) for f in working]      // trim every face
//!     cap  = cutter clipped by every face of working     // close the cut
//!     working = body + cap
//!     if working has <= 2 faces: no intersection
//! ```
//!
//! The body pass and the cap pass read the same inputs and write separate
//! outputs, so they run on the `rayon` pool for large polyhedra.

use std::fmt;

use config::constants::MIN_SOLID_FACES;
use tracing::{debug, trace};

use crate::config::ClipConfig;
use crate::core::plane::Plane;
use crate::core::vec3::{average, Vec3};
use crate::error::ClipResult;
use crate::face::Face;

use rayon::prelude::*;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Convex solid bounded by planar faces.
///
/// ## Invariants
///
/// - Every face is wound so its normal points away from the solid
/// - A geometrically valid solid has at least 4 faces
///
/// ## Example
///
/// ```rust
/// use convex_clip::{cuboid, Vec3};
///
/// let a = cuboid(Vec3::splat(-2.0), Vec3::splat(2.0)).unwrap();
/// let b = cuboid(Vec3::splat(1.0), Vec3::splat(3.0)).unwrap();
///
/// let overlap = a.clip(&b).unwrap().expect("cubes overlap");
/// assert_eq!(overlap.face_count(), 6);
/// assert_eq!(overlap.unique_vertices().len(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    faces: Vec<Face>,
}

impl Polyhedron {
    /// Creates an empty polyhedron.
    pub fn new() -> Self {
        Self {
            faces: Vec::with_capacity(8),
        }
    }

    /// Creates a polyhedron from already oriented faces.
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Appends a face.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true when there are no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face at `index`, if any.
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// All faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns true when the face count is too small to close a solid.
    fn is_degenerate(&self) -> bool {
        self.faces.len() < MIN_SOLID_FACES
    }

    // =========================================================================
    // INTERSECTION
    // =========================================================================

    /// Intersection of `self` and `other` with the default configuration.
    ///
    /// Returns `Ok(None)` when the solids do not overlap.
    pub fn clip(&self, other: &Polyhedron) -> ClipResult<Option<Polyhedron>> {
        self.clip_with(other, &ClipConfig::default())
    }

    /// Intersection of `self` and `other`.
    ///
    /// Every face of `other` cuts the running result in turn. Once fewer than
    /// three faces survive, the intersection is empty and stays empty, so the
    /// remaining cutters are skipped.
    pub fn clip_with(
        &self,
        other: &Polyhedron,
        config: &ClipConfig,
    ) -> ClipResult<Option<Polyhedron>> {
        debug!(
            faces = self.face_count(),
            cutters = other.face_count(),
            "clipping polyhedron"
        );

        if self.is_degenerate() {
            debug!("input has too few faces, no intersection");
            return Ok(None);
        }

        let mut working = self.clone();
        for (index, cutter) in other.faces.iter().enumerate() {
            working = working.clip_by_face_with(cutter, config)?;
            trace!(cutter = index, faces = working.face_count(), "applied cut");

            if working.is_degenerate() {
                debug!(cutter = index, "intersection collapsed, no intersection");
                return Ok(None);
            }
        }

        debug!(faces = working.face_count(), "intersection complete");
        Ok(Some(working))
    }

    /// Clips this polyhedron to the half-space of `cutting`.
    ///
    /// The result holds every face trimmed to the half-space plus, when the
    /// plane actually cuts through the solid, the capping face that closes the
    /// cut. The result may have fewer than 4 faces; [`Polyhedron::clip`] is
    /// the call that turns such results into "no intersection".
    pub fn clip_by_face(&self, cutting: &Face) -> ClipResult<Polyhedron> {
        self.clip_by_face_with(cutting, &ClipConfig::default())
    }

    /// [`Polyhedron::clip_by_face`] with an explicit configuration.
    pub fn clip_by_face_with(&self, cutting: &Face, config: &ClipConfig) -> ClipResult<Polyhedron> {
        let plane = cutting.plane()?;

        let (body, cap) = if config.use_parallel(self.faces.len()) {
            rayon::join(
                || self.body_pass(&plane, true),
                || self.cap_pass(cutting),
            )
        } else {
            (self.body_pass(&plane, false), self.cap_pass(cutting))
        };
        let mut faces = body;

        if let Some(cap) = cap? {
            // A trimmed face already on the cutting plane means nothing was cut.
            if faces.iter().any(|face| face.lies_on(&plane, config.tolerance)) {
                trace!("cutting plane coincides with an existing face, cap skipped");
            } else {
                faces.push(cap);
            }
        }

        Ok(Polyhedron { faces })
    }

    /// Trims every face to the half-space, dropping faces clipped away.
    fn body_pass(&self, plane: &Plane, parallel: bool) -> Vec<Face> {
        if parallel {
            self.faces
                .par_iter()
                .filter_map(|face| face.clip_to_plane(plane))
                .collect()
        } else {
            self.faces
                .iter()
                .filter_map(|face| face.clip_to_plane(plane))
                .collect()
        }
    }

    /// Shrinks the cutting face to the patch inside every face of `self`.
    fn cap_pass(&self, cutting: &Face) -> ClipResult<Option<Face>> {
        let mut cap = cutting.clone();
        for face in &self.faces {
            match cap.clip_face(face)? {
                Some(next) => cap = next,
                None => return Ok(None),
            }
        }
        Ok(Some(cap))
    }

    // =========================================================================
    // MEASUREMENTS
    // =========================================================================

    /// Distinct vertices over all faces, in first-seen order.
    pub fn unique_vertices(&self) -> Vec<Vec3> {
        let mut unique: Vec<Vec3> = Vec::new();
        for v in self.faces.iter().flat_map(Face::vertices) {
            if !unique.contains(v) {
                unique.push(*v);
            }
        }
        unique
    }

    /// Axis-aligned bounding box `(min, max)`, or `None` without vertices.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut vertices = self.faces.iter().flat_map(Face::vertices);
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))))
    }

    /// Enclosed volume via the divergence theorem.
    ///
    /// Positive for outward-wound faces.
    pub fn volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|face| {
                let vertices = face.vertices();
                let Some(&origin) = vertices.first() else {
                    return 0.0;
                };
                vertices
                    .windows(2)
                    .skip(1)
                    .map(|pair| origin.dot(pair[0].cross(pair[1])))
                    .sum::<f64>()
            })
            .sum::<f64>()
            / 6.0
    }

    /// Average of the distinct vertices; lies inside a convex solid.
    pub fn centroid(&self) -> Option<Vec3> {
        average(self.unique_vertices())
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Polyhedron(faces=[")?;
        for (i, face) in self.faces.iter().enumerate() {
            let separator = if i + 1 < self.faces.len() { "," } else { "" };
            writeln!(f, "\t{face}{separator}")?;
        }
        write!(f, "])")
    }
}
