//! # Error Types
//!
//! Error types for clipping operations. Only genuine precondition violations
//! are errors; an empty intersection is a normal outcome and is reported as
//! `None` by the clipping API.
//!
//! ## Error Policy
//!
//! - Plane queries on faces that do not span a plane fail fast
//! - Creators reject inputs that do not span a solid
//! - Errors include context for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during clipping operations.
///
/// ## Example
///
/// ```rust
/// use convex_clip::{ClipError, Face, Vec3};
///
/// let mut face = Face::new();
/// face.add_vertex(Vec3::ZERO);
/// face.add_vertex(Vec3::X);
///
/// match face.is_inside(Vec3::Y) {
///     Err(ClipError::DegenerateFace { vertices }) => assert_eq!(vertices, 2),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// A plane query was attempted on a face that cannot define a plane.
    ///
    /// Raised for fewer than 3 vertices or all vertices collinear. Contains
    /// the number of vertices the face actually has.
    #[error("Face with {vertices} vertices does not span a plane")]
    DegenerateFace {
        /// Number of distinct vertices in the offending face
        vertices: usize,
    },

    /// Primitive creator inputs do not span a three-dimensional solid.
    ///
    /// Contains description of what went wrong.
    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),

    /// Invalid kernel configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for clipping operations.
///
/// ## Example
///
/// ```rust
/// use convex_clip::error::ClipResult;
/// use convex_clip::{cuboid, Polyhedron, Vec3};
///
/// fn unit_box() -> ClipResult<Polyhedron> {
///     cuboid(Vec3::ZERO, Vec3::ONE)
/// }
/// # assert_eq!(unit_box().unwrap().face_count(), 6);
/// ```
pub type ClipResult<T> = Result<T, ClipError>;

// =============================================================================
// TESTS
// =============================================================================
