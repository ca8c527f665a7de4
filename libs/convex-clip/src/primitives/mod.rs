/// Primitive solid creators.
///
/// Each creator is a pure function returning a [`crate::Polyhedron`] whose
/// faces are already wound against an interior point, ready to be clipped.

pub mod cuboid;
pub mod tetrahedron;

pub use cuboid::{cuboid, skewed_cuboid};
pub use tetrahedron::tetrahedron;
