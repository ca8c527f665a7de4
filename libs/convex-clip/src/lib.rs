//! Convex polyhedron clipping kernel.
//!
//! Builds convex solids from primitives and intersects them by clipping one
//! solid's faces against the half-spaces of the other: Sutherland–Hodgman
//! polygon clipping lifted to 3D, with a capping face closing every cut.
//!
//! ```rust
//! use convex_clip::{cuboid, Vec3};
//!
//! let a = cuboid(Vec3::splat(-2.0), Vec3::splat(2.0)).unwrap();
//! let far = cuboid(Vec3::splat(5.0), Vec3::splat(7.0)).unwrap();
//!
//! // Disjoint solids have no intersection.
//! assert!(a.clip(&far).unwrap().is_none());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod face;
pub mod polyhedron;
pub mod primitives;

pub use crate::config::ClipConfig;
pub use crate::core::plane::Plane;
pub use crate::core::vec3::Vec3;
pub use crate::error::{ClipError, ClipResult};
pub use crate::face::Face;
pub use crate::polyhedron::Polyhedron;
pub use crate::primitives::{cuboid, skewed_cuboid, tetrahedron};
