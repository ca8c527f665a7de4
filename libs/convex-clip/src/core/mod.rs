//! Core value types for the clipping kernel.
//!
//! Includes the vector alias (`Vec3`) and the oriented `Plane` every face
//! derives its half-space from.

pub mod plane;
pub mod vec3;
