//! # Config Crate
//!
//! Centralized configuration constants for the convex clipping workspace.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, EPSILON_TOLERANCE, MIN_SOLID_FACES};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
//!
//! // Clip results with fewer faces than this are empty intersections.
//! let faces_after_clip = 2;
//! assert!(faces_after_clip < MIN_SOLID_FACES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Safe to depend on from every crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
