//! Centralized configuration values shared across the clipping workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance used when comparing plane distances.
///
/// Half-space classification itself is exact (`<= 0`); this tolerance is only
/// used for coplanarity checks between faces.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TOPOLOGY LIMITS
// =============================================================================

/// Minimum number of distinct vertices a face needs to define a plane.
///
/// # Examples
/// ```
/// use config::constants::MIN_FACE_VERTICES;
/// assert_eq!(MIN_FACE_VERTICES, 3);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;

/// Minimum number of faces a clip result needs before it is reported as a
/// solid. Anything smaller is an empty intersection.
///
/// # Examples
/// ```
/// use config::constants::MIN_SOLID_FACES;
/// let faces = 2;
/// assert!(faces < MIN_SOLID_FACES);
/// ```
pub const MIN_SOLID_FACES: usize = 3;

// =============================================================================
// PARALLELISM
// =============================================================================

/// Face count at which a single half-space clip switches to `rayon`.
///
/// Small polyhedra (boxes, tetrahedra) stay on the calling thread where the
/// scheduling overhead would dominate.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_FACE_THRESHOLD;
/// assert!(PARALLEL_FACE_THRESHOLD >= 1);
/// ```
pub const PARALLEL_FACE_THRESHOLD: usize = 32;

// =============================================================================
// LOGGING
// =============================================================================

/// Log filter used by binaries when `RUST_LOG` is not set.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LOG_FILTER;
/// assert!(DEFAULT_LOG_FILTER.contains("convex_clip"));
/// ```
pub const DEFAULT_LOG_FILTER: &str = "convex_clip=info,clip_demo=info";

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Face count at which clipping fans out over the thread pool.
    pub parallel_threshold: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and parallel threshold.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 64).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 64);
    /// ```
    pub fn new(tolerance: f64, parallel_threshold: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if parallel_threshold == 0 {
            return Err(ConfigError::InvalidParallelThreshold(parallel_threshold));
        }
        Ok(Self {
            tolerance,
            parallel_threshold,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            parallel_threshold: PARALLEL_FACE_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the parallel threshold is zero.
    InvalidParallelThreshold(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidParallelThreshold(value) => {
                write!(f, "parallel_threshold must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
