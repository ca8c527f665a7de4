//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so the clipping code can
//! stay decoupled from literal constants.

use config::constants::{GlobalConfig, EPSILON_TOLERANCE, PARALLEL_FACE_THRESHOLD};

use crate::error::ClipResult;

/// Clipping configuration.
///
/// # Examples
/// ```
/// use convex_clip::config::ClipConfig;
/// let cfg = ClipConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// assert!(cfg.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    /// Distance tolerance used for coplanarity checks between faces.
    pub tolerance: f64,
    /// Whether body and cap passes may run on the `rayon` thread pool.
    pub parallel: bool,
    /// Face count at which a single cut fans out over the thread pool.
    pub parallel_threshold: usize,
}

impl ClipConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use convex_clip::config::ClipConfig;
    /// let cfg = ClipConfig::new(1.0e-8, 16).unwrap();
    /// assert_eq!(cfg.parallel_threshold, 16);
    /// ```
    pub fn new(tolerance: f64, parallel_threshold: usize) -> ClipResult<Self> {
        let cfg = GlobalConfig::new(tolerance, parallel_threshold)?;
        Ok(Self {
            tolerance: cfg.tolerance,
            parallel: true,
            parallel_threshold: cfg.parallel_threshold,
        })
    }

    /// Default configuration with the thread pool disabled.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Returns true when a cut over `face_count` faces should use `rayon`.
    pub(crate) fn use_parallel(&self, face_count: usize) -> bool {
        self.parallel && face_count >= self.parallel_threshold
    }
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            parallel: true,
            parallel_threshold: PARALLEL_FACE_THRESHOLD,
        }
    }
}
