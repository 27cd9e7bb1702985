// src/config.rs
//! Runtime tuning for the Newton square-root kernel.
//!
//! The `const fn` kernels take their threshold as an argument. `KernelConfig`
//! bundles those arguments so callers can load them once, for example from a
//! JSON settings file, and run the bounded iteration with them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NumericsError, Result};
use crate::numerics::kernel;

/// Newton iteration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Convergence threshold for `f32` square roots
    pub sqrt_threshold_f32: f32,
    /// Convergence threshold for `f64` square roots
    pub sqrt_threshold_f64: f64,
    /// Hard cap on Newton iterations
    pub max_newton_iterations: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            sqrt_threshold_f32: kernel::DEFAULT_FLOAT_THRESHOLD,
            sqrt_threshold_f64: kernel::DEFAULT_DOUBLE_THRESHOLD,
            max_newton_iterations: kernel::MAX_NEWTON_ITERATIONS,
        }
    }
}

impl KernelConfig {
    /// Create a configuration that iterates until the last bits settle
    pub fn precise() -> Self {
        Self {
            sqrt_threshold_f32: 1e-7,
            sqrt_threshold_f64: 1e-15,
            max_newton_iterations: 128,
        }
    }

    /// Create a configuration that stops after a handful of steps
    pub fn fast() -> Self {
        Self {
            sqrt_threshold_f32: 1e-2,
            sqrt_threshold_f64: 1e-3,
            max_newton_iterations: 8,
        }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Loaded kernel configuration");
        Ok(config)
    }

    /// Check that thresholds are positive and finite and the cap is non-zero
    pub fn validate(&self) -> Result<()> {
        let problem = if !(self.sqrt_threshold_f32.is_finite() && self.sqrt_threshold_f32 > 0.0) {
            Some(format!("sqrt_threshold_f32 must be positive, got {}", self.sqrt_threshold_f32))
        } else if !(self.sqrt_threshold_f64.is_finite() && self.sqrt_threshold_f64 > 0.0) {
            Some(format!("sqrt_threshold_f64 must be positive, got {}", self.sqrt_threshold_f64))
        } else if self.max_newton_iterations == 0 {
            Some("max_newton_iterations must be at least 1".to_string())
        } else {
            None
        };

        match problem {
            Some(reason) => {
                warn!(%reason, "Rejected kernel configuration");
                Err(NumericsError::InvalidConfig(reason))
            }
            None => Ok(()),
        }
    }

    pub fn sqrt_f32(&self, val: f32) -> f32 {
        kernel::sqrt_ce_f32_bounded(val, self.sqrt_threshold_f32, self.max_newton_iterations)
    }

    pub fn sqrt_f64(&self, val: f64) -> f64 {
        kernel::sqrt_ce_f64_bounded(val, self.sqrt_threshold_f64, self.max_newton_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_kernel_constants() {
        let config = KernelConfig::default();
        assert_eq!(config.sqrt_threshold_f32, kernel::DEFAULT_FLOAT_THRESHOLD);
        assert_eq!(config.max_newton_iterations, kernel::MAX_NEWTON_ITERATIONS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(KernelConfig::precise().validate().is_ok());
        assert!(KernelConfig::fast().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_threshold = KernelConfig { sqrt_threshold_f32: 0.0, ..Default::default() };
        assert!(matches!(zero_threshold.validate(), Err(NumericsError::InvalidConfig(_))));

        let nan_threshold = KernelConfig { sqrt_threshold_f64: f64::NAN, ..Default::default() };
        assert!(nan_threshold.validate().is_err());

        let no_iterations = KernelConfig { max_newton_iterations: 0, ..Default::default() };
        assert!(no_iterations.validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let config = KernelConfig::from_json(r#"{ "max_newton_iterations": 16 }"#).unwrap();
        assert_eq!(config.max_newton_iterations, 16);
        assert_eq!(config.sqrt_threshold_f64, kernel::DEFAULT_DOUBLE_THRESHOLD);

        assert!(matches!(
            KernelConfig::from_json("{ not json"),
            Err(NumericsError::ConfigParse(_))
        ));
        assert!(matches!(
            KernelConfig::from_json(r#"{ "max_newton_iterations": 0 }"#),
            Err(NumericsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_configured_sqrt() {
        let precise = KernelConfig::precise();
        assert!((precise.sqrt_f64(2.0) - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((precise.sqrt_f32(9.0) - 3.0).abs() < 1e-5);

        let fast = KernelConfig::fast();
        assert!((fast.sqrt_f64(16.0) - 4.0).abs() < 1e-2);
        assert!(fast.sqrt_f32(-1.0).is_nan());
    }
}
