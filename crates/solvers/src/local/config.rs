use thiserror::Error;

use crate::finite_difference::FiniteDifference;

/// Configuration for the local optimizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    max_line_steps: usize,
    singular_threshold: f64,
    finite_difference: FiniteDifference,
}

/// Errors that can occur when validating a local optimizer config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("singular_threshold must be finite and non-negative")]
    SingularThreshold,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The iteration stops once the objective changes by less than
    /// `tolerance` over one iteration. The remaining settings take their
    /// defaults: at most 100 000 steps per coordinate walk, a singular
    /// threshold of `1e-10` and a finite-difference step of `1e-4`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-positive or non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            max_line_steps: 100_000,
            singular_threshold: 1e-10,
            finite_difference: FiniteDifference::default(),
        })
    }

    /// Caps the number of steps a coordinate walk may take along one axis.
    #[must_use]
    pub fn with_max_line_steps(self, max_line_steps: usize) -> Self {
        Self {
            max_line_steps,
            ..self
        }
    }

    /// Sets the `|det H|` below which Newton falls back to a gradient step.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is negative or non-finite.
    pub fn with_singular_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::SingularThreshold);
        }
        Ok(Self {
            singular_threshold: threshold,
            ..self
        })
    }

    /// Sets the derivative estimator used by Newton and gradient descent.
    #[must_use]
    pub fn with_finite_difference(self, finite_difference: FiniteDifference) -> Self {
        Self {
            finite_difference,
            ..self
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn max_line_steps(&self) -> usize {
        self.max_line_steps
    }

    #[must_use]
    pub fn singular_threshold(&self) -> f64 {
        self.singular_threshold
    }

    #[must_use]
    pub fn finite_difference(&self) -> &FiniteDifference {
        &self.finite_difference
    }
}
