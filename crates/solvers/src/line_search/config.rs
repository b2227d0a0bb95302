use thiserror::Error;

/// Configuration shared by the line search methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 10_000).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `epsilon` is the target precision: every method stops once the
    /// bracket is no wider than `2 * epsilon`. `max_iters` caps the number
    /// of reduction steps (or grid intervals for the passive method).
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-positive or non-finite.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { epsilon, max_iters })
    }

    /// Creates a config with the given tolerance and the default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-positive or non-finite.
    pub fn with_epsilon(epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, Self::default().max_iters)
    }

    /// Returns the target precision.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of reduction steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
