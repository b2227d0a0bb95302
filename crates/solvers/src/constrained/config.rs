use thiserror::Error;

/// Configuration for the penalty and barrier methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    epsilon: f64,
    initial_coefficient: f64,
    max_outer: usize,
    max_inner: usize,
}

/// Errors that can occur when validating a constrained optimizer config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("initial_coefficient must be finite and positive")]
    InitialCoefficient,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.01, 1e-6, 1.0, 100, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// - `alpha`: probe step of the inner coordinate search
    /// - `epsilon`: inner convergence threshold on the transformed objective,
    ///   and the outer stopping threshold (`|g| < epsilon` for the penalty
    ///   method, `μ < epsilon` for the barrier method)
    /// - `initial_coefficient`: starting penalty `r` or barrier weight `μ`
    /// - `max_outer`, `max_inner`: iteration caps for the two loops
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha`, `epsilon` or `initial_coefficient` is
    /// non-positive or non-finite.
    pub fn new(
        alpha: f64,
        epsilon: f64,
        initial_coefficient: f64,
        max_outer: usize,
        max_inner: usize,
    ) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if !initial_coefficient.is_finite() || initial_coefficient <= 0.0 {
            return Err(ConfigError::InitialCoefficient);
        }

        Ok(Self {
            alpha,
            epsilon,
            initial_coefficient,
            max_outer,
            max_inner,
        })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn initial_coefficient(&self) -> f64 {
        self.initial_coefficient
    }

    #[must_use]
    pub fn max_outer(&self) -> usize {
        self.max_outer
    }

    #[must_use]
    pub fn max_inner(&self) -> usize {
        self.max_inner
    }
}
