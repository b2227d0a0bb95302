/// Defines the optimization direction.
///
/// This trait enables zero-cost abstraction over minimization and maximization.
/// Solvers transform objective values using [`Goal::transform`], allowing
/// them to always minimize a "score" internally while supporting both
/// directions.
pub trait Goal {
    /// Transforms an objective value into a score to be minimized.
    ///
    /// - [`Minimize`]: returns the value unchanged
    /// - [`Maximize`]: negates the value
    fn transform(value: f64) -> f64;

    /// Returns true if `candidate` is strictly better than `incumbent`.
    #[inline]
    fn is_better(candidate: f64, incumbent: f64) -> bool {
        Self::transform(candidate) < Self::transform(incumbent)
    }
}

/// Minimize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    #[inline]
    fn transform(value: f64) -> f64 {
        value
    }
}

/// Maximize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    #[inline]
    fn transform(value: f64) -> f64 {
        -value
    }
}
