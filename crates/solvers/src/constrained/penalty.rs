//! Exterior penalty: `F(x) = score(f(x)) + r · g(x)²`.
//!
//! The penalty coefficient `r` grows by `factor` after every outer iteration
//! until the constraint residual drops below `epsilon`.

use extremum_core::{Goal, Objective};

use super::Error;

pub(super) fn merit<G, O, C>(objective: &O, constraint: &C, r: f64, x: &[f64; 2]) -> f64
where
    G: Goal,
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
{
    G::transform(objective.value(x)) + r * constraint.value(x).powi(2)
}

pub(super) fn is_done(residual: f64, epsilon: f64) -> bool {
    residual.abs() < epsilon
}

pub(super) fn validate(factor: f64) -> Result<(), Error> {
    if !factor.is_finite() || factor <= 1.0 {
        return Err(Error::InvalidFactor {
            value: factor,
            expected: "a finite factor > 1",
        });
    }
    Ok(())
}
