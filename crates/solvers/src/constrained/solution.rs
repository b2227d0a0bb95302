use extremum_core::Sample;

/// Indicates why the optimizer finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The outer stopping rule was met.
    Converged,

    /// Reached the outer iteration limit.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a penalty or barrier optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    pub status: Status,

    /// The final point.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// Constraint value `g(x)`.
    pub residual: f64,

    /// The coefficient of the last outer iteration.
    pub coefficient: f64,

    /// The start point followed by every inner iterate, with objective values.
    pub history: Vec<Sample<2>>,

    /// Number of outer iterations performed.
    pub outer_iters: usize,

    /// Objective evaluations, excluding constraint evaluations.
    pub evaluations: usize,
}
