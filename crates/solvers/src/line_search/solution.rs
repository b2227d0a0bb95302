/// Indicates why the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The bracket shrank to the requested precision.
    Converged,

    /// Reached the iteration limit before the bracket was narrow enough.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// The final bracket.
    pub bracket: [f64; 2],

    /// Total objective evaluations, including the one at `x`.
    pub evaluations: usize,

    /// Number of reduction steps performed.
    pub iters: usize,
}
