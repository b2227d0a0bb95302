use extremum_core::Sample;

/// Indicates why the optimizer finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The objective changed by less than the tolerance over one iteration.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a local optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final optimizer status.
    pub status: Status,

    /// The final iterate.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// The starting point followed by every iterate.
    pub history: Vec<Sample<2>>,

    /// Total objective evaluations, including those spent on derivatives.
    pub evaluations: usize,

    /// Number of completed iterations.
    pub iters: usize,
}
