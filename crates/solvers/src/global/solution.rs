/// Indicates why the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The iteration or generation budget was used up.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a global search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    pub status: Status,

    /// The best point found, always inside the bounds.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Total objective evaluations.
    pub evaluations: usize,

    /// Iterations or generations completed.
    pub iters: usize,
}
