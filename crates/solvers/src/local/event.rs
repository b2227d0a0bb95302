/// How an iterate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// One sweep of coordinate walks.
    Coordinate,

    /// An accepted Newton step.
    Newton,

    /// A fixed gradient step taken because the Newton step was unavailable
    /// (near-singular Hessian) or did not improve the objective.
    Fallback,

    /// A plain gradient descent step.
    Gradient,
}

/// Emitted once per iteration, after the iterate has moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// One-based iteration number.
    pub iter: usize,

    /// The new iterate.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    pub step: StepKind,
}
