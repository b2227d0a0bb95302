/// Emitted once per outer iteration, after the inner search has settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// One-based outer iteration number.
    pub outer: usize,

    /// Where the inner search ended.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// Constraint value `g(x)`.
    pub residual: f64,

    /// The penalty `r` or barrier weight `μ` used in this iteration.
    pub coefficient: f64,
}
