use extremum_core::Sample;

/// Emitted once per iteration (per generation for the genetic algorithm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// One-based iteration or generation number.
    pub iter: usize,

    /// The best sample found so far.
    pub best: Sample<N>,

    /// Objective evaluations so far.
    pub evaluations: usize,
}
