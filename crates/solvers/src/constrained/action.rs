/// Actions an observer can take during constrained optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current outer iteration and return its point.
    StopEarly,
}
