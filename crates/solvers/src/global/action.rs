/// Actions an observer can take during a global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the best sample found so far.
    StopEarly,
}
