/// Actions an observer can take during a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and report the midpoint of the current bracket.
    StopEarly,

    /// Treat this probe as infinitely worse than any other.
    ///
    /// The bracket then shrinks away from the probe. Useful for steering
    /// the search out of a region the caller knows to be uninteresting.
    AssumeWorse,
}
