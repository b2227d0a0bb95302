use std::marker::PhantomData;

use extremum_core::{Goal, Observer};

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the best objective has not improved for a while.
///
/// An event counts as an improvement when its objective beats the best seen
/// so far, in the direction of `G`, by more than `tolerance`. After
/// `patience` consecutive events without improvement the observer returns
/// the stop action. NaN objectives never count as improvements.
#[derive(Debug, Clone, Copy)]
pub struct Stall<G> {
    patience: usize,
    tolerance: f64,
    best: Option<f64>,
    stale: usize,
    _goal: PhantomData<G>,
}

impl<G: Goal> Stall<G> {
    /// Creates a stall detector.
    ///
    /// A `patience` of zero stops at the first event that does not improve.
    #[must_use]
    pub fn new(patience: usize, tolerance: f64) -> Self {
        Self {
            patience,
            tolerance: tolerance.max(0.0),
            best: None,
            stale: 0,
            _goal: PhantomData,
        }
    }

    /// The best objective observed so far.
    #[must_use]
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    fn improves(&self, value: f64) -> bool {
        match self.best {
            None => !value.is_nan(),
            Some(best) => G::transform(best) - G::transform(value) > self.tolerance,
        }
    }
}

impl<G, E, A> Observer<E, A> for Stall<G>
where
    G: Goal,
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let value = event.objective();
        if self.improves(value) {
            self.best = Some(value);
            self.stale = 0;
            return None;
        }

        self.stale += 1;
        (self.stale > self.patience).then(A::stop_early)
    }
}
