use std::marker::PhantomData;

use extremum_core::{Bounds, Counted, Goal, Objective, Observer, Sample};
use rand::Rng;

use super::{Action, Event, Solution, Status};

/// Shared bookkeeping for every global strategy.
///
/// Counts evaluations, keeps the best sample seen so far in the direction of
/// `G`, and forwards one [`Event`] per iteration to the observer.
pub(super) struct Tracker<'a, G, O: ?Sized, Obs, const N: usize> {
    objective: Counted<'a, O>,
    observer: Obs,
    best: Sample<N>,
    _goal: PhantomData<G>,
}

impl<'a, G, O, Obs, const N: usize> Tracker<'a, G, O, Obs, N>
where
    G: Goal,
    O: Objective<N> + ?Sized,
    Obs: Observer<Event<N>, Action>,
{
    /// Starts tracking with `first` as the incumbent, evaluating it once.
    pub(super) fn new(objective: &'a O, observer: Obs, first: [f64; N]) -> Self {
        let objective = Counted::new(objective);
        let value = objective.value(&first);
        Self {
            objective,
            observer,
            best: Sample::new(first, value),
            _goal: PhantomData,
        }
    }

    pub(super) fn evaluate(&self, x: &[f64; N]) -> f64 {
        self.objective.value(x)
    }

    /// Replaces the incumbent if `value` is strictly better.
    pub(super) fn offer(&mut self, x: [f64; N], value: f64) {
        if G::is_better(value, self.best.value) {
            self.best = Sample::new(x, value);
        }
    }

    pub(super) fn best(&self) -> &Sample<N> {
        &self.best
    }

    /// Reports iteration `iter`, returning true if the observer asked to stop.
    pub(super) fn emit(&mut self, iter: usize) -> bool {
        let event = Event {
            iter,
            best: self.best,
            evaluations: self.objective.count(),
        };
        matches!(self.observer.observe(&event), Some(Action::StopEarly))
    }

    pub(super) fn finish(self, status: Status, iters: usize) -> Solution<N> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.value,
            evaluations: self.objective.count(),
            iters,
        }
    }
}

/// Draws a point uniformly from the box.
pub(super) fn uniform<R: Rng, const N: usize>(bounds: &Bounds<N>, rng: &mut R) -> [f64; N] {
    let (lower, upper) = (bounds.lower(), bounds.upper());
    std::array::from_fn(|i| rng.random_range(lower[i]..=upper[i]))
}

/// Draws a vector with every coordinate uniform in `[-scale, scale]`.
pub(super) fn jitter<R: Rng, const N: usize>(scale: f64, rng: &mut R) -> [f64; N] {
    std::array::from_fn(|_| rng.random_range(-scale..=scale))
}
