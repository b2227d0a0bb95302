use extremum_core::{Bounds, Goal, Objective, Observer};
use rand::Rng;

use super::{
    Action, Event, RandomSearch, Solution, Status,
    tracker::{Tracker, uniform},
};

/// Samples the box uniformly and keeps the best point.
///
/// Costs exactly `iterations` evaluations.
pub(super) fn search<G, O, R, Obs, const N: usize>(
    params: RandomSearch,
    objective: &O,
    bounds: &Bounds<N>,
    rng: &mut R,
    observer: Obs,
) -> Solution<N>
where
    G: Goal,
    O: Objective<N> + ?Sized,
    R: Rng,
    Obs: Observer<Event<N>, Action>,
{
    let mut tracker = Tracker::<G, _, _, N>::new(objective, observer, uniform(bounds, rng));
    if tracker.emit(1) {
        return tracker.finish(Status::StoppedByObserver, 1);
    }

    for iter in 2..=params.iterations() {
        let x = uniform(bounds, rng);
        let value = tracker.evaluate(&x);
        tracker.offer(x, value);

        if tracker.emit(iter) {
            return tracker.finish(Status::StoppedByObserver, iter);
        }
    }

    tracker.finish(Status::Completed, params.iterations())
}
