use extremum_core::{Bounds, Goal, Objective, Observer};
use rand::Rng;

use super::{
    Action, Annealing, Event, Solution, Status,
    tracker::{Tracker, jitter, uniform},
};

/// Simulated annealing from a uniform random start.
///
/// Each iteration proposes a clipped uniform perturbation of the current
/// point. Proposals that are no worse are always accepted, even once the
/// temperature has underflowed to zero. A worse one is accepted with
/// probability `exp(-Δ / T)`, where `Δ` is the score increase. The
/// temperature is multiplied by the cooling rate after every iteration.
pub(super) fn search<G, O, R, Obs, const N: usize>(
    params: Annealing,
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
    let start = uniform(bounds, rng);
    let mut tracker = Tracker::<G, _, _, N>::new(objective, observer, start);
    let mut current = *tracker.best();
    let mut temperature = params.initial_temperature();

    for iter in 1..=params.iterations() {
        let offset = jitter::<_, N>(params.step(), rng);
        let candidate = bounds.clamp(std::array::from_fn(|i| current.x[i] + offset[i]));
        let value = tracker.evaluate(&candidate);

        let delta = G::transform(value) - G::transform(current.value);
        if delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp() {
            current.x = candidate;
            current.value = value;
            tracker.offer(candidate, value);
        }
        temperature *= params.cooling_rate();

        if tracker.emit(iter) {
            return tracker.finish(Status::StoppedByObserver, iter);
        }
    }

    tracker.finish(Status::Completed, params.iterations())
}
