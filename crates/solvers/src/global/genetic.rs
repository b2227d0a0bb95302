use extremum_core::{Bounds, Goal, Objective, Observer, Sample};
use rand::Rng;

use super::{
    Action, Event, Genetic, Solution, Status,
    tracker::{Tracker, uniform},
};

/// Elitist genetic algorithm.
///
/// Every generation keeps the better half of the population unchanged and
/// refills the rest with children. A child is the midpoint of two elites
/// drawn with replacement, mutated per coordinate and clipped to the box.
/// Elites are never re-evaluated, so the best member of the final population
/// is also the best point ever seen.
pub(super) fn search<G, O, R, Obs, const N: usize>(
    params: Genetic,
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
    let size = params.population_size();

    let first = uniform(bounds, rng);
    let mut tracker = Tracker::<G, _, _, N>::new(objective, observer, first);
    let mut population = Vec::with_capacity(size);
    population.push(*tracker.best());
    while population.len() < size {
        let x = uniform(bounds, rng);
        let value = tracker.evaluate(&x);
        tracker.offer(x, value);
        population.push(Sample::new(x, value));
    }

    for generation in 1..=params.generations() {
        population.sort_by(|a, b| G::transform(a.value).total_cmp(&G::transform(b.value)));
        population.truncate(size / 2);

        let elites = population.len();
        while population.len() < size {
            let p1 = population[rng.random_range(0..elites)].x;
            let p2 = population[rng.random_range(0..elites)].x;

            let mut child: [f64; N] = std::array::from_fn(|i| 0.5 * (p1[i] + p2[i]));
            for coordinate in &mut child {
                if rng.random::<f64>() < params.mutation_rate() {
                    let scale = params.mutation_scale();
                    *coordinate += rng.random_range(-scale..=scale);
                }
            }
            let child = bounds.clamp(child);

            let value = tracker.evaluate(&child);
            tracker.offer(child, value);
            population.push(Sample::new(child, value));
        }

        if tracker.emit(generation) {
            return tracker.finish(Status::StoppedByObserver, generation);
        }
    }

    tracker.finish(Status::Completed, params.generations())
}
