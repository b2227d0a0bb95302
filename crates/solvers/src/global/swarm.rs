use extremum_core::{Bounds, Goal, Objective, Observer, Sample};
use rand::Rng;

use super::{
    Action, Event, Solution, Status, Swarm,
    tracker::{Tracker, jitter, uniform},
};

struct Particle<const N: usize> {
    x: [f64; N],
    velocity: [f64; N],
    best: Sample<N>,
}

/// Particle swarm optimization with synchronous sweeps.
///
/// Particles start uniformly in the box with velocities uniform in
/// `[-1, 1]`. The random factors `r1` and `r2` are drawn per coordinate.
/// Personal and global bests are updated as soon as a particle moves, so
/// later particles in the same sweep already follow the new global best.
pub(super) fn search<G, O, R, Obs, const N: usize>(
    params: Swarm,
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
    let first = uniform(bounds, rng);
    let mut tracker = Tracker::<G, _, _, N>::new(objective, observer, first);

    let mut particles = Vec::with_capacity(params.swarm_size());
    particles.push(Particle {
        x: first,
        velocity: jitter(1.0, rng),
        best: *tracker.best(),
    });
    while particles.len() < params.swarm_size() {
        let x = uniform(bounds, rng);
        let value = tracker.evaluate(&x);
        tracker.offer(x, value);
        particles.push(Particle {
            x,
            velocity: jitter(1.0, rng),
            best: Sample::new(x, value),
        });
    }

    for iter in 1..=params.iterations() {
        for particle in &mut particles {
            let leader = tracker.best().x;
            for i in 0..N {
                let (r1, r2) = (rng.random::<f64>(), rng.random::<f64>());
                particle.velocity[i] = params.inertia() * particle.velocity[i]
                    + params.cognitive() * r1 * (particle.best.x[i] - particle.x[i])
                    + params.social() * r2 * (leader[i] - particle.x[i]);
            }
            particle.x = bounds.clamp(std::array::from_fn(|i| {
                particle.x[i] + particle.velocity[i]
            }));

            let value = tracker.evaluate(&particle.x);
            if G::is_better(value, particle.best.value) {
                particle.best = Sample::new(particle.x, value);
            }
            tracker.offer(particle.x, value);
        }

        if tracker.emit(iter) {
            return tracker.finish(Status::StoppedByObserver, iter);
        }
    }

    tracker.finish(Status::Completed, params.iterations())
}
