//! Stochastic global search over a box.
//!
//! # Methods
//!
//! - [`Method::RandomSearch`]: uniform sampling of the box
//! - [`Method::Annealing`]: simulated annealing with geometric cooling
//! - [`Method::Genetic`]: elitist genetic algorithm with midpoint crossover
//! - [`Method::Swarm`]: particle swarm optimization
//!
//! Every point evaluated is clipped to the bounds, so the returned point
//! always lies inside the box. Randomness comes only from the caller's
//! generator: two runs with identically seeded generators return identical
//! results.
//!
//! Hyperparameters are validated when the parameter structs are built, so
//! the search itself cannot fail.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per iteration (per generation for
//! [`Method::Genetic`]) carrying the best sample so far. Observers can return
//! [`Action::StopEarly`] to halt and keep that sample.

mod action;
mod annealing;
mod config;
mod event;
mod genetic;
mod random_search;
mod solution;
mod swarm;
mod tracker;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Annealing, ConfigError, Genetic, RandomSearch, Swarm};
pub use event::Event;
pub use solution::{Solution, Status};

use extremum_core::{Bounds, Goal, Maximize, Minimize, Objective, Observer};
use rand::Rng;

/// Global strategy with its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    RandomSearch(RandomSearch),
    Annealing(Annealing),
    Genetic(Genetic),
    Swarm(Swarm),
}

impl Method {
    /// Every strategy with default hyperparameters.
    #[must_use]
    pub fn defaults() -> [Method; 4] {
        [
            Method::RandomSearch(RandomSearch::default()),
            Method::Annealing(Annealing::default()),
            Method::Genetic(Genetic::default()),
            Method::Swarm(Swarm::default()),
        ]
    }

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::RandomSearch(_) => "random search",
            Method::Annealing(_) => "simulated annealing",
            Method::Genetic(_) => "genetic algorithm",
            Method::Swarm(_) => "particle swarm",
        }
    }
}

/// Searches the box for the minimum of the objective.
///
/// See the [module docs](self) for details on the methods and observer actions.
pub fn minimize<O, R, Obs, const N: usize>(
    method: Method,
    objective: &O,
    bounds: &Bounds<N>,
    rng: &mut R,
    observer: Obs,
) -> Solution<N>
where
    O: Objective<N> + ?Sized,
    R: Rng,
    Obs: Observer<Event<N>, Action>,
{
    search::<Minimize, _, _, _, N>(method, objective, bounds, rng, observer)
}

/// Searches the box for the minimum without observer support.
pub fn minimize_unobserved<O, R, const N: usize>(
    method: Method,
    objective: &O,
    bounds: &Bounds<N>,
    rng: &mut R,
) -> Solution<N>
where
    O: Objective<N> + ?Sized,
    R: Rng,
{
    minimize(method, objective, bounds, rng, ())
}

/// Searches the box for the maximum of the objective.
///
/// See the [module docs](self) for details on the methods and observer actions.
pub fn maximize<O, R, Obs, const N: usize>(
    method: Method,
    objective: &O,
    bounds: &Bounds<N>,
    rng: &mut R,
    observer: Obs,
) -> Solution<N>
where
    O: Objective<N> + ?Sized,
    R: Rng,
    Obs: Observer<Event<N>, Action>,
{
    search::<Maximize, _, _, _, N>(method, objective, bounds, rng, observer)
}

/// Searches the box for the maximum without observer support.
pub fn maximize_unobserved<O, R, const N: usize>(
    method: Method,
    objective: &O,
    bounds: &Bounds<N>,
    rng: &mut R,
) -> Solution<N>
where
    O: Objective<N> + ?Sized,
    R: Rng,
{
    maximize(method, objective, bounds, rng, ())
}

pub(crate) fn search<G, O, R, Obs, const N: usize>(
    method: Method,
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
    match method {
        Method::RandomSearch(params) => {
            random_search::search::<G, _, _, _, N>(params, objective, bounds, rng, observer)
        }
        Method::Annealing(params) => {
            annealing::search::<G, _, _, _, N>(params, objective, bounds, rng, observer)
        }
        Method::Genetic(params) => {
            genetic::search::<G, _, _, _, N>(params, objective, bounds, rng, observer)
        }
        Method::Swarm(params) => {
            swarm::search::<G, _, _, _, N>(params, objective, bounds, rng, observer)
        }
    }
}
