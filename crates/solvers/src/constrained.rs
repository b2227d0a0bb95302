//! Constrained optimization by penalty and barrier transformations.
//!
//! Both methods replace the constrained problem with a sequence of
//! unconstrained ones, solved by a coordinate probe-and-step inner search
//! that moves `±alpha` along each axis while the transformed value improves.
//!
//! # Methods
//!
//! - [`Method::Penalty`]: for an equality constraint `g(x) = 0`. Minimizes
//!   `score(f) + r · g²`, growing `r` until `|g| < epsilon`.
//! - [`Method::Barrier`]: for an inequality constraint `g(x) > 0`. Minimizes
//!   `score(f) - μ · ln g`, shrinking `μ` until `μ < epsilon`. The start must
//!   be strictly feasible and the objective is never evaluated outside the
//!   feasible region. [`feasible_start`] can find a start on a grid.
//!
//! Here `score` is the objective for minimization and its negation for
//! maximization.
//!
//! # Observer Events
//!
//! The optimizer emits one [`Event`] per outer iteration. Observers can
//! return [`Action::StopEarly`] to halt before the coefficient is updated.

mod action;
mod barrier;
mod config;
mod error;
mod event;
mod inner;
mod penalty;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use barrier::feasible_start;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use extremum_core::{Counted, Goal, Maximize, Minimize, Objective, Observer, Sample};

/// Constraint transformation with its coefficient update factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Multiply the penalty coefficient by `factor > 1` each outer iteration.
    Penalty { factor: f64 },

    /// Multiply the barrier weight by `0 < factor < 1` each outer iteration.
    Barrier { factor: f64 },
}

impl Method {
    pub const PENALTY: Method = Method::Penalty { factor: 10.0 };
    pub const BARRIER: Method = Method::Barrier { factor: 0.1 };

    fn validate(&self) -> Result<(), Error> {
        match *self {
            Method::Penalty { factor } => penalty::validate(factor),
            Method::Barrier { factor } => barrier::validate(factor),
        }
    }

    fn factor(&self) -> f64 {
        match *self {
            Method::Penalty { factor } | Method::Barrier { factor } => factor,
        }
    }
}

/// Minimizes the objective subject to the constraint.
///
/// See the [module docs](self) for details on the methods and observer actions.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] for a non-finite start,
/// [`Error::InvalidFactor`] for an out-of-range coefficient factor, and
/// [`Error::InfeasibleStart`] if the barrier method starts at `g <= 0`.
pub fn minimize<O, C, Obs>(
    method: Method,
    objective: &O,
    constraint: &C,
    start: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Minimize, _, _, _>(method, objective, constraint, start, config, observer)
}

/// Minimizes the objective subject to the constraint without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<O, C>(
    method: Method,
    objective: &O,
    constraint: &C,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
{
    minimize(method, objective, constraint, start, config, ())
}

/// Maximizes the objective subject to the constraint.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<O, C, Obs>(
    method: Method,
    objective: &O,
    constraint: &C,
    start: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Maximize, _, _, _>(method, objective, constraint, start, config, observer)
}

/// Maximizes the objective subject to the constraint without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize_unobserved<O, C>(
    method: Method,
    objective: &O,
    constraint: &C,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
{
    maximize(method, objective, constraint, start, config, ())
}

fn search<G, O, C, Obs>(
    method: Method,
    objective: &O,
    constraint: &C,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Goal,
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    if start.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteStart(start));
    }
    method.validate()?;
    if let Method::Barrier { .. } = method {
        let residual = constraint.value(&start);
        if residual.is_nan() || residual <= 0.0 {
            return Err(Error::InfeasibleStart { x: start, residual });
        }
    }

    let counted = Counted::new(objective);
    let mut history = vec![Sample::new(start, counted.value(&start))];
    let mut x = start;
    let mut coefficient = config.initial_coefficient();

    for outer in 1..=config.max_outer() {
        let (alpha, epsilon, max_inner) = (config.alpha(), config.epsilon(), config.max_inner());
        let visit = |p: [f64; 2]| history.push(Sample::new(p, counted.value(&p)));
        x = match method {
            Method::Penalty { .. } => {
                let merit =
                    |p: &[f64; 2]| penalty::merit::<G, _, _>(&counted, constraint, coefficient, p);
                inner::descend(&merit, x, alpha, epsilon, max_inner, visit)
            }
            Method::Barrier { .. } => {
                let merit =
                    |p: &[f64; 2]| barrier::merit::<G, _, _>(&counted, constraint, coefficient, p);
                inner::descend(&merit, x, alpha, epsilon, max_inner, visit)
            }
        };

        // Every inner iterate is recorded, so the last entry is always at `x`.
        let objective = history.last().map_or(f64::NAN, |sample| sample.value);
        let residual = constraint.value(&x);
        let finish = |status, history| Solution {
            status,
            x,
            objective,
            residual,
            coefficient,
            history,
            outer_iters: outer,
            evaluations: counted.count(),
        };

        let event = Event {
            outer,
            x,
            objective,
            residual,
            coefficient,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, history));
        }

        let done = match method {
            Method::Penalty { .. } => penalty::is_done(residual, config.epsilon()),
            Method::Barrier { .. } => barrier::is_done(coefficient, config.epsilon()),
        };
        if done {
            return Ok(finish(Status::Converged, history));
        }

        if outer == config.max_outer() {
            return Ok(finish(Status::MaxIters, history));
        }
        coefficient *= method.factor();
    }

    // Only reachable with `max_outer == 0`.
    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective: history[0].value,
        residual: constraint.value(&x),
        coefficient,
        history,
        outer_iters: 0,
        evaluations: counted.count(),
    })
}
