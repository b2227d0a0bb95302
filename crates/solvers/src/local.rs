//! Local optimization of two-variable functions from a starting point.
//!
//! # Methods
//!
//! - [`Method::CoordinateDescent`]: walks each axis in turn with a fixed step
//!   while the objective keeps improving (the Gauss method)
//! - [`Method::Newton`]: Newton steps from a finite-difference gradient and
//!   Hessian, safeguarded by a fixed gradient fallback
//! - [`Method::GradientDescent`]: fixed-rate steps along the
//!   finite-difference gradient
//!
//! Every method stops once the objective changes by less than the configured
//! tolerance over one iteration, or after `max_iters` iterations.
//!
//! # Newton safeguard
//!
//! The Newton candidate is accepted only when it improves the objective. A
//! near-singular Hessian (`|det H|` below the singular threshold) or a
//! candidate that does not improve triggers a plain gradient step of size
//! `fallback_step`. Without this safeguard Newton heads for the nearest
//! stationary point, which need not be an optimum of the requested kind.
//!
//! # Observer Events
//!
//! The optimizer emits one [`Event`] per iteration after the iterate moves.
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod action;
mod config;
mod coordinate;
mod error;
mod event;
mod gradient;
mod newton;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, StepKind};
pub use solution::{Solution, Status};

use extremum_core::{Counted, Goal, Maximize, Minimize, Objective, Observer};

use state::State;

/// Local search strategy with its step parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    CoordinateDescent { alpha: f64 },
    Newton { fallback_step: f64 },
    GradientDescent { learning_rate: f64 },
}

impl Method {
    /// Coordinate descent with `alpha = 0.1`.
    pub const COORDINATE_DESCENT: Method = Method::CoordinateDescent { alpha: 0.1 };

    /// Newton with a `0.01` gradient fallback.
    pub const NEWTON: Method = Method::Newton {
        fallback_step: 0.01,
    };

    /// Gradient descent with `learning_rate = 0.001`.
    pub const GRADIENT_DESCENT: Method = Method::GradientDescent {
        learning_rate: 0.001,
    };

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::CoordinateDescent { .. } => "coordinate descent",
            Method::Newton { .. } => "newton",
            Method::GradientDescent { .. } => "gradient descent",
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let (name, value) = match *self {
            Method::CoordinateDescent { alpha } => ("alpha", alpha),
            Method::Newton { fallback_step } => ("fallback_step", fallback_step),
            Method::GradientDescent { learning_rate } => ("learning_rate", learning_rate),
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidStep { name, value });
        }
        Ok(())
    }
}

/// Minimizes the objective starting from `start`.
///
/// See the [module docs](self) for details on the methods and observer actions.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `start` has a non-finite coordinate
/// and [`Error::InvalidStep`] if the method's step parameter is not a
/// finite positive number.
pub fn minimize<O, Obs>(
    method: Method,
    objective: &O,
    start: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Minimize, _, _>(method, objective, start, config, observer)
}

/// Minimizes the objective without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<O>(
    method: Method,
    objective: &O,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
{
    minimize(method, objective, start, config, ())
}

/// Maximizes the objective starting from `start`.
///
/// See the [module docs](self) for details on the methods and observer actions.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<O, Obs>(
    method: Method,
    objective: &O,
    start: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Maximize, _, _>(method, objective, start, config, observer)
}

/// Maximizes the objective without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize_unobserved<O>(
    method: Method,
    objective: &O,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<2> + ?Sized,
{
    maximize(method, objective, start, config, ())
}

/// Optimizes in the direction of `G`, the entry point for both goals.
pub(crate) fn search<G, O, Obs>(
    method: Method,
    objective: &O,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Goal,
    O: Objective<2> + ?Sized,
    Obs: Observer<Event, Action>,
{
    if start.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteStart(start));
    }
    method.validate()?;

    let counted = Counted::new(objective);
    let score = |x: &[f64; 2]| G::transform(counted.value(x));

    let mut state = State::new::<G>(start, score(&start));

    for iter in 1..=config.max_iters() {
        let previous = state.score;

        let step = match method {
            Method::CoordinateDescent { alpha } => {
                coordinate::sweep(&score, &mut state, alpha, config.max_line_steps())
            }
            Method::Newton { fallback_step } => {
                newton::step(&score, &mut state, fallback_step, config)
            }
            Method::GradientDescent { learning_rate } => {
                gradient::step(&score, &mut state, learning_rate, config)
            }
        };
        state.record::<G>();

        let event = Event {
            iter,
            x: state.x,
            objective: state.objective::<G>(),
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution::<G>(Status::StoppedByObserver, iter, counted.count()));
        }

        if (state.score - previous).abs() < config.tolerance() {
            return Ok(state.into_solution::<G>(Status::Converged, iter, counted.count()));
        }
    }

    Ok(state.into_solution::<G>(Status::MaxIters, config.max_iters(), counted.count()))
}
