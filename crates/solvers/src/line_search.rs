//! Bracket-reduction line search for single-variable optimization.
//!
//! # Algorithm
//!
//! Every method shrinks a bracket `[a, b]` that is assumed to contain a
//! single optimum, comparing interior probes and discarding the part that
//! cannot contain the better one. The reported point is always the midpoint
//! of the final bracket, evaluated once more for the reported objective.
//!
//! # Methods
//!
//! - [`Method::Dichotomy`]: two probes `epsilon / 2` either side of the
//!   midpoint, roughly halving the bracket per step
//! - [`Method::GoldenSection`]: interior points at the golden ratio, one new
//!   evaluation per step
//! - [`Method::Fibonacci`]: interior points at Fibonacci ratios with the
//!   number of steps fixed up front, the most economical of the three
//! - [`Method::Passive`]: a uniform grid with no adaptivity
//!
//! All methods stop once the bracket is no wider than `2 * epsilon`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per probe. Observers can return
//! [`Action::StopEarly`] to halt immediately, or [`Action::AssumeWorse`] to
//! treat the probe as worse than any other.

mod action;
mod bracket;
mod config;
mod dichotomy;
mod error;
mod event;
mod fibonacci;
mod golden_section;
mod passive;
mod probe;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use fibonacci::fibonacci_index;
pub use solution::{Solution, Status};

use extremum_core::{Goal, Interval, Maximize, Minimize, Objective, Observer};

use probe::Prober;

/// Bracket-reduction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Dichotomy,
    GoldenSection,
    Fibonacci,
    Passive,
}

impl Method {
    /// All methods, in order of introduction.
    pub const ALL: [Method; 4] = [
        Method::Dichotomy,
        Method::GoldenSection,
        Method::Fibonacci,
        Method::Passive,
    ];
}

/// Finds the minimum of the objective on `bracket`.
///
/// See the [module docs](self) for details on the methods and observer actions.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `bracket[0] >= bracket[1]` or either
/// bound is non-finite, and [`Error::ToleranceTooFine`] if a Fibonacci
/// search would need more steps than can be counted.
pub fn minimize<O, Obs>(
    method: Method,
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Minimize, _, _>(method, objective, bracket, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<O>(
    method: Method,
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<1> + ?Sized,
{
    minimize(method, objective, bracket, config, ())
}

/// Finds the maximum of the objective on `bracket`.
///
/// See the [module docs](self) for details on the methods and observer actions.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<O, Obs>(
    method: Method,
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::<Maximize, _, _>(method, objective, bracket, config, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize_unobserved<O>(
    method: Method,
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<1> + ?Sized,
{
    maximize(method, objective, bracket, config, ())
}

/// Validates the bracket and dispatches to the selected method.
fn search<G, O, Obs>(
    method: Method,
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Goal,
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    let prober = Prober::new(objective, observer);

    Ok(match method {
        Method::Dichotomy => dichotomy::search::<G, _, _>(prober, interval, config),
        Method::GoldenSection => golden_section::search::<G, _, _>(prober, interval, config),
        Method::Fibonacci => fibonacci::search::<G, _, _>(prober, interval, config)?,
        Method::Passive => passive::search::<G, _, _>(prober, interval, config),
    })
}
