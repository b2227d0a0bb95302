//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a constraint residual
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use extremum_core::Observer;
//! use extremum_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Target {
//!     value: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Target {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() >= self.value).then(A::stop_early)
//!     }
//! }
//! ```

use extremum_solvers::{constrained, global, line_search, local};

/// An event that carries a constraint residual.
pub trait HasResidual {
    /// Returns the constraint value `g(x)` for this event.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

// --- HasObjective impls ---

impl HasObjective for line_search::Event {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasObjective for local::Event {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasObjective for constrained::Event {
    fn objective(&self) -> f64 {
        self.objective
    }
}

/// The objective of the best sample found so far.
impl<const N: usize> HasObjective for global::Event<N> {
    fn objective(&self) -> f64 {
        self.best.value
    }
}

// --- HasResidual for constrained::Event ---

impl HasResidual for constrained::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for line_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for local::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for constrained::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for global::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanAssumeWorse for line_search::Action ---

impl CanAssumeWorse for line_search::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
