//! Solvers for the extremum optimization toolkit.
//!
//! Every solver family follows the same shape: `minimize` and `maximize`
//! entry points generic over an [`Objective`](extremum_core::Objective),
//! a validated `Config`, typed events sent to an
//! [`Observer`](extremum_core::Observer), and a `Solution` reporting why the
//! search stopped and how many objective evaluations it used.
//!
//! # Modules
//!
//! - [`line_search`]: bracket reduction for single-variable functions
//! - [`finite_difference`]: central-difference gradients and Hessians
//! - [`local`]: coordinate descent, Newton and gradient descent in two variables
//! - [`constrained`]: penalty and barrier methods
//! - [`global`]: random search, simulated annealing, genetic algorithm and
//!   particle swarm
//! - [`runner`]: runs several of the above on one objective and compares them

pub mod constrained;
pub mod finite_difference;
pub mod global;
pub mod line_search;
pub mod local;
pub mod runner;
