//! Reusable observers for the extremum optimization toolkit.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver family in `extremum-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`Trace`]: logs every event through `tracing` at debug level
//! - [`Stall`]: stops a solver once the best objective stops improving
//!
//! [`Observer`]: extremum_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod stall;
mod trace;

pub use stall::Stall;
pub use trace::Trace;
