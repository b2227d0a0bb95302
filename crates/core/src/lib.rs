//! Core traits and types for the extremum optimization toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a pure function of `N` real variables
//! - [`Counted`]: an objective wrapper that counts evaluations
//! - [`Goal`]: the optimization direction ([`Minimize`] or [`Maximize`])
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Interval`], [`Bounds`]: validated search domains
//! - [`Sample`]: a point paired with its objective value
//!
//! The [`benchmarks`] module collects the reference functions used
//! throughout the test suites.

pub mod benchmarks;

mod bounds;
mod goal;
mod interval;
mod objective;
mod observer;
mod sample;

pub use bounds::{Bounds, BoundsError};
pub use goal::{Goal, Maximize, Minimize};
pub use interval::{Interval, IntervalError};
pub use objective::{Counted, Objective};
pub use observer::Observer;
pub use sample::Sample;
