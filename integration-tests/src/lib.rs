//! Shared fixtures for the cross-crate tests.

use extremum_core::Bounds;
use rand::{SeedableRng, rngs::StdRng};

/// Tolerances `1e-1` through `1e-7`.
pub const TOLERANCES: [f64; 7] = [1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7];

/// The bracket used throughout the line-search tests.
pub const BRACKET: [f64; 2] = [-2.0, 20.0];

/// The `[-10, 10]²` box used by the global tests.
#[must_use]
pub fn square() -> Bounds<2> {
    // Known-good values, unwrap is safe
    Bounds::uniform(-10.0, 10.0).unwrap()
}

#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
