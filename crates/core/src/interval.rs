use thiserror::Error;

/// A closed, finite search interval `[a, b]` with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bounds must be finite, got [{a}, {b}]")]
    NonFinite { a: f64, b: f64 },

    #[error("interval lower bound must be below the upper bound, got [{a}, {b}]")]
    Empty { a: f64, b: f64 },
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Unlike a raw bracket, an `Interval` is never silently reordered.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if `a >= b`.
    pub fn new(a: f64, b: f64) -> Result<Self, IntervalError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(IntervalError::NonFinite { a, b });
        }
        if a >= b {
            return Err(IntervalError::Empty { a, b });
        }
        Ok(Self { a, b })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.a
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }

    /// Returns the bounds as `[a, b]`.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.a, self.b]
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([a, b]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}
