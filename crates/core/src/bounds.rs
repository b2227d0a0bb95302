use thiserror::Error;

/// An axis-aligned box `lower[i] <= x[i] <= upper[i]` in `N` dimensions.
///
/// Global strategies sample inside the box and clip every candidate back
/// into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("bounds on axis {axis} must be finite")]
    NonFinite { axis: usize },

    #[error("lower bound must be below upper bound on axis {axis}")]
    Empty { axis: usize },

    #[error("width of axis {axis} overflows")]
    TooWide { axis: usize },
}

impl<const N: usize> Bounds<N> {
    /// Creates validated bounds from per-axis lower and upper limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is non-finite, if any axis has
    /// `lower >= upper`, or if `upper - lower` overflows to infinity.
    pub fn new(lower: [f64; N], upper: [f64; N]) -> Result<Self, BoundsError> {
        for axis in 0..N {
            let (lo, hi) = (lower[axis], upper[axis]);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(BoundsError::NonFinite { axis });
            }
            if lo >= hi {
                return Err(BoundsError::Empty { axis });
            }
            if !(hi - lo).is_finite() {
                return Err(BoundsError::TooWide { axis });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates bounds with the same `[lower, upper]` range on every axis.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Bounds::new`].
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, BoundsError> {
        Self::new([lower; N], [upper; N])
    }

    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Returns the width of the box along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[must_use]
    pub fn width(&self, axis: usize) -> f64 {
        self.upper[axis] - self.lower[axis]
    }

    /// Clips each coordinate of `x` into the box.
    #[must_use]
    pub fn clamp(&self, x: [f64; N]) -> [f64; N] {
        std::array::from_fn(|i| x[i].clamp(self.lower[i], self.upper[i]))
    }

    /// Returns true if `x` lies inside the closed box.
    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        (0..N).all(|i| self.lower[i] <= x[i] && x[i] <= self.upper[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_projects_onto_the_box() {
        let bounds = Bounds::new([-10.0, 0.0], [10.0, 1.0]).unwrap();

        assert_eq!(bounds.clamp([12.0, 0.5]), [10.0, 0.5]);
        assert_eq!(bounds.clamp([-11.0, -3.0]), [-10.0, 0.0]);
        assert!(bounds.contains(&bounds.clamp([1e9, -1e9])));
    }

    #[test]
    fn uniform_applies_to_every_axis() {
        let bounds = Bounds::<3>::uniform(-1.0, 2.0).unwrap();

        assert_eq!(bounds.lower(), &[-1.0; 3]);
        assert_eq!(bounds.upper(), &[2.0; 3]);
        assert_eq!(bounds.width(2), 3.0);
    }

    #[test]
    fn invalid_axes_are_reported() {
        assert_eq!(
            Bounds::new([0.0, 5.0], [1.0, 5.0]),
            Err(BoundsError::Empty { axis: 1 })
        );
        assert_eq!(
            Bounds::new([f64::NAN], [1.0]),
            Err(BoundsError::NonFinite { axis: 0 })
        );
    }

    #[test]
    fn overflowing_width_is_rejected() {
        assert_eq!(
            Bounds::<2>::uniform(-1e308, 1e308),
            Err(BoundsError::TooWide { axis: 0 })
        );
        assert_eq!(
            Bounds::new([0.0, -f64::MAX], [1.0, f64::MAX]),
            Err(BoundsError::TooWide { axis: 1 })
        );

        let wide = Bounds::<1>::uniform(-1e307, 1e307).unwrap();
        assert_eq!(wide.width(0), 2e307);
    }
}
