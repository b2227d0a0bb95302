//! Central finite-difference derivatives.
//!
//! Gradients use the two-point stencil `(f(x + h eᵢ) - f(x - h eᵢ)) / 2h`.
//! Hessians use the three-point stencil on the diagonal and the four-point
//! cross stencil off the diagonal, so the result is symmetric by
//! construction.

use extremum_core::Objective;
use thiserror::Error;

/// Central-difference derivative estimator with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifference {
    step: f64,
}

/// Errors that can occur when constructing a [`FiniteDifference`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,
}

impl Default for FiniteDifference {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1e-4).unwrap()
    }
}

impl FiniteDifference {
    /// Creates an estimator with step `h`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-positive or non-finite.
    pub fn new(step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        Ok(Self { step })
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Estimates the gradient of `f` at `x`. Costs `2N` evaluations.
    pub fn gradient<O, const N: usize>(&self, f: &O, x: &[f64; N]) -> [f64; N]
    where
        O: Objective<N> + ?Sized,
    {
        let h = self.step;
        std::array::from_fn(|i| {
            let forward = f.value(&shifted(x, &[(i, h)]));
            let backward = f.value(&shifted(x, &[(i, -h)]));
            (forward - backward) / (2.0 * h)
        })
    }

    /// Estimates the Hessian of `f` at `x`.
    ///
    /// Costs `1 + 2N + 2N(N - 1)` evaluations: the centre once, two per
    /// diagonal entry, and four per off-diagonal pair.
    pub fn hessian<O, const N: usize>(&self, f: &O, x: &[f64; N]) -> [[f64; N]; N]
    where
        O: Objective<N> + ?Sized,
    {
        let h = self.step;
        let centre = f.value(x);
        let mut hessian = [[0.0; N]; N];

        for i in 0..N {
            let forward = f.value(&shifted(x, &[(i, h)]));
            let backward = f.value(&shifted(x, &[(i, -h)]));
            hessian[i][i] = (forward - 2.0 * centre + backward) / (h * h);

            for j in (i + 1)..N {
                let pp = f.value(&shifted(x, &[(i, h), (j, h)]));
                let pm = f.value(&shifted(x, &[(i, h), (j, -h)]));
                let mp = f.value(&shifted(x, &[(i, -h), (j, h)]));
                let mm = f.value(&shifted(x, &[(i, -h), (j, -h)]));
                let cross = (pp - pm - mp + mm) / (4.0 * h * h);
                hessian[i][j] = cross;
                hessian[j][i] = cross;
            }
        }

        hessian
    }
}

/// Returns `x` with each `(axis, delta)` offset applied.
fn shifted<const N: usize>(x: &[f64; N], offsets: &[(usize, f64)]) -> [f64; N] {
    let mut y = *x;
    for &(axis, delta) in offsets {
        y[axis] += delta;
    }
    y
}

/// A 2×2 symmetric matrix with closed-form determinant and solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hessian2(pub [[f64; 2]; 2]);

impl Hessian2 {
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Solves `H z = rhs` by Cramer's rule.
    ///
    /// Returns `None` when `|det| < singular_threshold`.
    #[must_use]
    pub fn solve(&self, rhs: [f64; 2], singular_threshold: f64) -> Option<[f64; 2]> {
        let det = self.determinant();
        if det.abs() < singular_threshold || !det.is_finite() {
            return None;
        }
        let [[a, b], [c, d]] = self.0;
        let [r0, r1] = rhs;
        Some([(d * r0 - b * r1) / det, (a * r1 - c * r0) / det])
    }
}

impl From<[[f64; 2]; 2]> for Hessian2 {
    fn from(matrix: [[f64; 2]; 2]) -> Self {
        Self(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use extremum_core::Counted;

    fn cubic(x: &[f64; 2]) -> f64 {
        x[0].powi(3) + 2.0 * x[0] * x[1] + x[1] * x[1]
    }

    #[test]
    fn gradient_of_cubic() {
        let fd = FiniteDifference::default();
        let [gx, gy] = fd.gradient(&cubic, &[1.0, 2.0]);

        // ∂f/∂x = 3x² + 2y, ∂f/∂y = 2x + 2y
        assert_relative_eq!(gx, 7.0, epsilon = 1e-6);
        assert_relative_eq!(gy, 6.0, epsilon = 1e-6);
    }

    #[test]
    fn hessian_of_cubic_is_symmetric() {
        let fd = FiniteDifference::new(1e-3).unwrap();
        let h = fd.hessian(&cubic, &[1.0, 2.0]);

        // f_xx = 6x, f_xy = 2, f_yy = 2
        assert_relative_eq!(h[0][0], 6.0, epsilon = 1e-4);
        assert_relative_eq!(h[0][1], 2.0, epsilon = 1e-4);
        assert_relative_eq!(h[1][1], 2.0, epsilon = 1e-4);
        assert_eq!(h[0][1], h[1][0]);
    }

    #[test]
    fn evaluation_costs() {
        let fd = FiniteDifference::default();
        let counted = Counted::new(&cubic);

        fd.gradient(&counted, &[0.0, 0.0]);
        assert_eq!(counted.count(), 4);

        fd.hessian(&counted, &[0.0, 0.0]);
        assert_eq!(counted.count(), 4 + 9);
    }

    #[test]
    fn gradient_in_three_dimensions() {
        let f = |x: &[f64; 3]| x[0] * x[0] + 3.0 * x[1] - x[2] * x[0];
        let g = FiniteDifference::default().gradient(&f, &[1.0, 0.0, 2.0]);

        assert_relative_eq!(g[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(g[1], 3.0, epsilon = 1e-6);
        assert_relative_eq!(g[2], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn solve_two_by_two() {
        let h = Hessian2([[4.0, 1.0], [1.0, 3.0]]);
        assert_relative_eq!(h.determinant(), 11.0);

        let [z0, z1] = h.solve([1.0, 2.0], 1e-10).unwrap();
        assert_relative_eq!(4.0 * z0 + z1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(z0 + 3.0 * z1, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_solution() {
        let h = Hessian2([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(h.solve([1.0, 1.0], 1e-10), None);
    }

    #[test]
    fn invalid_step_is_rejected() {
        assert_eq!(FiniteDifference::new(0.0), Err(ConfigError::Step));
        assert_eq!(FiniteDifference::new(f64::NAN), Err(ConfigError::Step));
    }
}
