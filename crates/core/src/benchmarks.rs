//! Reference functions used to exercise the solvers.
//!
//! Every function has the `Fn(&[f64; N]) -> f64` shape, so it can be passed
//! to any solver directly as an [`Objective`](crate::Objective).

/// Peak heights of [`six_peaks`].
pub const SIX_PEAKS_HEIGHTS: [f64; 6] = [1.0, 1.2, 3.0, 3.2, 5.0, 5.0];

/// Peak centres of [`six_peaks`].
pub const SIX_PEAKS_CENTRES: [[f64; 2]; 6] = [
    [4.0, 4.0],
    [-4.0, 4.0],
    [4.0, -4.0],
    [-4.0, -4.0],
    [0.0, 0.0],
    [0.0, 0.0],
];

/// `(x - 7)²`, unimodal with its minimum at `x = 7`.
#[must_use]
pub fn shifted_parabola(x: &[f64; 1]) -> f64 {
    (x[0] - 7.0).powi(2)
}

/// Sum of two rational hills centred at `(2, 2)` and `(1, 1)`.
///
/// ```text
/// f(x, y) = 1 / (1 + ((x-2)/3)² + ((y-2)/3)²) + 3 / (1 + (x-1)² + ((y-1)/2)²)
/// ```
///
/// The taller hill dominates, so the global maximum lies close to `(1, 1)`.
#[must_use]
pub fn two_hills(x: &[f64; 2]) -> f64 {
    let [x, y] = *x;
    let broad = 1.0 / (1.0 + ((x - 2.0) / 3.0).powi(2) + ((y - 2.0) / 3.0).powi(2));
    let tall = 3.0 / (1.0 + (x - 1.0).powi(2) + ((y - 1.0) / 2.0).powi(2));
    broad + tall
}

/// Multimodal landscape `Σ Cᵢ / (1 + (x - aᵢ)² + (y - bᵢ)²)`.
///
/// Heights and centres are [`SIX_PEAKS_HEIGHTS`] and [`SIX_PEAKS_CENTRES`].
/// Two peaks coincide at the origin, which is the global maximum. The value
/// is strictly positive everywhere and never exceeds the sum of the heights.
#[must_use]
pub fn six_peaks(x: &[f64; 2]) -> f64 {
    SIX_PEAKS_HEIGHTS
        .iter()
        .zip(SIX_PEAKS_CENTRES.iter())
        .map(|(c, [a, b])| c / (1.0 + (x[0] - a).powi(2) + (x[1] - b).powi(2)))
        .sum()
}

/// Upper bound of [`six_peaks`]: the sum of its heights.
#[must_use]
pub fn six_peaks_ceiling() -> f64 {
    SIX_PEAKS_HEIGHTS.iter().sum()
}

/// `10 (y - x)² + y²`, the objective of the constrained test problem.
#[must_use]
pub fn valley(x: &[f64; 2]) -> f64 {
    let [x, y] = *x;
    10.0 * (y - x).powi(2) + y.powi(2)
}

/// Equality constraint `x + y - 2` used with [`valley`] by the penalty method.
#[must_use]
pub fn line_constraint(x: &[f64; 2]) -> f64 {
    x[0] - (2.0 - x[1])
}

/// Inequality constraint `2 - y - x > 0` used with [`valley`] by the barrier method.
#[must_use]
pub fn half_plane_constraint(x: &[f64; 2]) -> f64 {
    (2.0 - x[1]) - x[0]
}

/// The Rosenbrock function with its minimum at `(1, 1)`.
#[must_use]
pub fn rosenbrock(x: &[f64; 2]) -> f64 {
    let [x, y] = *x;
    100.0 * (y - x * x).powi(2) + (1.0 - x).powi(2)
}

/// Sum of squares, minimized at the origin.
#[must_use]
pub fn quadratic<const N: usize>(x: &[f64; N]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}
