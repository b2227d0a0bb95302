//! Interior log barrier: `F(x) = score(f(x)) - μ · ln g(x)` inside `g > 0`.
//!
//! Outside the feasible region `F` is `+∞` and the objective is never
//! evaluated there. The weight `μ` shrinks by `factor` after every outer
//! iteration until it drops below `epsilon`.

use extremum_core::{Bounds, Goal, Objective};

use super::Error;

pub(super) fn merit<G, O, C>(objective: &O, constraint: &C, mu: f64, x: &[f64; 2]) -> f64
where
    G: Goal,
    O: Objective<2> + ?Sized,
    C: Objective<2> + ?Sized,
{
    let g = constraint.value(x);
    if g > 0.0 {
        G::transform(objective.value(x)) - mu * g.ln()
    } else {
        f64::INFINITY
    }
}

pub(super) fn is_done(mu: f64, epsilon: f64) -> bool {
    mu < epsilon
}

pub(super) fn validate(factor: f64) -> Result<(), Error> {
    if !factor.is_finite() || factor <= 0.0 || factor >= 1.0 {
        return Err(Error::InvalidFactor {
            value: factor,
            expected: "a factor in (0, 1)",
        });
    }
    Ok(())
}

/// Scans a uniform grid over `bounds` for a strictly feasible point.
///
/// The grid has `samples` points per axis (at least two, so both ends are
/// always included) and is scanned row by row in `x`, then `y`. Returns the
/// first point with `g > 0`, or `None` if the grid has none.
#[allow(clippy::cast_precision_loss)]
pub fn feasible_start<C>(constraint: &C, bounds: &Bounds<2>, samples: usize) -> Option<[f64; 2]>
where
    C: Objective<2> + ?Sized,
{
    let samples = samples.max(2);
    let coordinate = |axis: usize, i: usize| {
        let t = i as f64 / (samples - 1) as f64;
        bounds.lower()[axis] + t * bounds.width(axis)
    };

    (0..samples)
        .flat_map(|i| (0..samples).map(move |j| [coordinate(0, i), coordinate(1, j)]))
        .find(|x| constraint.value(x) > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use extremum_core::{Minimize, benchmarks::half_plane_constraint};

    #[test]
    fn merit_is_infinite_outside_without_calling_the_objective() {
        let objective = |_: &[f64; 2]| -> f64 { panic!("objective called outside") };

        let value = merit::<Minimize, _, _>(&objective, &half_plane_constraint, 1.0, &[2.0, 1.0]);

        assert_eq!(value, f64::INFINITY);
    }

    #[test]
    fn feasible_start_returns_the_first_grid_point_inside() {
        let bounds = Bounds::uniform(-1.0, 1.0).unwrap();
        assert_eq!(
            feasible_start(&half_plane_constraint, &bounds, 20),
            Some([-1.0, -1.0])
        );

        let upper_right = |x: &[f64; 2]| x[0] + x[1] - 1.4;
        let start = feasible_start(&upper_right, &bounds, 5).unwrap();
        assert_eq!(start, [0.5, 1.0]);
    }

    #[test]
    fn feasible_start_gives_up_on_an_empty_region() {
        let bounds = Bounds::uniform(-1.0, 1.0).unwrap();
        let nowhere = |_: &[f64; 2]| -1.0;
        assert_eq!(feasible_start(&nowhere, &bounds, 10), None);
    }
}
