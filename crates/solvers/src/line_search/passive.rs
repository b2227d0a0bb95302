use extremum_core::{Goal, Interval, Objective, Observer};

use super::{
    Action, Config, Event, Solution, Status,
    probe::{Probed, Prober},
};

/// Passive (uniform grid) search.
///
/// Splits the bracket into `ceil(width / epsilon) + 1` intervals, so the grid
/// step is strictly below `epsilon`, and evaluates every grid point including
/// both ends. Reports the bracket formed by the best point's grid neighbours,
/// which is therefore narrower than `2 * epsilon`.
/// If that many intervals would exceed `max_iters`, the grid is coarsened
/// to `max_iters` intervals and the status is [`Status::MaxIters`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(super) fn search<G, O, Obs>(
    mut prober: Prober<'_, O, Obs>,
    interval: Interval,
    config: &Config,
) -> Solution
where
    G: Goal,
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [a, b] = interval.bounds();

    let wanted = (interval.width() / config.epsilon()).ceil() as usize + 1;
    let (intervals, status) = if wanted > config.max_iters() {
        (config.max_iters().max(1), Status::MaxIters)
    } else {
        (wanted.max(1), Status::Converged)
    };
    let step = interval.width() / intervals as f64;
    let grid = |i: usize| if i == intervals { b } else { a + i as f64 * step };

    let mut best: Option<(usize, f64)> = None;
    for i in 0..=intervals {
        let Probed::Score(score) = prober.probe::<G>(grid(i), [a, b]) else {
            let bracket = best.map_or([a, b], |(j, _)| neighbours(j, intervals, grid));
            return prober.finish(Status::StoppedByObserver, bracket, i);
        };
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((i, score));
        }
    }

    let bracket = best.map_or([a, b], |(j, _)| neighbours(j, intervals, grid));
    prober.finish(status, bracket, intervals)
}

/// Returns the grid points either side of `i`, clamped to the ends.
fn neighbours(i: usize, intervals: usize, grid: impl Fn(usize) -> f64) -> [f64; 2] {
    [grid(i.saturating_sub(1)), grid((i + 1).min(intervals))]
}
