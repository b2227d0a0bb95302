use extremum_core::{Goal, Interval, Objective, Observer};

use super::{
    Action, Config, Event, Solution, Status,
    bracket::GoldenBracket,
    probe::{Probed, Prober},
};

/// Golden section search.
///
/// Evaluates both interior points once, then one new point per step. The
/// loop runs while the bracket is wider than `epsilon`. Ties shrink the
/// right side.
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
    let mut bracket = GoldenBracket::new(interval.bounds());

    let Probed::Score(mut left_score) = prober.probe::<G>(bracket.inner_left, bracket.bounds())
    else {
        return prober.finish(Status::StoppedByObserver, bracket.bounds(), 0);
    };
    let Probed::Score(mut right_score) = prober.probe::<G>(bracket.inner_right, bracket.bounds())
    else {
        return prober.finish(Status::StoppedByObserver, bracket.bounds(), 0);
    };

    let mut iters = 0;
    while bracket.width() > config.epsilon() {
        if iters == config.max_iters() {
            return prober.finish(Status::MaxIters, bracket.bounds(), iters);
        }

        if left_score <= right_score {
            let x = bracket.shrink_right();
            right_score = left_score;
            let Probed::Score(score) = prober.probe::<G>(x, bracket.bounds()) else {
                return prober.finish(Status::StoppedByObserver, bracket.bounds(), iters + 1);
            };
            left_score = score;
        } else {
            let x = bracket.shrink_left();
            left_score = right_score;
            let Probed::Score(score) = prober.probe::<G>(x, bracket.bounds()) else {
                return prober.finish(Status::StoppedByObserver, bracket.bounds(), iters + 1);
            };
            right_score = score;
        }
        iters += 1;
    }

    prober.finish(Status::Converged, bracket.bounds(), iters)
}
