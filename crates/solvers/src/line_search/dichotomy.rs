use extremum_core::{Goal, Interval, Objective, Observer};

use super::{
    Action, Config, Event, Solution, Status,
    probe::{Probed, Prober},
};

/// Bisects the bracket using two probes placed `epsilon / 2` either side of
/// the midpoint.
///
/// Each step keeps the half containing the better probe, so the width goes
/// from `w` to `w / 2 + epsilon / 2`. The loop runs while the width exceeds
/// `2 * epsilon`. Ties keep the left part.
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
    let delta = 0.5 * config.epsilon();
    let [mut a, mut b] = interval.bounds();

    let mut iters = 0;
    while b - a > 2.0 * config.epsilon() {
        if iters == config.max_iters() {
            return prober.finish(Status::MaxIters, [a, b], iters);
        }

        let mid = 0.5 * (a + b);
        let (x1, x2) = (mid - delta, mid + delta);

        let Probed::Score(s1) = prober.probe::<G>(x1, [a, b]) else {
            return prober.finish(Status::StoppedByObserver, [a, b], iters);
        };
        let Probed::Score(s2) = prober.probe::<G>(x2, [a, b]) else {
            return prober.finish(Status::StoppedByObserver, [a, b], iters);
        };

        if s1 <= s2 {
            b = x2;
        } else {
            a = x1;
        }
        iters += 1;
    }

    prober.finish(Status::Converged, [a, b], iters)
}
