use extremum_core::{Goal, Interval, Objective, Observer};

use super::{
    Action, Config, Error, Event, Solution, Status,
    probe::{Probed, Prober},
};

/// Returns the smallest `n` with `F_n > ratio`, together with `F_n`.
///
/// The sequence starts `F_0 = F_1 = 1`. Returns `None` if `F_n` would not
/// fit in a `u64`.
///
/// ```
/// use extremum_solvers::line_search::fibonacci_index;
///
/// // A bracket of width 22 searched to within 0.001.
/// assert_eq!(fibonacci_index(22.0 / 0.001), Some((22, 28_657)));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fibonacci_index(ratio: f64) -> Option<(usize, u64)> {
    // NaN fails every comparison and would report n = 0.
    if ratio.is_nan() {
        return None;
    }

    let (mut prev, mut current) = (1_u64, 1_u64);
    let mut n = 0;

    while current as f64 <= ratio {
        if n > 0 {
            let next = prev.checked_add(current)?;
            prev = current;
            current = next;
        }
        n += 1;
    }

    Some((n, current))
}

/// Fibonacci search.
///
/// Picks `n` so that `F_n > width / epsilon` and places the probes at the
/// Fibonacci ratios `F_{n-k-2} / F_{n-k}` and `F_{n-k-1} / F_{n-k}` of the
/// current bracket. After two initial probes and `n - 3` single-probe steps,
/// a final comparison without a new evaluation leaves a bracket of width
/// `2 * width / F_n`. Together with the reporting evaluation that makes
/// exactly `n` evaluations.
pub(super) fn search<G, O, Obs>(
    mut prober: Prober<'_, O, Obs>,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error>
where
    G: Goal,
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [mut a, mut b] = interval.bounds();
    let ratio = interval.width() / config.epsilon();

    let (n, _) = fibonacci_index(ratio).ok_or(Error::ToleranceTooFine { ratio })?;
    if n < 3 {
        // Already narrower than 2 * epsilon.
        return Ok(prober.finish(Status::Converged, [a, b], 0));
    }

    let fib = sequence(n);
    let width = b - a;
    let mut x1 = a + fib[n - 2] / fib[n] * width;
    let mut x2 = a + fib[n - 1] / fib[n] * width;

    let Probed::Score(mut s1) = prober.probe::<G>(x1, [a, b]) else {
        return Ok(prober.finish(Status::StoppedByObserver, [a, b], 0));
    };
    let Probed::Score(mut s2) = prober.probe::<G>(x2, [a, b]) else {
        return Ok(prober.finish(Status::StoppedByObserver, [a, b], 0));
    };

    let mut iters = 0;
    for k in 1..=n - 3 {
        if iters == config.max_iters() {
            return Ok(prober.finish(Status::MaxIters, [a, b], iters));
        }
        iters += 1;

        if s1 <= s2 {
            b = x2;
            x2 = x1;
            s2 = s1;
            x1 = a + fib[n - k - 2] / fib[n - k] * (b - a);
            let Probed::Score(score) = prober.probe::<G>(x1, [a, b]) else {
                return Ok(prober.finish(Status::StoppedByObserver, [a, b], iters));
            };
            s1 = score;
        } else {
            a = x1;
            x1 = x2;
            s1 = s2;
            x2 = a + fib[n - k - 1] / fib[n - k] * (b - a);
            let Probed::Score(score) = prober.probe::<G>(x2, [a, b]) else {
                return Ok(prober.finish(Status::StoppedByObserver, [a, b], iters));
            };
            s2 = score;
        }
    }

    if s1 <= s2 {
        b = x2;
    } else {
        a = x1;
    }

    Ok(prober.finish(Status::Converged, [a, b], iters + 1))
}

/// Returns `F_0..=F_n` as floats.
fn sequence(n: usize) -> Vec<f64> {
    let mut fib = vec![1.0; n + 1];
    for i in 2..=n {
        fib[i] = fib[i - 1] + fib[i - 2];
    }
    fib
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_for_small_ratios() {
        assert_eq!(fibonacci_index(0.5), Some((0, 1)));
        assert_eq!(fibonacci_index(1.0), Some((2, 2)));
        assert_eq!(fibonacci_index(2.0), Some((3, 3)));
        assert_eq!(fibonacci_index(7.9), Some((5, 8)));
        assert_eq!(fibonacci_index(8.0), Some((6, 13)));
    }

    #[test]
    fn index_rejects_unrepresentable_ratios() {
        assert_eq!(fibonacci_index(f64::INFINITY), None);
        assert_eq!(fibonacci_index(f64::NAN), None);
    }

    #[test]
    fn sequence_matches_index() {
        let fib = sequence(22);
        assert_eq!(fib[22], 28_657.0);
        assert_eq!(fib[21], 17_711.0);
    }
}
