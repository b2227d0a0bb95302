/// Coordinate probe-and-step search on a transformed objective.
///
/// Each inner iteration probes `±alpha` along each axis in turn and moves to
/// the better probe if it beats the current value. The search stops once an
/// iteration changes the value by less than `epsilon`, or after `max_inner`
/// iterations. `visit` sees the point after every iteration.
pub(super) fn descend<F>(
    merit: &F,
    mut x: [f64; 2],
    alpha: f64,
    epsilon: f64,
    max_inner: usize,
    mut visit: impl FnMut([f64; 2]),
) -> [f64; 2]
where
    F: Fn(&[f64; 2]) -> f64,
{
    let mut current = merit(&x);

    for _ in 0..max_inner {
        let previous = current;

        for axis in 0..2 {
            let mut plus = x;
            plus[axis] += alpha;
            let mut minus = x;
            minus[axis] -= alpha;

            let (plus_value, minus_value) = (merit(&plus), merit(&minus));
            if plus_value < current && plus_value <= minus_value {
                x = plus;
                current = plus_value;
            } else if minus_value < current {
                x = minus;
                current = minus_value;
            }
        }
        visit(x);

        if (previous - current).abs() < epsilon {
            break;
        }
    }

    x
}
