use super::{event::StepKind, state::State};

/// One sweep of coordinate descent over both axes.
///
/// For each axis a trial step of `+alpha` picks the direction: if it is worse
/// than the current score the walk goes the other way. The walk then keeps
/// stepping while the score strictly improves, up to `max_line_steps` moves.
pub(super) fn sweep<S>(score: &S, state: &mut State, alpha: f64, max_line_steps: usize) -> StepKind
where
    S: Fn(&[f64; 2]) -> f64,
{
    for axis in 0..2 {
        let mut step = alpha;
        let mut trial = offset(state.x, axis, step);
        let mut trial_score = score(&trial);

        if trial_score > state.score {
            step = -alpha;
            trial = offset(state.x, axis, step);
            trial_score = score(&trial);
        }

        let mut moves = 0;
        while trial_score < state.score && moves < max_line_steps {
            state.move_to(trial, trial_score);
            moves += 1;
            trial = offset(state.x, axis, step);
            trial_score = score(&trial);
        }
    }

    StepKind::Coordinate
}

fn offset(mut x: [f64; 2], axis: usize, step: f64) -> [f64; 2] {
    x[axis] += step;
    x
}
