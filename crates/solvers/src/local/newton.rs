use crate::finite_difference::Hessian2;

use super::{Config, event::StepKind, state::State};

/// One safeguarded Newton step on the score.
///
/// The Newton candidate `x - H⁻¹∇` is accepted only if it lowers the score.
/// Otherwise, and whenever `|det H|` is below the singular threshold, the
/// iterate takes a fixed gradient step of size `fallback_step` instead.
pub(super) fn step<S>(score: &S, state: &mut State, fallback_step: f64, config: &Config) -> StepKind
where
    S: Fn(&[f64; 2]) -> f64,
{
    let fd = config.finite_difference();
    let gradient = fd.gradient(score, &state.x);
    let hessian = Hessian2(fd.hessian(score, &state.x));

    if let Some([z0, z1]) = hessian.solve(gradient, config.singular_threshold()) {
        let candidate = [state.x[0] - z0, state.x[1] - z1];
        let candidate_score = score(&candidate);
        if candidate_score < state.score {
            state.move_to(candidate, candidate_score);
            return StepKind::Newton;
        }
    }

    let next = [
        state.x[0] - fallback_step * gradient[0],
        state.x[1] - fallback_step * gradient[1],
    ];
    state.move_to(next, score(&next));
    StepKind::Fallback
}
