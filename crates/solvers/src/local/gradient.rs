use super::{Config, event::StepKind, state::State};

/// One fixed-rate gradient descent step on the score.
pub(super) fn step<S>(score: &S, state: &mut State, learning_rate: f64, config: &Config) -> StepKind
where
    S: Fn(&[f64; 2]) -> f64,
{
    let [gx, gy] = config.finite_difference().gradient(score, &state.x);
    let next = [state.x[0] - learning_rate * gx, state.x[1] - learning_rate * gy];
    state.move_to(next, score(&next));
    StepKind::Gradient
}
