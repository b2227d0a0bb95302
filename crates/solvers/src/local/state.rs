use extremum_core::{Goal, Sample};

use super::{Solution, Status};

/// The current iterate and its goal-transformed score.
pub(super) struct State {
    pub(super) x: [f64; 2],
    pub(super) score: f64,
    history: Vec<Sample<2>>,
}

impl State {
    pub(super) fn new<G: Goal>(x: [f64; 2], score: f64) -> Self {
        Self {
            x,
            score,
            history: vec![Sample::new(x, G::transform(score))],
        }
    }

    /// Moves to `x` with the given score.
    pub(super) fn move_to(&mut self, x: [f64; 2], score: f64) {
        self.x = x;
        self.score = score;
    }

    /// Objective value at the current iterate.
    ///
    /// Both goals transform by an involution, so transforming the score
    /// again recovers the objective.
    pub(super) fn objective<G: Goal>(&self) -> f64 {
        G::transform(self.score)
    }

    /// Appends the current iterate to the history.
    pub(super) fn record<G: Goal>(&mut self) {
        self.history.push(Sample::new(self.x, self.objective::<G>()));
    }

    pub(super) fn into_solution<G: Goal>(
        self,
        status: Status,
        iters: usize,
        evaluations: usize,
    ) -> Solution {
        Solution {
            status,
            x: self.x,
            objective: self.objective::<G>(),
            history: self.history,
            evaluations,
            iters,
        }
    }
}
