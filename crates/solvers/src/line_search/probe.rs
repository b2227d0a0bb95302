use extremum_core::{Counted, Goal, Objective, Observer};

use super::{Action, Event, Solution, Status};

/// Outcome of a single probe.
pub(super) enum Probed {
    /// The goal-transformed score to compare.
    Score(f64),

    /// The observer asked to stop.
    Stop,
}

/// Evaluates probes, reports them to the observer, and counts evaluations.
pub(super) struct Prober<'a, O: ?Sized, Obs> {
    objective: Counted<'a, O>,
    observer: Obs,
}

impl<'a, O, Obs> Prober<'a, O, Obs>
where
    O: Objective<1> + ?Sized,
    Obs: Observer<Event, Action>,
{
    pub(super) fn new(objective: &'a O, observer: Obs) -> Self {
        Self {
            objective: Counted::new(objective),
            observer,
        }
    }

    /// Evaluates `x`, emits an event, and applies the observer's action.
    pub(super) fn probe<G: Goal>(&mut self, x: f64, bracket: [f64; 2]) -> Probed {
        let objective = self.objective.value(&[x]);
        let event = Event {
            x,
            objective,
            bracket,
        };

        match self.observer.observe(&event) {
            Some(Action::StopEarly) => Probed::Stop,
            Some(Action::AssumeWorse) => Probed::Score(f64::INFINITY),
            None => Probed::Score(G::transform(objective)),
        }
    }

    /// Evaluates the midpoint of `bracket` and builds the solution.
    pub(super) fn finish(self, status: Status, bracket: [f64; 2], iters: usize) -> Solution {
        let x = 0.5 * (bracket[0] + bracket[1]);
        let objective = self.objective.value(&[x]);

        Solution {
            status,
            x,
            objective,
            bracket,
            evaluations: self.objective.count(),
            iters,
        }
    }
}
