use extremum_core::Goal;

/// The outcome of one task.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub name: &'static str,
    pub x: [f64; 2],
    pub objective: f64,
    pub evaluations: usize,
    pub iters: usize,
}

/// Results of a [`Runner`](super::Runner) in task order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    pub entries: Vec<Entry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    best: Option<usize>,
}

impl Comparison {
    pub(super) fn new<G: Goal>(entries: Vec<Entry>) -> Self {
        let best = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.objective.is_nan())
            .fold(None, |best: Option<(usize, f64)>, (index, entry)| match best {
                Some((_, value)) if !G::is_better(entry.objective, value) => best,
                _ => Some((index, entry.objective)),
            })
            .map(|(index, _)| index);

        Self { entries, best }
    }

    /// The best entry for the goal the runner used.
    ///
    /// Ties go to the earlier task. Returns `None` when there are no entries
    /// or every objective is NaN.
    #[must_use]
    pub fn best(&self) -> Option<&Entry> {
        self.best.map(|index| &self.entries[index])
    }
}
