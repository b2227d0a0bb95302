/// Observes solver events and optionally returns a control action.
///
/// Every solver in the toolkit emits typed events (`E`) while it runs and
/// accepts solver-specific actions (`A`) in return, for example to stop
/// early. Observers are also the diagnostics channel: recording trajectories
/// or logging progress is done by an observer, never by the solver itself.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
