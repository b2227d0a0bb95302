use std::fmt::Debug;

use extremum_core::Observer;

use crate::traits::HasObjective;

/// Logs every solver event through `tracing` and never intervenes.
///
/// Events are emitted at `DEBUG` level with the label, the objective value,
/// and the event itself in `Debug` form.
///
/// # Example
///
/// ```
/// use extremum_core::benchmarks::shifted_parabola;
/// use extremum_observers::Trace;
/// use extremum_solvers::line_search::{self, Config, Method};
///
/// let solution = line_search::minimize(
///     Method::Fibonacci,
///     &shifted_parabola,
///     [-2.0, 20.0],
///     &Config::default(),
///     Trace::new("fibonacci"),
/// )
/// .unwrap();
///
/// assert!((solution.x - 7.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    label: &'static str,
}

impl Trace {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasObjective + Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            solver = self.label,
            objective = event.objective(),
            event = ?event,
            "event"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use extremum_core::benchmarks::{shifted_parabola, two_hills};
    use extremum_solvers::{line_search, local};

    fn with_test_subscriber<T>(f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    #[test]
    fn tracing_does_not_change_a_line_search() {
        let config = line_search::Config::default();
        let method = line_search::Method::GoldenSection;

        let plain =
            line_search::minimize_unobserved(method, &shifted_parabola, [-2.0, 20.0], &config)
                .unwrap();
        let traced = with_test_subscriber(|| {
            line_search::minimize(
                method,
                &shifted_parabola,
                [-2.0, 20.0],
                &config,
                Trace::new("golden"),
            )
            .unwrap()
        });

        assert_eq!(plain, traced);
    }

    #[test]
    fn tracing_does_not_change_a_local_search() {
        let config = local::Config::default();
        let method = local::Method::NEWTON;

        let plain = local::maximize_unobserved(method, &two_hills, [0.0, 0.0], &config).unwrap();
        let traced = with_test_subscriber(|| {
            local::maximize(method, &two_hills, [0.0, 0.0], &config, Trace::new("newton"))
                .unwrap()
        });

        assert_eq!(plain, traced);
    }
}
