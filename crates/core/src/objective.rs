use std::cell::Cell;

/// A real-valued objective function of `N` variables.
///
/// Objectives must be deterministic and side-effect free, always producing
/// the same value for a given point. Solvers may evaluate them any number of
/// times and rely on this to reuse values between iterations.
///
/// Callers are responsible for supplying objectives that are finite over the
/// region a solver will probe.
///
/// The trait is implemented for every `Fn(&[f64; N]) -> f64`, so closures and
/// plain functions can be passed directly:
///
/// ```
/// use extremum_core::Objective;
///
/// let parabola = |x: &[f64; 1]| (x[0] - 7.0).powi(2);
/// assert_eq!(parabola.value(&[7.0]), 0.0);
/// ```
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;
}

impl<F, const N: usize> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}

/// An objective wrapper that counts how many times it has been evaluated.
///
/// Solvers wrap the caller's objective in a `Counted` for the duration of a
/// single call and report the final count in their solution. The counter is
/// only used for reporting and never drives control flow.
#[derive(Debug)]
pub struct Counted<'a, O: ?Sized> {
    inner: &'a O,
    count: Cell<usize>,
}

impl<'a, O: ?Sized> Counted<'a, O> {
    /// Wraps an objective with a zeroed counter.
    pub fn new(inner: &'a O) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    /// Returns the number of evaluations so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Returns the wrapped objective.
    pub fn inner(&self) -> &'a O {
        self.inner
    }
}

impl<O, const N: usize> Objective<N> for Counted<'_, O>
where
    O: Objective<N> + ?Sized,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self.count.set(self.count.get() + 1);
        self.inner.value(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sphere(x: &[f64; 2]) -> f64 {
        x[0] * x[0] + x[1] * x[1]
    }

    #[test]
    fn plain_functions_are_objectives() {
        assert_relative_eq!(sphere.value(&[3.0, 4.0]), 25.0);
    }

    #[test]
    fn counted_tracks_every_call() {
        let counted = Counted::new(&sphere);
        assert_eq!(counted.count(), 0);

        counted.value(&[1.0, 0.0]);
        counted.value(&[0.0, 1.0]);
        counted.value(&[1.0, 1.0]);

        assert_eq!(counted.count(), 3);
    }

    #[test]
    fn counted_can_be_nested() {
        let offset = 2.0;
        let shifted = |x: &[f64; 1]| x[0] + offset;
        let inner = Counted::new(&shifted);
        let outer = Counted::new(&inner);

        assert_relative_eq!(outer.value(&[1.0]), 3.0);
        assert_relative_eq!(outer.value(&[2.0]), 4.0);
        assert_eq!(outer.count(), 2);
        assert_eq!(inner.count(), 2);
    }
}
