/// A point paired with its objective value.
///
/// Trajectories returned by the local and constrained solvers are sequences
/// of samples, and the global strategies report their best-so-far as one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<const N: usize> {
    /// The evaluated point.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub value: f64,
}

impl<const N: usize> Sample<N> {
    /// Creates a new sample.
    #[must_use]
    pub fn new(x: [f64; N], value: f64) -> Self {
        Self { x, value }
    }
}

/// Serializes as `{ "x": [..], "value": .. }`.
#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Sample<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Sample", 2)?;
        state.serialize_field("x", self.x.as_slice())?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}
