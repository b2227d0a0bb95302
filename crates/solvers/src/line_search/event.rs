/// Emitted after every probe evaluation.
///
/// The final evaluation at the reported point is not a probe and produces
/// no event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The probed point.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// The bracket the probe was taken in.
    pub bracket: [f64; 2],
}
