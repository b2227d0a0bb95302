/// Errors that can occur during constrained optimization.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point must be finite, got {0:?}")]
    NonFiniteStart([f64; 2]),

    #[error("the barrier method needs a strictly feasible start, g({x:?}) = {residual}")]
    InfeasibleStart { x: [f64; 2], residual: f64 },

    #[error("coefficient factor {value} is out of range, expected {expected}")]
    InvalidFactor { value: f64, expected: &'static str },
}
