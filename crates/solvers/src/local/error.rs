/// Errors that can occur during local optimization.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point must be finite, got {0:?}")]
    NonFiniteStart([f64; 2]),

    #[error("{name} must be finite and positive, got {value}")]
    InvalidStep { name: &'static str, value: f64 },
}
