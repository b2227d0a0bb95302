use extremum_core::IntervalError;

/// Errors that can occur during a line search.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] IntervalError),

    #[error("tolerance too fine for Fibonacci search: width / epsilon = {ratio}")]
    ToleranceTooFine { ratio: f64 },
}
