use thiserror::Error;

/// Validation failures raised by the grid engine.
///
/// Every variant is a synchronous, local rejection; nothing is retried
/// internally. Callers (the menu layer) are expected to re-prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of bounds: ({x}, {y}) exceeds grid dimensions")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Invariant violation: route passes through an obstacle at ({x}, {y})")]
    InvariantViolation { x: i32, y: i32 },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Activity ended in the same instant it started; average speed is undefined")]
    ZeroDuration,
}

pub type Result<T> = std::result::Result<T, GridError>;
