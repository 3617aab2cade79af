use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("index range start={start}, end={end} is invalid for sequence of length {len}")]
    OutOfBoundsRange { start: usize, end: usize, len: usize },

    #[error("sequence is not sorted ascending at index {index}")]
    UnsortedInputViolation { index: usize },

    #[error("invalid range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("minimum span {minimum_span} exceeds available range width {available}")]
    UnsatisfiableMinimumSpan { minimum_span: f64, available: f64 },
}
