use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` is not a positive integer")]
    NotPositive(String),
    #[error("`{0}` does not fit in a 32-bit integer")]
    OutOfRange(String),
    /// The two layouts produced different output, which means the sort is broken.
    #[error("sorting results mismatch between Vec and VecDeque at index {index}")]
    Mismatch { index: usize },
}
