use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, search::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Represents the ways a checked search can refuse its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raised when the sequence handed to a binary search is not in non-decreasing order. `index`
    /// is the first position holding an element smaller than the one before it.
    Unsorted { index: usize },
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Unsorted { index } => write!(
                f,
                "Unsorted Input: element at index {index} is smaller than its predecessor"
            ),
        }
    }
}
