//! Status values returned by list operations.
//!
//! Every condition here is local and recoverable: the list is left exactly
//! as it was before the call that reported it.

/// Why a positional or value-addressed operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The list has no nodes.
    #[error("list is empty")]
    Empty,
    /// The position is at or past the end of the list.
    #[error("position {position} exceeds list size {len}")]
    OutOfRange {
        /// Requested zero-based position.
        position: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// A scan reached the end of the list without a match.
    #[error("value not found")]
    ValueNotFound,
}

/// A positional insert was rejected because `position > len`.
///
/// Carries the value back so the caller can retry, for example with
/// `push_back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {position} exceeds list size {len}")]
pub struct OutOfRange<T> {
    /// The value that was not inserted.
    pub value: T,
    /// Requested zero-based position.
    pub position: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl<T> OutOfRange<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<OutOfRange<T>> for ListError {
    fn from(err: OutOfRange<T>) -> Self {
        ListError::OutOfRange {
            position: err.position,
            len: err.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ListError::Empty.to_string(), "list is empty");
        assert_eq!(ListError::ValueNotFound.to_string(), "value not found");
        assert_eq!(
            ListError::OutOfRange { position: 5, len: 2 }.to_string(),
            "position 5 exceeds list size 2"
        );
    }

    #[test]
    fn rejected_insert_returns_value() {
        let err = OutOfRange {
            value: "x",
            position: 3,
            len: 1,
        };
        assert_eq!(err.to_string(), "position 3 exceeds list size 1");
        assert_eq!(
            ListError::from(err),
            ListError::OutOfRange { position: 3, len: 1 }
        );
        assert_eq!(err.into_inner(), "x");
    }
}
