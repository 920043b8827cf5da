use thiserror::Error;

/// Errors reported by ring buffer operations.
///
/// Every error is returned to the immediate caller; the buffer never retries
/// or recovers from a full or empty condition on its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `put` was called on a full buffer. Nothing was written.
    #[error("ring buffer is full")]
    OutOfBounds,

    /// `get` was called on an empty buffer. Nothing was read.
    #[error("ring buffer is empty")]
    NoData,

    /// The backing store for the requested capacity could not be allocated.
    #[error("failed to allocate backing store for capacity {capacity}")]
    AllocFailed {
        /// Capacity that was requested
        capacity: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::OutOfBounds.to_string(), "ring buffer is full");
        assert_eq!(Error::NoData.to_string(), "ring buffer is empty");
        assert_eq!(
            Error::AllocFailed { capacity: 7 }.to_string(),
            "failed to allocate backing store for capacity 7"
        );
    }
}
