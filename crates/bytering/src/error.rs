use thiserror::Error;

/// Failure result of a ring buffer operation.
///
/// Each variant is returned synchronously by exactly the operations that
/// document it; on every failure the buffer state is unchanged. Retry
/// policy, if any, belongs to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// A byte insert was rejected because the usable capacity of `N - 1`
    /// bytes is exhausted.
    #[error("ring buffer is full")]
    Full,

    /// A byte removal was rejected because no bytes are stored.
    #[error("ring buffer is empty")]
    Empty,

    /// A string insert was rejected because the string plus its terminator
    /// byte does not fit in the available space. No partial write occurs.
    #[error("string and terminator exceed available space")]
    Overflow,

    /// A fixed-count removal asked for more bytes than are stored, or a
    /// peek index was at or past the number of stored bytes.
    #[error("requested range exceeds stored bytes")]
    OutOfRange,

    /// The destination slice for a string removal cannot hold the requested
    /// byte count plus the terminator byte.
    #[error("destination cannot hold string and terminator")]
    DestinationTooSmall,
}
