//! Error types for directbuf.

use std::fmt;

/// Errors that can occur while binding or accessing a [`DirectBuffer`].
///
/// [`DirectBuffer`]: crate::DirectBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The requested limit lies beyond the bound region and no growth
    /// strategy could satisfy it.
    OutOfRange {
        /// The exclusive end offset that was requested.
        limit: usize,
        /// The capacity of the bound region at the time of the request.
        capacity: usize,
    },

    /// The handle has never been bound to a region.
    Unbound,

    /// The handle has been disposed and can no longer be used.
    Disposed,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl BufferError {
    /// Returns true if this is an out-of-range access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, BufferError::OutOfRange { .. })
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfRange { limit, capacity } => {
                write!(f, "index out of range: limit {} exceeds capacity {}", limit, capacity)
            }
            BufferError::Unbound => write!(f, "buffer is not bound to a region"),
            BufferError::Disposed => write!(f, "buffer has been disposed"),
            BufferError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BufferError {}
