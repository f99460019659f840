//! Configuration for self-growing buffers.
//!
//! [`BufferConfig`] describes an owned region that starts at
//! `initial_capacity` bytes and may grow, by powers of two, up to
//! `max_capacity` bytes.
//!
//! # Example
//!
//! ```
//! use directbuf::{BufferConfig, DirectBuffer};
//!
//! let config = BufferConfig::new(64, 4096)?;
//! let mut buffer = DirectBuffer::with_config(config)?;
//!
//! // Writing past 64 bytes grows the region to the next power of two.
//! buffer.put_u64_le(64, 7)?;
//! assert_eq!(buffer.capacity(), 128);
//! # Ok::<(), directbuf::BufferError>(())
//! ```

use crate::error::BufferError;

/// Default initial capacity (4 KiB).
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Default maximum capacity (1 GiB).
pub const DEFAULT_MAX_CAPACITY: usize = 1024 * 1024 * 1024;

/// Capacity bounds for an owned, self-growing buffer.
///
/// Constraints: both sizes non-zero, `initial_capacity <= max_capacity`.
///
/// # Example
///
/// ```
/// use directbuf::BufferConfig;
///
/// let config = BufferConfig::default()
///     .with_initial_capacity(256)
///     .with_max_capacity(64 * 1024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferConfig {
    initial_capacity: usize,
    max_capacity: usize,
}

impl BufferConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if either size is zero or
    /// `initial_capacity > max_capacity`.
    pub fn new(initial_capacity: usize, max_capacity: usize) -> Result<Self, BufferError> {
        if initial_capacity == 0 || max_capacity == 0 {
            return Err(BufferError::InvalidConfig {
                message: "capacities must be non-zero",
            });
        }

        if initial_capacity > max_capacity {
            return Err(BufferError::InvalidConfig {
                message: "initial_capacity cannot be greater than max_capacity",
            });
        }

        Ok(Self {
            initial_capacity,
            max_capacity,
        })
    }

    /// Sets the initial capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the maximum capacity.
    pub fn with_max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Returns the initial capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the maximum capacity.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), BufferError> {
        Self::new(self.initial_capacity, self.max_capacity).map(|_| ())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_config_default() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity(), 4 * 1024);
        assert_eq!(config.max_capacity(), 1024 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_buffer_config_builder() {
        let config = BufferConfig::default()
            .with_initial_capacity(512)
            .with_max_capacity(8192);
        assert_eq!(config.initial_capacity(), 512);
        assert_eq!(config.max_capacity(), 8192);
    }

    #[test]
    fn test_buffer_config_valid() {
        let config = BufferConfig::new(16, 16).unwrap();
        assert_eq!(config.initial_capacity(), 16);
        assert_eq!(config.max_capacity(), 16);
    }

    #[test]
    fn test_buffer_config_invalid_zero() {
        assert!(BufferConfig::new(0, 16).is_err());
        assert!(BufferConfig::new(16, 0).is_err());
    }

    #[test]
    fn test_buffer_config_invalid_ordering() {
        let err = BufferConfig::new(32, 16).unwrap_err();
        assert!(matches!(err, BufferError::InvalidConfig { .. }));
    }

    #[test]
    fn test_buffer_config_validate() {
        let config = BufferConfig::default().with_initial_capacity(0);
        assert!(config.validate().is_err());
    }
}
