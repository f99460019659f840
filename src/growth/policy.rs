//! Built-in growth policies.

use bytes::BytesMut;

use super::GrowthStrategy;
use crate::config::BufferConfig;

/// Doubles the current capacity until the request fits.
///
/// Starting from `max(current, 1)`, the size doubles until it reaches the
/// requested limit, then is clamped to `max_capacity`. Requests beyond
/// `max_capacity` are refused. The new region is zero-filled.
///
/// # Example
///
/// ```
/// use directbuf::{GrowthStrategy, PowerOfTwoGrowth};
///
/// let mut policy = PowerOfTwoGrowth::new(1024);
/// assert_eq!(policy.grow(100, 150).map(|r| r.len()), Some(200));
/// assert!(policy.grow(100, 2048).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerOfTwoGrowth {
    max_capacity: usize,
}

impl PowerOfTwoGrowth {
    /// Creates a policy that never grows past `max_capacity` bytes.
    pub const fn new(max_capacity: usize) -> Self {
        Self { max_capacity }
    }

    /// Creates a policy bounded by the config's maximum capacity.
    pub fn from_config(config: &BufferConfig) -> Self {
        Self::new(config.max_capacity())
    }

    /// Returns the upper bound on capacity.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Computes the size the policy would grant, without allocating.
    pub fn next_capacity(&self, current: usize, requested: usize) -> Option<usize> {
        if requested > self.max_capacity {
            return None;
        }

        let mut size = current.max(1);
        while size < requested {
            size = size.saturating_mul(2);
        }
        Some(size.min(self.max_capacity))
    }
}

impl GrowthStrategy for PowerOfTwoGrowth {
    fn grow(&mut self, current: usize, requested: usize) -> Option<BytesMut> {
        self.next_capacity(current, requested).map(BytesMut::zeroed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_until_request_fits() {
        let policy = PowerOfTwoGrowth::new(1 << 20);
        assert_eq!(policy.next_capacity(8, 16), Some(16));
        assert_eq!(policy.next_capacity(8, 17), Some(32));
        assert_eq!(policy.next_capacity(100, 150), Some(200));
    }

    #[test]
    fn test_grows_from_empty() {
        let policy = PowerOfTwoGrowth::new(1024);
        assert_eq!(policy.next_capacity(0, 5), Some(8));
        assert_eq!(policy.next_capacity(0, 1), Some(1));
    }

    #[test]
    fn test_clamps_to_max() {
        let policy = PowerOfTwoGrowth::new(100);
        assert_eq!(policy.next_capacity(64, 65), Some(100));
        assert_eq!(policy.next_capacity(64, 100), Some(100));
    }

    #[test]
    fn test_refuses_beyond_max() {
        let mut policy = PowerOfTwoGrowth::new(64);
        assert_eq!(policy.next_capacity(32, 65), None);
        assert!(policy.grow(32, 65).is_none());
    }

    #[test]
    fn test_grow_allocates_zeroed() {
        let mut policy = PowerOfTwoGrowth::new(1024);
        let region = policy.grow(8, 9).unwrap();
        assert_eq!(region.len(), 16);
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_config() {
        let config = BufferConfig::new(16, 256).unwrap();
        let policy = PowerOfTwoGrowth::from_config(&config);
        assert_eq!(policy.max_capacity(), 256);
    }
}
