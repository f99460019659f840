//! The ByteOrder type.

use std::fmt;

/// Byte order of a multi-byte value as it is laid out in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    LittleEndian,
    /// Most significant byte first (network order).
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;

    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;

    /// Returns true if this order matches the host's native order.
    #[inline]
    pub const fn is_native(self) -> bool {
        self as u8 == Self::NATIVE as u8
    }

    /// Returns the opposite byte order.
    pub const fn reversed(self) -> Self {
        match self {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "little-endian"),
            ByteOrder::BigEndian => write!(f, "big-endian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_host() {
        if cfg!(target_endian = "little") {
            assert_eq!(ByteOrder::NATIVE, ByteOrder::LittleEndian);
        } else {
            assert_eq!(ByteOrder::NATIVE, ByteOrder::BigEndian);
        }
        assert!(ByteOrder::NATIVE.is_native());
        assert!(!ByteOrder::NATIVE.reversed().is_native());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(ByteOrder::LittleEndian.reversed(), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::BigEndian.reversed(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_default_is_little_endian() {
        assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_display() {
        assert_eq!(ByteOrder::BigEndian.to_string(), "big-endian");
    }
}
