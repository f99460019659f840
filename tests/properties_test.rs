// Property tests for DirectBuffer and the byte order converter
// Tests cover: round-trips at arbitrary offsets, LE/BE byte reversal, growth

use bytes::BytesMut;
use directbuf::{ByteOrder, DirectBuffer, Endian, PowerOfTwoGrowth};
use proptest::prelude::*;

const SIZE: usize = 64;

fn order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

fn round_trips<T>(value: T, index: usize, order: ByteOrder) -> Result<T, TestCaseError>
where
    T: Endian,
{
    let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
    buffer.put(index, value, order).map_err(|e| TestCaseError::fail(e.to_string()))?;
    buffer.get(index, order).map_err(|e| TestCaseError::fail(e.to_string()))
}

fn layout<T: Endian>(value: T, index: usize, order: ByteOrder) -> Vec<u8> {
    let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
    buffer.put(index, value, order).unwrap();
    buffer.as_slice().unwrap()[index..index + T::WIDTH].to_vec()
}

proptest! {
    #[test]
    fn prop_i16_round_trip(v: i16, index in 0usize..=SIZE - 2, order in order()) {
        prop_assert_eq!(round_trips(v, index, order)?, v);
    }

    #[test]
    fn prop_u32_round_trip(v: u32, index in 0usize..=SIZE - 4, order in order()) {
        prop_assert_eq!(round_trips(v, index, order)?, v);
    }

    #[test]
    fn prop_i64_round_trip(v: i64, index in 0usize..=SIZE - 8, order in order()) {
        prop_assert_eq!(round_trips(v, index, order)?, v);
    }

    #[test]
    fn prop_u64_round_trip(v: u64, index in 0usize..=SIZE - 8, order in order()) {
        prop_assert_eq!(round_trips(v, index, order)?, v);
    }

    #[test]
    fn prop_f32_round_trip_bits(bits: u32, index in 0usize..=SIZE - 4, order in order()) {
        let v = f32::from_bits(bits);
        prop_assert_eq!(round_trips(v, index, order)?.to_bits(), bits);
    }

    #[test]
    fn prop_f64_round_trip_bits(bits: u64, index in 0usize..=SIZE - 8, order in order()) {
        let v = f64::from_bits(bits);
        prop_assert_eq!(round_trips(v, index, order)?.to_bits(), bits);
    }

    #[test]
    fn prop_be_layout_is_reversed_le(v: i32, index in 0usize..=SIZE - 4) {
        let le = layout(v, index, ByteOrder::LittleEndian);
        let mut be = layout(v, index, ByteOrder::BigEndian);
        be.reverse();
        prop_assert_eq!(le, be);
    }

    #[test]
    fn prop_be_read_is_reversed_le_read(raw: [u8; 8]) {
        let mut buffer = DirectBuffer::from_region(BytesMut::from(&raw[..]));
        let le = buffer.get_u64_le(0).unwrap();
        let be = buffer.get_u64_be(0).unwrap();
        prop_assert_eq!(le.swap_bytes(), be);
    }

    #[test]
    fn prop_converter_layout(v: u64, order in order()) {
        let expected = match order {
            ByteOrder::LittleEndian => v.to_le_bytes(),
            ByteOrder::BigEndian => v.to_be_bytes(),
        };
        prop_assert_eq!(Endian::apply(v, order).to_ne_bytes(), expected);
    }

    #[test]
    fn prop_out_of_range_never_writes(index in SIZE - 7..SIZE + 8, v: u64) {
        let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
        prop_assert!(buffer.put_u64_le(index, v).is_err());
        prop_assert_eq!(buffer.capacity(), SIZE);
        prop_assert!(buffer.as_slice().unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_growth_preserves_prefix(prefix in proptest::collection::vec(any::<u8>(), 1..32), extra in 1usize..512) {
        let mut buffer = DirectBuffer::with_growth(
            BytesMut::from(&prefix[..]),
            PowerOfTwoGrowth::new(4096),
        );
        let limit = prefix.len() + extra;
        buffer.check_limit(limit).unwrap();

        prop_assert!(buffer.capacity() >= limit);
        prop_assert_eq!(&buffer.as_slice().unwrap()[..prefix.len()], &prefix[..]);
    }
}
