#![no_main]

use bytes::BytesMut;
use directbuf::{ByteOrder, DirectBuffer};
use libfuzzer_sys::fuzz_target;

const SIZE: usize = 64;

// Each op is 3 header bytes (kind, index, order) followed by up to 8 value bytes.
fuzz_target!(|data: &[u8]| {
    let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
    let mut model = vec![0u8; SIZE];

    for op in data.chunks(11) {
        if op.len() < 3 {
            break;
        }
        let width = [1usize, 2, 4, 8][(op[0] & 0b11) as usize];
        let write = op[0] & 0b100 != 0;
        let index = op[1] as usize;
        let order = if op[2] & 1 == 0 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        let mut value = [0u8; 8];
        let tail = &op[3..];
        value[..tail.len()].copy_from_slice(tail);
        let value = u64::from_le_bytes(value);

        let in_range = index + width <= SIZE;

        if write {
            let result = match width {
                1 => buffer.put_u8(index, value as u8),
                2 => buffer.put(index, value as u16, order),
                4 => buffer.put(index, value as u32, order),
                _ => buffer.put(index, value, order),
            };
            // Verify: writes succeed exactly when in range
            assert_eq!(result.is_ok(), in_range);
            if in_range {
                let bytes = value.to_le_bytes();
                let slot = &mut model[index..index + width];
                slot.copy_from_slice(&bytes[..width]);
                if width > 1 && order == ByteOrder::BigEndian {
                    slot.reverse();
                }
            }
        } else {
            let result = match width {
                1 => buffer.get_u8(index).map(u64::from),
                2 => buffer.get::<u16>(index, order).map(u64::from),
                4 => buffer.get::<u32>(index, order).map(u64::from),
                _ => buffer.get::<u64>(index, order),
            };
            assert_eq!(result.is_ok(), in_range);
            if let Ok(read) = result {
                let mut bytes = [0u8; 8];
                bytes[..width].copy_from_slice(&model[index..index + width]);
                if width > 1 && order == ByteOrder::BigEndian {
                    bytes[..width].reverse();
                }
                // Verify: reads agree with the reference model
                assert_eq!(read, u64::from_le_bytes(bytes));
            }
        }

        // Verify: capacity never changes without growth
        assert_eq!(buffer.capacity(), SIZE);
        assert_eq!(buffer.as_slice().unwrap(), &model[..]);
    }
});
