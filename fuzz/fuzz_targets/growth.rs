#![no_main]

use bytes::BytesMut;
use directbuf::DirectBuffer;
use libfuzzer_sys::fuzz_target;

// data[0]: initial size, data[1]: granted size, rest: limits to check.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let initial = data[0] as usize;
    let granted = data[1] as usize;

    let prefix: Vec<u8> = (0..initial).map(|i| i as u8).collect();
    let mut buffer = DirectBuffer::with_growth(
        BytesMut::from(&prefix[..]),
        move |_: usize, _: usize| Some(BytesMut::zeroed(granted)),
    );

    for &limit in &data[2..] {
        let limit = limit as usize;
        let before = buffer.capacity();
        let result = buffer.check_limit(limit);

        if limit <= before {
            // Verify: in-range checks have no side effect
            assert!(result.is_ok());
            assert_eq!(buffer.capacity(), before);
        } else if granted >= limit {
            // Verify: capacity is the granted size
            assert!(result.is_ok());
            assert_eq!(buffer.capacity(), granted);
        } else {
            // Verify: refused growth is inert
            assert!(result.unwrap_err().is_out_of_range());
            assert_eq!(buffer.capacity(), before);
        }

        // Verify: the initial bytes survive every growth
        let keep = initial.min(buffer.capacity());
        assert_eq!(&buffer.as_slice().unwrap()[..keep], &prefix[..keep]);
    }
});
