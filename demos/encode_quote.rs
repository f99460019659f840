//! Encodes and decodes a fixed-layout quote message.
//!
//! Run with:
//!     cargo run --example encode_quote

use bytes::BytesMut;
use directbuf::{BufferConfig, BufferError, DirectBuffer};

// Header: block length, template id, schema id, version (all u16 LE).
const HEADER_LEN: usize = 8;
const TEMPLATE_ID: u16 = 42;
const SCHEMA_ID: u16 = 1;
const VERSION: u16 = 0;

// Body offsets relative to the end of the header.
const SYMBOL: usize = 0; // [u8; 8]
const BID_PX: usize = 8; // f64
const ASK_PX: usize = 16; // f64
const BID_QTY: usize = 24; // u32
const ASK_QTY: usize = 28; // u32
const SEQ_NO: usize = 32; // u64, big-endian on the wire
const BLOCK_LEN: usize = 40;

struct Quote {
    symbol: [u8; 8],
    bid_px: f64,
    ask_px: f64,
    bid_qty: u32,
    ask_qty: u32,
    seq_no: u64,
}

fn encode(
    buffer: &mut DirectBuffer<'_>,
    offset: usize,
    quote: &Quote,
) -> Result<usize, BufferError> {
    buffer.put_u16_le(offset, BLOCK_LEN as u16)?;
    buffer.put_u16_le(offset + 2, TEMPLATE_ID)?;
    buffer.put_u16_le(offset + 4, SCHEMA_ID)?;
    buffer.put_u16_le(offset + 6, VERSION)?;

    let body = offset + HEADER_LEN;
    buffer.put_bytes(body + SYMBOL, &quote.symbol)?;
    buffer.put_f64_le(body + BID_PX, quote.bid_px)?;
    buffer.put_f64_le(body + ASK_PX, quote.ask_px)?;
    buffer.put_u32_le(body + BID_QTY, quote.bid_qty)?;
    buffer.put_u32_le(body + ASK_QTY, quote.ask_qty)?;
    buffer.put_u64_be(body + SEQ_NO, quote.seq_no)?;

    Ok(HEADER_LEN + BLOCK_LEN)
}

fn decode(buffer: &mut DirectBuffer<'_>, offset: usize) -> Result<Quote, BufferError> {
    let body = offset + HEADER_LEN;
    let mut symbol = [0u8; 8];
    buffer.get_bytes(body + SYMBOL, &mut symbol)?;

    Ok(Quote {
        symbol,
        bid_px: buffer.get_f64_le(body + BID_PX)?,
        ask_px: buffer.get_f64_le(body + ASK_PX)?,
        bid_qty: buffer.get_u32_le(body + BID_QTY)?,
        ask_qty: buffer.get_u32_le(body + ASK_QTY)?,
        seq_no: buffer.get_u64_be(body + SEQ_NO)?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Self-growing buffer: starts at 64 bytes, doubles as messages are appended
    let config = BufferConfig::new(64, 64 * 1024)?;
    let mut buffer = DirectBuffer::with_config(config)?;

    let mut offset = 0;
    for seq_no in 0..10u64 {
        let quote = Quote {
            symbol: *b"ESZ6    ",
            bid_px: 5000.25 + seq_no as f64,
            ask_px: 5000.50 + seq_no as f64,
            bid_qty: 10 + seq_no as u32,
            ask_qty: 12 + seq_no as u32,
            seq_no,
        };
        offset += encode(&mut buffer, offset, &quote)?;
    }

    println!(
        "Encoded 10 quotes into {} bytes (capacity {})",
        offset,
        buffer.capacity()
    );

    let last = decode(&mut buffer, offset - (HEADER_LEN + BLOCK_LEN))?;
    println!(
        "Last quote: {} seq={} bid={}x{} ask={}x{}",
        String::from_utf8_lossy(&last.symbol).trim_end(),
        last.seq_no,
        last.bid_qty,
        last.bid_px,
        last.ask_qty,
        last.ask_px,
    );

    // Take the encoded region back and decode the first message from a view
    let mut wire: BytesMut = buffer.into_region().ok_or("buffer does not own its region")?;
    wire.truncate(offset);
    let mut first_frame = wire.split_to(HEADER_LEN + BLOCK_LEN);
    let mut view = DirectBuffer::from_slice(&mut first_frame[..]);
    let first = decode(&mut view, 0)?;
    println!(
        "First quote: template={} seq={} bid={}",
        view.get_u16_le(2)?,
        first.seq_no,
        first.bid_px
    );

    // Reading past a fixed region is an error, not a truncation
    if let Err(e) = view.get_u64_le(HEADER_LEN + BLOCK_LEN) {
        println!("Out-of-range read rejected: {}", e);
    }

    Ok(())
}
