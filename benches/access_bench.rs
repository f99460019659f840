//! Benchmarks for directbuf.
//!
//! Run with:
//!     cargo bench

use bytes::BytesMut;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use directbuf::{BufferConfig, ByteOrder, DirectBuffer};

const SIZE: usize = 64 * 1024;

fn bench_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_get");
    group.throughput(Throughput::Bytes(SIZE as u64));

    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        group.bench_function(format!("u64_{}", order), |b| {
            let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
            b.iter(|| {
                for index in (0..SIZE).step_by(8) {
                    buffer.put(index, black_box(index as u64), order).unwrap();
                }
                let mut sum = 0u64;
                for index in (0..SIZE).step_by(8) {
                    sum = sum.wrapping_add(buffer.get::<u64>(index, order).unwrap());
                }
                black_box(sum)
            });
        });

        group.bench_function(format!("f64_{}", order), |b| {
            let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
            b.iter(|| {
                for index in (0..SIZE).step_by(8) {
                    buffer.put(index, black_box(index as f64), order).unwrap();
                }
                black_box(buffer.get::<f64>(SIZE - 8, order).unwrap())
            });
        });
    }

    // Baseline: plain slice access with no bounds gate beyond indexing
    group.bench_function("slice_baseline", |b| {
        let mut raw = vec![0u8; SIZE];
        b.iter(|| {
            for index in (0..SIZE).step_by(8) {
                raw[index..index + 8].copy_from_slice(&black_box(index as u64).to_le_bytes());
            }
            black_box(raw[SIZE - 1])
        });
    });

    group.finish();
}

fn bench_unaligned(c: &mut Criterion) {
    let mut group = c.benchmark_group("unaligned");
    group.throughput(Throughput::Bytes(SIZE as u64));

    group.bench_function("u32_le_offset_1", |b| {
        let mut buffer = DirectBuffer::from_region(BytesMut::zeroed(SIZE));
        b.iter(|| {
            for index in (1..SIZE - 4).step_by(4) {
                buffer.put_u32_le(index, black_box(index as u32)).unwrap();
            }
        });
    });

    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    // Fill 1 MiB starting from a 64-byte region
    group.throughput(Throughput::Bytes(1024 * 1024));
    group.bench_function("power_of_two_to_1mb", |b| {
        let config = BufferConfig::new(64, 1024 * 1024).unwrap();
        b.iter(|| {
            let mut buffer = DirectBuffer::with_config(config).unwrap();
            for index in (0..1024 * 1024).step_by(8) {
                buffer.put_u64_le(index, index as u64).unwrap();
            }
            black_box(buffer.capacity())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_put_get, bench_unaligned, bench_growth);
criterion_main!(benches);
