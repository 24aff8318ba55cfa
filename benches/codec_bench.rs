//! Criterion benchmark untuk Primitive Codec dan String Codec
//!
//! Run dengan: cargo bench

use binstream::protocol::{self, encode_string};
use binstream::{BinaryReader, BinaryWriter, ByteOrder, MemoryStream};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive");
    group.throughput(Throughput::Elements(1));

    for order in [ByteOrder::native(), ByteOrder::native().reversed()] {
        let label = if order.is_native() { "native" } else { "swapped" };

        group.bench_function(format!("encode_u64_{}", label), |b| {
            let mut i = 0u64;
            b.iter(|| {
                black_box(protocol::encode(black_box(i), order));
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(format!("decode_f64_{}", label), |b| {
            let bytes = protocol::encode(1.5f64, order);
            b.iter(|| black_box(protocol::decode::<f64>(black_box(&bytes), order)));
        });
    }

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");

    for len in [11usize, 127, 128, 1024].iter() {
        let text = "s".repeat(*len);
        let encoded = encode_string(&text);
        group.throughput(Throughput::Bytes(*len as u64));

        group.bench_function(format!("encode_{}", len), |b| {
            b.iter(|| black_box(encode_string(black_box(&text))));
        });

        group.bench_function(format!("decode_{}", len), |b| {
            b.iter(|| {
                let mut reader = BinaryReader::new(MemoryStream::with_data(encoded.clone()));
                black_box(reader.read_string())
            });
        });
    }

    group.finish();
}

fn bench_writer_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("writer");

    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_u32_{}", batch_size), |b| {
            b.iter(|| {
                let mut writer = BinaryWriter::new(MemoryStream::new());
                for i in 0..*batch_size {
                    writer.write(black_box(i as u32)).unwrap();
                }
                black_box(writer.position())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_strings, bench_writer_throughput);
criterion_main!(benches);
