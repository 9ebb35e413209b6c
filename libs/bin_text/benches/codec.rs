#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use bin_text::{Codec, Width};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_decompose(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, codec: Codec, text: &str) {
        c.bench_function(name, |b| {
            b.iter(|| codec.decompose(black_box(text)).expect("text fits"))
        });
    }

    bench(c, "decompose_byte_small", Codec::default(), &create_text::<16>());
    bench(c, "decompose_byte_large", Codec::default(), &create_text::<12000>());
    bench(c, "decompose_unicode_large", Codec::new(Width::UNICODE), &create_text::<12000>());
}

fn bench_compose(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, codec: Codec, text: &str) {
        let units = codec.decompose(text).expect("text fits");

        c.bench_function(name, |b| {
            b.iter(|| codec.compose(black_box(&units)).expect("units are valid"))
        });
    }

    bench(c, "compose_byte_small", Codec::default(), &create_text::<16>());
    bench(c, "compose_byte_large", Codec::default(), &create_text::<12000>());
    bench(c, "compose_unicode_large", Codec::new(Width::UNICODE), &create_text::<12000>());
}

fn bench_bits(c: &mut Criterion) {
    let codec = Codec::new(Width::ASCII);
    let text = create_text::<12000>();
    let bits = codec.encode_bits(&text).expect("text fits");

    c.bench_function("encode_bits_ascii_large", |b| {
        b.iter(|| codec.encode_bits(black_box(&text)).expect("text fits"))
    });
    c.bench_function("decode_bits_ascii_large", |b| {
        b.iter(|| codec.decode_bits(black_box(&bits)).expect("bits are valid"))
    });
}

/// Printable ASCII, cycled up to `LEN` chars.
fn create_text<const LEN: usize>() -> String {
    (' '..='~').cycle().take(LEN).collect()
}

criterion_group!(codec, bench_decompose, bench_compose, bench_bits);
criterion_main!(codec);
