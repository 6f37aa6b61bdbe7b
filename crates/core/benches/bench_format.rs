//! Benchmark for storage value formatting.

use alloy::primitives::B256;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use storagoor_common::ether::format::format_word;

fn test_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("storagoor_format");

    let mut short_string = [0u8; 32];
    short_string[..13].copy_from_slice(b"Wrapped Ether");
    short_string[31] = 26;

    let words = [
        ("zero", B256::ZERO),
        ("small_integer", B256::with_last_byte(18)),
        ("short_string", B256::from(short_string)),
        ("all_ones", B256::repeat_byte(0xff)),
    ];

    for (name, word) in words.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), word, |b, word| {
            b.iter(|| format_word(word));
        });
    }
    group.finish();
}

criterion_group!(benches, test_format);
criterion_main!(benches);
