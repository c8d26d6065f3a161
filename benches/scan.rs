//! Reader and classification throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xqtlex::{CharacterClass, CodepointReader, Digit, NameChar, NameStartChar};

fn digit_buffer(units: usize) -> Vec<u16> {
    (0..units).map(|i| b'0' as u16 + (i % 10) as u16).collect()
}

fn name_buffer(units: usize) -> Vec<u16> {
    // ASCII letters with supplementary-plane name characters mixed in,
    // so the surrogate-pairing path is exercised
    let mut buf = Vec::with_capacity(units);
    while buf.len() + 2 <= units {
        buf.extend_from_slice(&[b'x' as u16, b'm' as u16, b'l' as u16]);
        buf.extend_from_slice(&[0xD80C, 0xDC00]); // U+13000
    }
    buf.truncate(units);
    buf
}

fn bench_digit_run(c: &mut Criterion) {
    let buf = digit_buffer(64 * 1024);
    c.bench_function("advance_while_digit_64k", |b| {
        let mut reader = CodepointReader::new();
        b.iter(|| {
            reader.reset(black_box(&buf));
            reader.advance_while(|ch| Digit.contains(ch));
            black_box(reader.current_offset())
        })
    });
}

fn bench_name_run(c: &mut Criterion) {
    let buf = name_buffer(64 * 1024);
    c.bench_function("advance_while_name_64k", |b| {
        let mut reader = CodepointReader::new();
        b.iter(|| {
            reader.reset(black_box(&buf));
            reader.advance_while(|ch| NameChar.contains(ch));
            black_box(reader.current_offset())
        })
    });
}

fn bench_classification(c: &mut Criterion) {
    c.bench_function("name_start_char_full_sweep", |b| {
        b.iter(|| {
            let mut members = 0u32;
            let mut value = 0u32;
            while value <= 0x10FFFF {
                if NameStartChar.contains_value(black_box(value)) {
                    members += 1;
                }
                value += 1;
            }
            black_box(members)
        })
    });
}

criterion_group!(benches, bench_digit_run, bench_name_run, bench_classification);
criterion_main!(benches);
