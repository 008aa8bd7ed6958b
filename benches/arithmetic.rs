use fixint::{Int32, Int64, UInt8, UInt128, width};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("int64 wrapping mul-add", |b| {
        let x = Int64::from(0x1234_5678_9ABCi64);
        let y = Int32::from(-77i32);

        b.iter(|| black_box(x) * black_box(y) + black_box(y))
    });

    c.bench_function("uint128 shift by signed count", |b| {
        let v = UInt128::MAX;
        let n = Int32::from(-17i32);

        b.iter(|| black_box(v) << black_box(n))
    });

    c.bench_function("int64 cast to u8", |b| {
        let v = Int64::from(-1i64);

        b.iter(|| black_box(v).cast::<width::U8>())
    });

    c.bench_function("uint8 times 255", |b| {
        b.iter(|| {
            let mut acc = UInt8::ZERO;
            black_box(UInt8::MAX).times(|i| acc = acc + i);
            acc
        })
    });
}

criterion_group!(benches, bench_arithmetic);
criterion_main!(benches);
