use criterion::{criterion_group, criterion_main, Criterion};
use ktx_dfd::{constants::*, create_packed, create_unpacked, end_swap, Dfd, Endianness, FormatSuffix};
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DFD End Swap");

    let cases: [(&str, Dfd, usize); 4] = [
        (
            "rgba8",
            create_unpacked(Endianness::Little, 4, 1, false, FormatSuffix::Unorm).unwrap(),
            4,
        ),
        (
            "r5g6b5",
            create_packed(
                Endianness::Little,
                &[5, 6, 5],
                &[CHANNEL_RGBSDA_BLUE, CHANNEL_RGBSDA_GREEN, CHANNEL_RGBSDA_RED],
                FormatSuffix::Unorm,
            )
            .unwrap(),
            2,
        ),
        (
            "a2b10g10r10_snorm",
            create_packed(
                Endianness::Little,
                &[10, 10, 10, 2],
                &[0, 1, 2, 3],
                FormatSuffix::Snorm,
            )
            .unwrap(),
            4,
        ),
        (
            "rgba32_sfloat",
            create_unpacked(Endianness::Little, 4, 4, false, FormatSuffix::Sfloat).unwrap(),
            4,
        ),
    ];

    for (name, dfd, word_bytes) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| end_swap(black_box(dfd), black_box(*word_bytes)).unwrap())
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
