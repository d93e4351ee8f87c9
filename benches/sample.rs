//! Benches every table entry point over the same coordinate sweep.
//!
//! The entry points differ only in fetch count and channel blending, so
//! this is mostly a measure of how much each extra fetch costs.
#![expect(
    missing_docs,
    reason = "Its a benchmark and criterion macros don't add docs."
)]

use bevy_math::{Vec2, Vec3, Vec4};
use criterion::*;
use texnoise::prelude::*;

criterion_main!(benches);
criterion_group!(benches, entry_points);

const SIZE: u32 = 1024;

fn entry_points(c: &mut Criterion) {
    let lattice = LatticeConfig::default();
    let rgba = generate(256, 256, 1, TableLayout::Rgba, &lattice).unwrap();
    let gray = generate(256, 256, 1, TableLayout::Gray, &lattice).unwrap();

    let mut group = c.benchmark_group("texnoise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("sample2", |bencher| {
        let mut noise = TableNoise::new(rgba.as_table());
        noise.set_period(32.0);
        bencher.iter(|| {
            let mut res = Vec4::ZERO;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample2(Vec2::new(x as f32, y as f32));
                }
            }
            res
        });
    });

    group.bench_function("sample3", |bencher| {
        let mut noise = TableNoise::new(rgba.as_table());
        noise.set_period(32.0);
        bencher.iter(|| {
            let mut res = Vec4::ZERO;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample3(Vec3::new(x as f32, y as f32, 0.5));
                }
            }
            res
        });
    });

    group.bench_function("sample3_1d", |bencher| {
        let mut noise = TableNoise::new(gray.as_table());
        noise.set_period(32.0);
        bencher.iter(|| {
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample3_1d(Vec3::new(x as f32, y as f32, 0.5));
                }
            }
            res
        });
    });

    group.bench_function("sample4", |bencher| {
        let mut noise = TableNoise::new(rgba.as_table());
        noise.set_period(32.0);
        bencher.iter(|| {
            let mut res = Vec4::ZERO;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample4(Vec4::new(x as f32, y as f32, 0.5, 0.25));
                }
            }
            res
        });
    });

    group.bench_function("sample4_1d", |bencher| {
        let mut noise = TableNoise::new(gray.as_table());
        noise.set_period(32.0);
        bencher.iter(|| {
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.sample4_1d(Vec4::new(x as f32, y as f32, 0.5, 0.25));
                }
            }
            res
        });
    });
}
