use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rgb_hsv::{hsv_to_rgb, rgb8_to_hsv, rgb_to_hsv};

/// One color per hue branch plus gray, which skips the hue math.
const SAMPLES: [(&str, (u8, u8, u8)); 4] = [
    ("red_max", (200, 40, 90)),
    ("green_max", (30, 180, 60)),
    ("blue_max", (25, 60, 128)),
    ("gray", (128, 128, 128)),
];

fn bench_rgb_to_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_hsv");
    for (name, (r, g, b)) in SAMPLES {
        let rgb = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
        group.bench_with_input(BenchmarkId::from_parameter(name), &rgb, |bench, rgb| {
            bench.iter(|| rgb_to_hsv(black_box(rgb.0), black_box(rgb.1), black_box(rgb.2)))
        });
    }
    group.finish();
}

fn bench_hsv_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv_to_rgb");
    for (name, (r, g, b)) in SAMPLES {
        let hsv = rgb8_to_hsv(r, g, b);
        group.bench_with_input(BenchmarkId::from_parameter(name), &hsv, |bench, hsv| {
            bench.iter(|| hsv_to_rgb(black_box(hsv.0), black_box(hsv.1), black_box(hsv.2)))
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_blue_max", |bench| {
        bench.iter(|| {
            let (h, s, v) = rgb8_to_hsv(black_box(25), black_box(60), black_box(128));
            hsv_to_rgb(h, s, v)
        })
    });
}

criterion_group!(benches, bench_rgb_to_hsv, bench_hsv_to_rgb, bench_round_trip);
criterion_main!(benches);
