use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use scale_core::{remap, ColorMapSpec, Palette, SequencingMode};

fn bench_colormap(c: &mut Criterion) {
    let mut group = c.benchmark_group("colormap");
    let palette = Palette::by_name("RdBu_r").expect("builtin palette");
    for mode in [SequencingMode::Linear, SequencingMode::Nonlinear] {
        let spec = ColorMapSpec::new(-7.0, 3.0, "RdBu_r").centered(0.0).with_mode(mode);
        group.bench_with_input(BenchmarkId::new("remap", format!("{mode:?}")), &spec, |b, spec| {
            b.iter(|| black_box(remap(spec, &palette)));
        });
    }
    let spec = ColorMapSpec::default();
    group.bench_function("build_by_name", |b| b.iter(|| black_box(spec.build())));

    let table = spec.build().expect("default table");
    let values: Vec<f64> = (0..10_000).map(|i| -1.0 + i as f64 * 2.0e-4).collect();
    group.bench_function("color_for_10k", |b| {
        b.iter(|| values.iter().filter_map(|&v| table.color_for(v)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_colormap);
criterion_main!(benches);
