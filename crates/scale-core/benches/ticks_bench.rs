use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use scale_core::{best_ticks, NumericSpan, TickOptions};

fn gen_spans(n: usize) -> Vec<NumericSpan> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // widths sweep several decades, starts drift across zero
        let width = 10f64.powf((i % 90) as f64 / 10.0 - 4.0);
        let start = (i as f64 * 0.37).sin() * width;
        if let Ok(span) = NumericSpan::new(start, start + width) {
            v.push(span);
        }
    }
    v
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");
    for &n in &[1_000usize, 10_000usize] {
        let spans = gen_spans(n);
        group.bench_with_input(BenchmarkId::new("best_ticks", n), &spans, |b, spans| {
            b.iter(|| {
                for span in spans {
                    let _ = black_box(best_ticks(*span, TickOptions::default()));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("ticks_and_labels", n), &spans, |b, spans| {
            b.iter(|| {
                for span in spans {
                    if let Ok(ticks) = best_ticks(*span, TickOptions::default()) {
                        black_box(ticks.labels());
                    }
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
