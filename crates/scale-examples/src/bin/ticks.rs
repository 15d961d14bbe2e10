// File: crates/scale-examples/src/bin/ticks.rs
// Summary: Minimal example that prints ticks and labels for a few ranges.

use scale_core::{best_ticks, NumericSpan, TickOptions};

fn main() {
    let ranges = [(0.0, 23.0), (1.2, 1.8), (-7.0, 3.0), (0.0, 1500.0), (-0.004, 0.013)];

    for (start, end) in ranges {
        let span = match NumericSpan::new(start, end) {
            Ok(span) => span,
            Err(e) => {
                eprintln!("[{start}, {end}]: {e}");
                continue;
            }
        };
        for (name, opts) in [("regular", TickOptions::default()), ("light", TickOptions::light())] {
            match best_ticks(span, opts) {
                Ok(ticks) => {
                    let labels = ticks.labels();
                    println!(
                        "[{start}, {end}] {name:<7} step {:<6} -> {}",
                        ticks.step(),
                        labels.labels().join(" ")
                    );
                }
                Err(e) => println!("[{start}, {end}] {name:<7} -> {e}"),
            }
        }
    }
}
