// File: crates/scale-examples/src/bin/colormap.rs
// Summary: Prints how a diverging palette is redistributed around a center value.

use scale_core::{colorbar_ticks, ColorMapSpec, SequencingMode};

fn main() {
    let (vmin, vmax, center) = (-7.0, 3.0, 0.0);

    for mode in [SequencingMode::Linear, SequencingMode::Nonlinear] {
        let spec = ColorMapSpec::new(vmin, vmax, "RdBu_r").centered(center).with_mode(mode);
        let table = match spec.build() {
            Ok(table) => table,
            Err(e) => {
                eprintln!("{mode:?}: {e}");
                continue;
            }
        };
        println!("{mode:?}: {} entries over [{vmin}, {vmax}] centered at {center}", table.len());
        for value in [vmin, -3.5, center, 1.5, vmax] {
            if let Some(c) = table.color_for(value) {
                println!("  {value:>5} -> {}", c.to_hex());
            }
        }
    }

    match colorbar_ticks(vmin, vmax) {
        Ok(ticks) => println!("colorbar: {}", ticks.labels().labels().join(" ")),
        Err(e) => eprintln!("colorbar: {e}"),
    }
}
