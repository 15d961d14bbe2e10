// File: crates/demo/src/main.rs
// Summary: Demo loads one numeric CSV column, prints its ticks and labels, and writes a
// center-anchored color table plus the planned colorbar ticks as CSV.

use anyhow::{Context, Result};
use scale_core::{
    best_ticks_from_values, ChartAssembler, ColorMapSpec, FigureConfig, FigurePlan, HeatmapSpec,
    SequencingMode, TickOptions,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // usage: scale-demo [path] [column] [center] [linear|nonlinear]
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/anomaly.csv".to_string()));
    let column = args.next();
    let center = args
        .next()
        .map(|s| s.parse::<f64>().with_context(|| format!("center '{s}' is not a number")))
        .transpose()?;
    let mode = args
        .next()
        .map(|s| s.parse::<SequencingMode>())
        .transpose()?
        .unwrap_or(SequencingMode::Nonlinear);

    println!("Using input file: {}", path.display());
    let (name, values) = load_column(&path, column.as_deref())
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} values from column '{}'", values.len(), name);

    if values.is_empty() {
        anyhow::bail!("no numeric values loaded; check the column name and delimiter.");
    }

    let (vmin, vmax) = minmax(&values);
    println!("Value range: [{:.4}, {:.4}]", vmin, vmax);

    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    match best_ticks_from_values(&sorted, TickOptions::default()) {
        Ok(ticks) => println!("Ticks: {}", ticks.labels().labels().join(" ")),
        Err(e) => println!("Ticks: none ({e})"),
    }

    // anchor at zero when the data straddles it, unless told otherwise
    let center = center.or_else(|| (vmin < 0.0 && vmax > 0.0).then_some(0.0));
    let mut color = ColorMapSpec::new(vmin, vmax, "RdBu_r").with_mode(mode);
    if let (Some(c), true) = (center, vmax > vmin) {
        color = color.centered(c);
    }

    let plan = HeatmapSpec::new(1, values.len())
        .with_color(color)
        .plan()
        .context("planning colorbar")?;
    println!(
        "Colorbar ticks: {}",
        plan.colorbar.iter().map(|t| t.label.as_str()).collect::<Vec<_>>().join(" ")
    );

    let mut writer = CsvTableWriter { out_dir: PathBuf::from("target/out"), stem: stem_of(&path) };
    let written = writer.assemble(&plan, &FigureConfig::heatmap())?;
    for out in written {
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Writes the plan's color table and colorbar ticks as CSV files.
struct CsvTableWriter {
    out_dir: PathBuf,
    stem: String,
}

impl ChartAssembler for CsvTableWriter {
    type Output = Vec<PathBuf>;

    fn assemble(&mut self, plan: &FigurePlan, _config: &FigureConfig) -> Result<Self::Output> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;

        let table_path = self.out_dir.join(format!("{}_colortable.csv", self.stem));
        let mut w = csv::Writer::from_path(&table_path)
            .with_context(|| format!("opening {}", table_path.display()))?;
        w.write_record(["index", "r", "g", "b", "a", "hex"])?;
        for (i, c) in plan.color_table.colors().iter().enumerate() {
            let [r, g, b, a] = c.to_rgba8();
            w.write_record([i.to_string(), r.to_string(), g.to_string(), b.to_string(), a.to_string(), c.to_hex()])?;
        }
        w.flush()?;

        let ticks_path = self.out_dir.join(format!("{}_colorbar.csv", self.stem));
        let mut w = csv::Writer::from_path(&ticks_path)
            .with_context(|| format!("opening {}", ticks_path.display()))?;
        w.write_record(["position", "label"])?;
        for t in &plan.colorbar {
            w.write_record([t.position.to_string(), t.label.clone()])?;
        }
        w.flush()?;

        Ok(vec![table_path, ticks_path])
    }
}

/// Load one numeric column, by header name or the first column that parses.
fn load_column(path: &Path, column: Option<&str>) -> Result<(String, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let parse = |rec: &csv::StringRecord, ix: usize| rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok());

    let ix = match column {
        Some(want) => {
            let want = want.to_lowercase();
            headers
                .iter()
                .position(|h| *h == want)
                .with_context(|| format!("column '{want}' not found"))?
        }
        // skip a leading index/time column when there is another numeric one
        None => {
            let numeric = (0..headers.len())
                .filter(|&i| records.first().is_some_and(|r| parse(r, i).is_some()))
                .collect::<Vec<_>>();
            match numeric.as_slice() {
                [] => anyhow::bail!("no numeric column found"),
                [only] => *only,
                [_, second, ..] => *second,
            }
        }
    };

    let values = records.iter().filter_map(|r| parse(r, ix)).collect();
    Ok((headers[ix].clone(), values))
}

fn stem_of(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("data")
        .to_string()
}

fn minmax(v: &[f64]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &y in v {
        min_v = min_v.min(y);
        max_v = max_v.max(y);
    }
    (min_v, max_v)
}
