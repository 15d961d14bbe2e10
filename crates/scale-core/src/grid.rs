// File: crates/scale-core/src/grid.rs
// Summary: Evenly spaced sampling helpers shared by tick and colormap code.

/// `steps` evenly spaced samples over `[start, end]`, both ends included.
/// Zero steps yields an empty vector and a single step yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            // pin the last sample so callers can rely on hitting `end` exactly
            (0..steps)
                .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
