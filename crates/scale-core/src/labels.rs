// File: crates/scale-core/src/labels.rs
// Summary: Minimal-precision, width-aligned tick label formatting.

use crate::rounding::round_decimals;
use crate::ticks::TickSet;

/// Labels never carry more fractional digits than this.
pub const MAX_DECIMALS: u32 = 4;

/// Display strings for a tick sequence, aligned 1:1 with it.
/// Every label has `precision` fractional digits and the same width once a
/// leading minus sign is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
    precision: u32,
}

impl LabelSet {
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn precision(&self) -> u32 { self.precision }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
    pub fn into_labels(self) -> Vec<String> { self.labels }
}

/// Fewest fractional digits that keep `value` intact up to `MAX_DECIMALS` places.
pub fn significant_decimals(value: f64) -> u32 {
    let v = round_decimals(value, MAX_DECIMALS);
    (0..MAX_DECIMALS)
        .find(|&d| round_decimals(v, d) == v)
        .unwrap_or(MAX_DECIMALS)
}

/// Format ticks with one shared precision and zero-padded to a shared width.
pub fn labels_from_ticks(ticks: &[f64]) -> LabelSet {
    let precision = ticks.iter().map(|&t| significant_decimals(t)).max().unwrap_or(0);
    let jump = if precision == 0 { 1 } else { 2 };

    let raw: Vec<String> = ticks.iter().map(|&t| format_fixed(t, precision)).collect();
    let width = raw
        .iter()
        .map(|s| unsigned(s).len())
        .max()
        .unwrap_or(0)
        .max(precision as usize + jump);

    let labels = raw.iter().map(|s| pad_left(s, width)).collect();
    LabelSet { labels, precision }
}

impl TickSet {
    /// Labels for these ticks.
    pub fn labels(&self) -> LabelSet {
        labels_from_ticks(self.values())
    }
}

// ---- helpers ----------------------------------------------------------------

fn format_fixed(value: f64, precision: u32) -> String {
    let r = round_decimals(value, precision);
    // -0.0 would print as "-0"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{:.*}", precision as usize, r)
}

fn unsigned(s: &str) -> &str {
    s.strip_prefix('-').unwrap_or(s)
}

fn pad_left(s: &str, width: usize) -> String {
    let body = unsigned(s);
    let sign = if body.len() < s.len() { "-" } else { "" };
    let zeros = width.saturating_sub(body.len());
    format!("{sign}{}{body}", "0".repeat(zeros))
}
