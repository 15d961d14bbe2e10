// File: crates/scale-core/src/axis.rs
// Summary: Axis model with caller-tagged numeric or categorical ticks.

use crate::error::{Result, ScaleError};
use crate::labels::labels_from_ticks;
use crate::ticks::{best_ticks, NumericSpan, TickOptions};

/// Where an axis gets its ticks from. The caller decides the kind; label text
/// is never inspected to guess whether it is numeric.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisTicks {
    /// Synthesize ticks over the axis range and format their labels.
    Auto(TickOptions),
    /// Explicit positions; labels are formatted from them unless supplied.
    Numeric { positions: Vec<f64>, labels: Option<Vec<String>> },
    /// Explicit positions with verbatim labels.
    Categorical { positions: Vec<f64>, labels: Vec<String> },
    Hidden,
}

impl Default for AxisTicks {
    fn default() -> Self {
        AxisTicks::Auto(TickOptions::default())
    }
}

/// One labelled tick, ready for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: AxisTicks,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: AxisTicks::default() }
    }

    pub fn with_ticks(mut self, ticks: AxisTicks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Positions and labels for this axis. Inverted axes (`min > max`) are
    /// ticked over the same range in increasing order.
    pub fn resolve_ticks(&self) -> Result<Vec<TickMark>> {
        match &self.ticks {
            AxisTicks::Auto(opts) => {
                let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
                let ticks = best_ticks(NumericSpan::new(lo, hi)?, *opts)?;
                Ok(pair(ticks.values(), ticks.labels().into_labels()))
            }
            AxisTicks::Numeric { positions, labels: None } => {
                Ok(pair(positions, labels_from_ticks(positions).into_labels()))
            }
            AxisTicks::Numeric { positions, labels: Some(labels) }
            | AxisTicks::Categorical { positions, labels } => {
                check_len(positions.len(), labels.len())?;
                Ok(pair(positions, labels.clone()))
            }
            AxisTicks::Hidden => Ok(Vec::new()),
        }
    }
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(ScaleError::LengthMismatch { what: "tick labels", expected, got });
    }
    Ok(())
}

fn pair(positions: &[f64], labels: Vec<String>) -> Vec<TickMark> {
    positions
        .iter()
        .zip(labels)
        .map(|(&position, label)| TickMark { position, label })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(marks: &[TickMark]) -> Vec<&str> {
        marks.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn auto_ticks_cover_the_range() {
        let marks = Axis::new("Time (ms)", 0.0, 23.0).resolve_ticks().unwrap();
        assert_eq!(labels(&marks), ["00", "05", "10", "15", "20"]);
        assert_eq!(marks[4].position, 20.0);
    }

    #[test]
    fn inverted_axis_ticks_increase() {
        let marks = Axis::new("Depth", 23.0, 0.0).resolve_ticks().unwrap();
        assert_eq!(marks.first().map(|m| m.position), Some(0.0));
        assert_eq!(marks.last().map(|m| m.position), Some(20.0));
    }

    #[test]
    fn numeric_positions_get_formatted_labels() {
        let axis = Axis::new("x", 0.0, 1.0)
            .with_ticks(AxisTicks::Numeric { positions: vec![0.0, 0.5, 1.0], labels: None });
        assert_eq!(labels(&axis.resolve_ticks().unwrap()), ["0.0", "0.5", "1.0"]);
    }

    #[test]
    fn categorical_labels_are_verbatim() {
        let axis = Axis::new("unit", 0.0, 2.0).with_ticks(AxisTicks::Categorical {
            positions: vec![0.0, 1.0, 2.0],
            labels: vec!["MLI".into(), "PkC".into(), "GoC".into()],
        });
        assert_eq!(labels(&axis.resolve_ticks().unwrap()), ["MLI", "PkC", "GoC"]);
    }

    #[test]
    fn label_count_must_match_positions() {
        let axis = Axis::new("x", 0.0, 1.0).with_ticks(AxisTicks::Numeric {
            positions: vec![0.0, 1.0],
            labels: Some(vec!["a".into(), "b".into(), "c".into()]),
        });
        assert_eq!(
            axis.resolve_ticks().unwrap_err(),
            ScaleError::LengthMismatch { what: "tick labels", expected: 2, got: 3 }
        );
    }

    #[test]
    fn hidden_axis_has_no_ticks() {
        let axis = Axis::new("x", 0.0, 1.0).with_ticks(AxisTicks::Hidden);
        assert!(axis.resolve_ticks().unwrap().is_empty());
    }
}
