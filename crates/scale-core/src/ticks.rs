// File: crates/scale-core/src/ticks.rs
// Summary: "Nice" step derivation and evenly spaced tick synthesis over a numeric span.

use crate::error::{Result, ScaleError};
use crate::rounding::{grid_ratio, GRID_EPSILON};

/// Closed numeric range to be ticked.
/// Contract: both ends finite, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericSpan {
    start: f64,
    end: f64,
}

impl NumericSpan {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(ScaleError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Span over an ordered sample array: first and last element.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match (values.first(), values.last()) {
            (Some(&a), Some(&b)) => Self::new(a, b),
            _ => Err(ScaleError::InvalidSpan { start: f64::NAN, end: f64::NAN }),
        }
    }

    pub fn start(&self) -> f64 { self.start }
    pub fn end(&self) -> f64 { self.end }
    pub fn width(&self) -> f64 { self.end - self.start }
}

/// Tick synthesis knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOptions {
    /// Explicit spacing; derived from the span's order of magnitude when `None`.
    pub step: Option<f64>,
    /// Double the step (half the tick density), used for compact colorbars.
    pub light: bool,
}

impl TickOptions {
    pub fn with_step(step: f64) -> Self {
        Self { step: Some(step), light: false }
    }

    pub fn light() -> Self {
        Self { step: None, light: true }
    }
}

/// Ordered, evenly spaced tick positions.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    values: Vec<f64>,
    step: f64,
    integral: bool,
}

impl TickSet {
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn step(&self) -> f64 { self.step }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, f64> { self.values.iter() }
    pub fn into_values(self) -> Vec<f64> { self.values }

    /// True when the step is a whole number, so every tick is an integer.
    pub fn is_integral(&self) -> bool { self.integral }

    /// Integer view of the ticks; `None` unless the step is integral.
    pub fn as_integers(&self) -> Option<Vec<i64>> {
        if !self.integral { return None; }
        Some(self.values.iter().map(|v| v.round() as i64).collect())
    }
}

impl<'a> IntoIterator for &'a TickSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter { self.values.iter() }
}

/// Three-tier step heuristic: keeps roughly 4-10 ticks whatever the magnitude.
/// Contract: `span > 0`.
pub fn nice_step(span: f64) -> f64 {
    let upper = 10f64.powi(span.log10().ceil() as i32);
    if span <= upper / 5.0 {
        upper * 0.01
    } else if span <= upper / 2.0 {
        upper * 0.05
    } else {
        upper * 0.1
    }
}

/// Upper bound on the ticks a single span may produce.
pub const MAX_TICKS: usize = 10_000;

/// Synthesize ticks from `ceil(start, step)` to `floor(end, step)` inclusive.
pub fn best_ticks(span: NumericSpan, opts: TickOptions) -> Result<TickSet> {
    let width = span.width();
    let mut step = match opts.step {
        Some(s) => s,
        None if width > 0.0 => nice_step(width),
        None => return Err(ScaleError::InvalidStep { step: 0.0, span: width }),
    };
    if opts.light { step *= 2.0; }
    if !(step.is_finite() && step > 0.0 && step < width) {
        return Err(ScaleError::InvalidStep { step, span: width });
    }

    // grid indices of the first and last tick
    let first = grid_ratio(span.start(), step).ceil();
    let last = grid_ratio(span.end(), step).floor();
    let count = (last - first + 1.0).max(0.0);
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return Err(ScaleError::TooManyTicks { step, span: width, limit: MAX_TICKS });
    }

    let values = (0..count as usize)
        .map(|i| grid_value(first + i as f64, step).clamp(span.start(), span.end()))
        .collect();

    Ok(TickSet { values, step, integral: step == step.trunc() })
}

/// Tick `index` on the grid of `step`. Decimal steps divide by their
/// reciprocal so `18` on a `0.1` grid is `1.8`, not `1.8000000000000003`.
fn grid_value(index: f64, step: f64) -> f64 {
    let per_unit = 1.0 / step;
    let whole = per_unit.round();
    if per_unit > 1.0 && (per_unit - whole).abs() <= GRID_EPSILON * whole {
        index / whole
    } else {
        index * step
    }
}

/// Ticks spanning an ordered sample array (first to last element).
pub fn best_ticks_from_values(values: &[f64], opts: TickOptions) -> Result<TickSet> {
    best_ticks(NumericSpan::from_values(values)?, opts)
}

/// Default colorbar ticks: light ticks over `[vmin, vmax]`.
pub fn colorbar_ticks(vmin: f64, vmax: f64) -> Result<TickSet> {
    best_ticks(NumericSpan::new(vmin, vmax)?, TickOptions::light())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn integer_span_derives_step_five() {
        let t = best_ticks(NumericSpan::new(0.0, 23.0).unwrap(), TickOptions::default()).unwrap();
        assert_eq!(t.step(), 5.0);
        assert!(t.is_integral());
        assert_eq!(t.as_integers(), Some(vec![0, 5, 10, 15, 20]));
    }

    #[test]
    fn fractional_span_keeps_float_ticks() {
        // span 0.6 is above upper/2 (upper = 1), so the coarse tier applies
        let t = best_ticks(NumericSpan::new(1.2, 1.8).unwrap(), TickOptions::default()).unwrap();
        assert!((t.step() - 0.1).abs() < 1e-12);
        assert!(!t.is_integral());
        assert!(t.as_integers().is_none());
        assert!(close(t.values(), &[1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8]));
    }

    #[test]
    fn step_tiers() {
        assert!((nice_step(0.15) - 0.01).abs() < 1e-15);
        assert!((nice_step(0.45) - 0.05).abs() < 1e-15);
        assert!((nice_step(0.9) - 0.1).abs() < 1e-15);
        assert_eq!(nice_step(23.0), 5.0);
        assert_eq!(nice_step(100.0), 10.0);
        assert_eq!(nice_step(1500.0), 100.0);
        assert_eq!(nice_step(4000.0), 500.0);
    }

    #[test]
    fn light_doubles_step() {
        let span = NumericSpan::new(0.0, 23.0).unwrap();
        let t = best_ticks(span, TickOptions::light()).unwrap();
        assert_eq!(t.step(), 10.0);
        assert_eq!(t.as_integers(), Some(vec![0, 10, 20]));
    }

    #[test]
    fn oversized_step_is_rejected() {
        let span = NumericSpan::new(0.0, 0.0001).unwrap();
        let err = best_ticks(span, TickOptions::with_step(10.0)).unwrap_err();
        assert!(matches!(err, ScaleError::InvalidStep { step, .. } if step == 10.0));
    }

    #[test]
    fn tiny_steps_are_capped_instead_of_allocating() {
        let unit = NumericSpan::new(0.0, 1.0).unwrap();
        assert!(matches!(
            best_ticks(unit, TickOptions::with_step(1e-300)),
            Err(ScaleError::TooManyTicks { limit: MAX_TICKS, .. })
        ));
        let wide = NumericSpan::new(0.0, 1000.0).unwrap();
        assert!(matches!(
            best_ticks(wide, TickOptions::with_step(1e-7)),
            Err(ScaleError::TooManyTicks { .. })
        ));
        assert!(best_ticks(unit, TickOptions::with_step(f64::MIN_POSITIVE)).is_err());
    }

    #[test]
    fn tick_cap_is_inclusive() {
        let span = NumericSpan::new(0.0, 0.9999).unwrap();
        let t = best_ticks(span, TickOptions::with_step(1e-4)).unwrap();
        assert_eq!(t.len(), MAX_TICKS);
    }

    #[test]
    fn end_on_step_multiple_keeps_its_tick() {
        let t = best_ticks(NumericSpan::new(0.1, 0.7).unwrap(), TickOptions::default()).unwrap();
        assert_eq!(t.values(), [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);

        let t = best_ticks(NumericSpan::new(-0.7, 0.0).unwrap(), TickOptions::default()).unwrap();
        assert_eq!(t.values().first(), Some(&-0.7));
        assert_eq!(t.values().last(), Some(&0.0));
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn values_never_drift_past_the_end() {
        let span = NumericSpan::new(1.2, 1.8).unwrap();
        let t = best_ticks(span, TickOptions::default()).unwrap();
        assert_eq!(t.values().last(), Some(&1.8));
        assert!(t.iter().all(|&v| v >= 1.2 && v <= 1.8));
        let t = best_ticks(span, TickOptions::with_step(0.05)).unwrap();
        assert_eq!(t.values()[1], 1.25);
        assert_eq!(t.values().last(), Some(&1.8));
    }

    #[test]
    fn step_equal_to_span_is_rejected() {
        let span = NumericSpan::new(0.0, 10.0).unwrap();
        assert!(best_ticks(span, TickOptions::with_step(10.0)).is_err());
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        let span = NumericSpan::new(0.0, 10.0).unwrap();
        assert!(best_ticks(span, TickOptions::with_step(0.0)).is_err());
        assert!(best_ticks(span, TickOptions::with_step(-1.0)).is_err());
        assert!(best_ticks(span, TickOptions::with_step(f64::NAN)).is_err());
    }

    #[test]
    fn empty_span_has_no_step() {
        let span = NumericSpan::new(3.0, 3.0).unwrap();
        assert!(matches!(best_ticks(span, TickOptions::default()), Err(ScaleError::InvalidStep { .. })));
    }

    #[test]
    fn reversed_or_non_finite_span() {
        assert!(NumericSpan::new(2.0, 1.0).is_err());
        assert!(NumericSpan::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(NumericSpan::from_values(&[]).is_err());
    }

    #[test]
    fn negative_range() {
        let t = best_ticks(NumericSpan::new(-7.0, 3.0).unwrap(), TickOptions::default()).unwrap();
        assert_eq!(t.step(), 1.0);
        assert_eq!(t.as_integers(), Some((-7..=3).collect::<Vec<i64>>()));
    }

    #[test]
    fn from_sample_array_uses_first_and_last() {
        let xs: Vec<f64> = (0..=46).map(|i| i as f64 * 0.5).collect();
        let t = best_ticks_from_values(&xs, TickOptions::default()).unwrap();
        assert_eq!(t.as_integers(), Some(vec![0, 5, 10, 15, 20]));
    }

    #[test]
    fn colorbar_ticks_are_light() {
        let t = colorbar_ticks(-1.0, 1.0).unwrap();
        assert!((t.step() - 0.2).abs() < 1e-12);
        assert_eq!(t.len(), 11);
        assert!((t.values()[0] + 1.0).abs() < 1e-12);
        assert!((t.values()[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let span = NumericSpan::new(-0.37, 12.9).unwrap();
        let a = best_ticks(span, TickOptions::default()).unwrap();
        let b = best_ticks(span, TickOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
