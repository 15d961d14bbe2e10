// File: crates/scale-core/src/colormap.rs
// Summary: Center-anchored colormap remapping into a fixed-size color lookup table.

use std::str::FromStr;

use crate::color::Rgba;
use crate::error::{Result, ScaleError};
use crate::grid::linspace;
use crate::palette::{ContinuousPalette, Palette};

/// Number of entries in a remapped table.
pub const TABLE_SIZE: usize = 256;

/// How color density is spread when the two sides of a centered scale differ in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SequencingMode {
    /// Uniform slope: the shorter side simply uses less of its half-palette.
    #[default]
    Linear,
    /// Each side is stretched over its full half-palette.
    Nonlinear,
}

impl FromStr for SequencingMode {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "nonlinear" => Ok(Self::Nonlinear),
            other => Err(ScaleError::InvalidColorSpec(format!(
                "sequencing mode must be 'linear' or 'nonlinear', got '{other}'"
            ))),
        }
    }
}

/// How the nonlinear mode splits table entries between its two halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleAllocation {
    /// Split all `TABLE_SIZE` entries in proportion to each side's range,
    /// largest remainder first (ties go to the lower half).
    #[default]
    LargestRemainder,
    /// `floor(TABLE_SIZE * ratio / 2)` entries per side; may leave the table short.
    Truncate,
}

/// Color scale request.
/// Contract: `vmin <= center <= vmax` when a center is given.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapSpec {
    pub vmin: f64,
    pub vmax: f64,
    pub center: Option<f64>,
    pub mode: SequencingMode,
    pub palette: String,
    pub allocation: SampleAllocation,
}

impl ColorMapSpec {
    pub fn new(vmin: f64, vmax: f64, palette: impl Into<String>) -> Self {
        Self {
            vmin,
            vmax,
            center: None,
            mode: SequencingMode::default(),
            palette: palette.into(),
            allocation: SampleAllocation::default(),
        }
    }

    pub fn centered(mut self, center: f64) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_mode(mut self, mode: SequencingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_allocation(mut self, allocation: SampleAllocation) -> Self {
        self.allocation = allocation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (vmin, vmax) = (self.vmin, self.vmax);
        if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
            return Err(ScaleError::InvalidColorSpec(format!(
                "bounds [{vmin}, {vmax}] must be finite and ordered"
            )));
        }
        if let Some(center) = self.center {
            if !(center >= vmin && center <= vmax) {
                return Err(ScaleError::InvalidColorSpec(format!(
                    "center {center} lies outside [{vmin}, {vmax}]"
                )));
            }
            if vmin == vmax {
                return Err(ScaleError::InvalidColorSpec(format!(
                    "centered scale needs vmin < vmax, got {vmin} == {vmax}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the palette id and build the table.
    pub fn build(&self) -> Result<ColorTable> {
        self.validate()?;
        let palette = Palette::by_name(&self.palette)?;
        remap(self, &palette)
    }
}

/// Diverging `RdBu_r` over `[-1, 1]`, anchored at zero, nonlinear.
impl Default for ColorMapSpec {
    fn default() -> Self {
        ColorMapSpec::new(-1.0, 1.0, "RdBu_r")
            .centered(0.0)
            .with_mode(SequencingMode::Nonlinear)
    }
}

/// Reindexed lookup table usable directly as a discrete palette over `[vmin, vmax]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    colors: Vec<Rgba>,
    positions: Vec<f64>,
    vmin: f64,
    vmax: f64,
}

impl ColorTable {
    pub fn colors(&self) -> &[Rgba] { &self.colors }
    /// Palette position in `[0, 1]` each entry was sampled at.
    pub fn positions(&self) -> &[f64] { &self.positions }
    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
    pub fn get(&self, index: usize) -> Option<Rgba> { self.colors.get(index).copied() }
    pub fn vmin(&self) -> f64 { self.vmin }
    pub fn vmax(&self) -> f64 { self.vmax }

    /// Entry a data value falls into when `[vmin, vmax]` is split uniformly
    /// across the table; out-of-range values clamp to the ends.
    pub fn color_for(&self, value: f64) -> Option<Rgba> {
        if self.colors.is_empty() || value.is_nan() { return None; }
        let n = self.colors.len();
        let span = self.vmax - self.vmin;
        let frac = if span > 0.0 { (value - self.vmin) / span } else { 0.5 };
        let idx = (frac * n as f64).floor().clamp(0.0, (n - 1) as f64) as usize;
        Some(self.colors[idx])
    }

    /// Row-major RGBA8 pixels of a `len() x height` strip.
    pub fn to_rgba8_strip(&self, height: u32) -> Vec<u8> {
        let row: Vec<u8> = self.colors.iter().flat_map(|c| c.to_rgba8()).collect();
        row.repeat(height as usize)
    }
}

/// Build a table for `spec` from an already resolved palette.
pub fn remap<P: ContinuousPalette + ?Sized>(spec: &ColorMapSpec, palette: &P) -> Result<ColorTable> {
    spec.validate()?;
    let positions = sample_positions(spec);
    let colors = positions.iter().map(|&t| palette.sample(t)).collect();
    Ok(ColorTable { colors, positions, vmin: spec.vmin, vmax: spec.vmax })
}

/// Palette positions the table entries are drawn from.
/// Contract: `spec` is valid (see [`ColorMapSpec::validate`]).
pub fn sample_positions(spec: &ColorMapSpec) -> Vec<f64> {
    let Some(center) = spec.center else {
        return linspace(0.0, 1.0, TABLE_SIZE);
    };
    let (vmin, vmax) = (spec.vmin, spec.vmax);
    let vrange = (vmax - center).max(center - vmin);

    match spec.mode {
        SequencingMode::Linear => {
            let lo = center - vrange;
            let cmin = (vmin - lo) / (2.0 * vrange);
            let cmax = (vmax - lo) / (2.0 * vrange);
            linspace(cmin, cmax, TABLE_SIZE)
        }
        SequencingMode::Nonlinear => {
            let bottom = (center - vmin) / vrange;
            let top = (vmax - center) / vrange;
            let (n_low, n_high) = match spec.allocation {
                SampleAllocation::Truncate => (
                    (TABLE_SIZE as f64 * bottom / 2.0) as usize,
                    (TABLE_SIZE as f64 * top / 2.0) as usize,
                ),
                SampleAllocation::LargestRemainder => {
                    split_largest_remainder((center - vmin) / (vmax - vmin))
                }
            };
            let mut positions = linspace(0.0, 0.5, n_low);
            positions.extend(linspace(0.5, 1.0, n_high));
            positions
        }
    }
}

/// Split `TABLE_SIZE` into (lower, upper) with the lower share `low_share`.
fn split_largest_remainder(low_share: f64) -> (usize, usize) {
    let exact_low = TABLE_SIZE as f64 * low_share.clamp(0.0, 1.0);
    let exact_high = TABLE_SIZE as f64 - exact_low;
    let mut low = exact_low.floor() as usize;
    let high_floor = exact_high.floor() as usize;
    if low + high_floor < TABLE_SIZE && exact_low.fract() >= exact_high.fract() {
        low += 1;
    }
    (low, TABLE_SIZE - low)
}
