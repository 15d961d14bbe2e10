// File: crates/scale-core/src/plan.rs
// Summary: Heatmap planning: image extent, axis ticks, color table and colorbar
// ticks bundled for the rendering collaborator.

use crate::axis::{Axis, AxisTicks, TickMark};
use crate::colormap::{ColorMapSpec, ColorTable};
use crate::config::FigureConfig;
use crate::error::{Result, ScaleError};
use crate::labels::labels_from_ticks;
use crate::ticks::colorbar_ticks;

/// Which image row is drawn at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Top,
    Bottom,
}

/// Data-space bounds of an image, half a pixel beyond the outer pixel centers.
/// `bottom` is the edge of the last row and `top` the edge of the first, whatever
/// the origin; `FigurePlan::origin` tells the renderer which row is drawn on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Extent {
    pub fn from_values(x_values: &[f64], y_values: &[f64]) -> Result<Self> {
        let (x0, xn, dx) = bounds("x values", x_values)?;
        let (y0, yn, dy) = bounds("y values", y_values)?;
        Ok(Self { left: x0 - dx, right: xn + dx, bottom: yn + dy, top: y0 - dy })
    }
}

/// Caller-side description of a heatmap with a colorbar.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapSpec {
    /// (rows, columns) of the image.
    pub shape: (usize, usize),
    /// One coordinate per column; pixel indices when `None`.
    pub x_values: Option<Vec<f64>>,
    /// One coordinate per row; pixel indices when `None`.
    pub y_values: Option<Vec<f64>>,
    pub x_ticks: AxisTicks,
    pub y_ticks: AxisTicks,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub colorbar_label: String,
    pub color: ColorMapSpec,
    pub colorbar_ticks: Option<Vec<f64>>,
    pub origin: Origin,
}

impl HeatmapSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: (rows, cols),
            x_values: None,
            y_values: None,
            x_ticks: AxisTicks::default(),
            y_ticks: AxisTicks::default(),
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            colorbar_label: String::new(),
            color: ColorMapSpec::default(),
            colorbar_ticks: None,
            origin: Origin::default(),
        }
    }

    pub fn with_color(mut self, color: ColorMapSpec) -> Self {
        self.color = color;
        self
    }

    pub fn with_x_values(mut self, values: Vec<f64>) -> Self {
        self.x_values = Some(values);
        self
    }

    pub fn with_y_values(mut self, values: Vec<f64>) -> Self {
        self.y_values = Some(values);
        self
    }

    pub fn with_colorbar_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.colorbar_ticks = Some(ticks);
        self
    }

    /// Validate everything and compute the renderer inputs.
    pub fn plan(&self) -> Result<FigurePlan> {
        let (rows, cols) = self.shape;
        if rows == 0 || cols == 0 {
            return Err(ScaleError::EmptyImage { rows, cols });
        }
        let x_values = coords("x values", self.x_values.as_deref(), cols)?;
        let y_values = coords("y values", self.y_values.as_deref(), rows)?;
        let extent = Extent::from_values(&x_values, &y_values)?;

        let color_table = self.color.build()?;
        let colorbar = self.resolve_colorbar()?;

        let x_axis = Axis::new(self.x_label.clone(), extent.left, extent.right)
            .with_ticks(self.x_ticks.clone());
        let y_axis = Axis::new(self.y_label.clone(), extent.bottom, extent.top)
            .with_ticks(self.y_ticks.clone());
        let x_ticks = x_axis.resolve_ticks()?;
        let y_ticks = y_axis.resolve_ticks()?;

        Ok(FigurePlan {
            extent,
            origin: self.origin,
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            color_table,
            colorbar,
            title: self.title.clone(),
            colorbar_label: self.colorbar_label.clone(),
        })
    }

    fn resolve_colorbar(&self) -> Result<Vec<TickMark>> {
        let (vmin, vmax) = (self.color.vmin, self.color.vmax);
        let positions = match &self.colorbar_ticks {
            Some(ticks) => {
                if let Some(t) = ticks.iter().find(|t| !(**t >= vmin && **t <= vmax)) {
                    return Err(ScaleError::InvalidColorSpec(format!(
                        "colorbar tick {t} lies outside [{vmin}, {vmax}]"
                    )));
                }
                ticks.clone()
            }
            None if vmax > vmin => colorbar_ticks(vmin, vmax)?.into_values(),
            None => vec![vmin],
        };
        let labels = labels_from_ticks(&positions).into_labels();
        Ok(positions
            .into_iter()
            .zip(labels)
            .map(|(position, label)| TickMark { position, label })
            .collect())
    }
}

/// Everything the renderer draws, computed up front.
#[derive(Clone, Debug, PartialEq)]
pub struct FigurePlan {
    pub extent: Extent,
    pub origin: Origin,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: Vec<TickMark>,
    pub y_ticks: Vec<TickMark>,
    pub color_table: ColorTable,
    pub colorbar: Vec<TickMark>,
    pub title: String,
    pub colorbar_label: String,
}

/// Rendering collaborator: turns a plan into a figure (or a file, or a buffer).
pub trait ChartAssembler {
    type Output;
    fn assemble(&mut self, plan: &FigurePlan, config: &FigureConfig) -> anyhow::Result<Self::Output>;
}

// ---- helpers ----------------------------------------------------------------

fn coords(what: &'static str, values: Option<&[f64]>, expected: usize) -> Result<Vec<f64>> {
    match values {
        None => Ok((0..expected).map(|i| i as f64).collect()),
        Some(v) if v.len() == expected => Ok(v.to_vec()),
        Some(v) => Err(ScaleError::LengthMismatch { what, expected, got: v.len() }),
    }
}

/// First value, last value and half the pixel pitch (0.5 for a single pixel).
fn bounds(what: &'static str, values: &[f64]) -> Result<(f64, f64, f64)> {
    match values {
        [] => Err(ScaleError::LengthMismatch { what, expected: 1, got: 0 }),
        [only] => Ok((*only, *only, 0.5)),
        [first, second, ..] => {
            let last = values[values.len() - 1];
            Ok((*first, last, (second - first) / 2.0))
        }
    }
}
