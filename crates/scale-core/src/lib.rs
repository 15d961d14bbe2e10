// File: crates/scale-core/src/lib.rs
// Summary: Core library entry point; exports tick synthesis, label formatting and
// center-anchored colormap remapping.

pub mod rounding;
pub mod grid;
pub mod error;
pub mod ticks;
pub mod labels;
pub mod color;
pub mod palette;
pub mod colormap;
pub mod axis;
pub mod config;
pub mod plan;

pub use error::{Result, ScaleError};
pub use rounding::{ceil_to, floor_to, round_to};
pub use ticks::{best_ticks, best_ticks_from_values, colorbar_ticks, NumericSpan, TickOptions, TickSet};
pub use labels::{labels_from_ticks, LabelSet};
pub use color::Rgba;
pub use palette::{ContinuousPalette, FnPalette, Palette};
pub use colormap::{remap, ColorMapSpec, ColorTable, SampleAllocation, SequencingMode, TABLE_SIZE};
pub use axis::{Axis, AxisTicks, TickMark};
pub use config::{FigureConfig, FontWeight, TickDirection};
pub use plan::{ChartAssembler, Extent, FigurePlan, HeatmapSpec, Origin};
