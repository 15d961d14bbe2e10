// File: crates/scale-core/src/config.rs
// Summary: Immutable figure configuration handed to the renderer at call time.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    #[default]
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickDirection {
    In,
    #[default]
    Out,
    InOut,
}

/// Everything the renderer needs to know about styling. Values are never
/// mutated in place; the `with_*` methods return modified copies.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureConfig {
    pub dpi: u32,
    /// Width and height in inches.
    pub figsize: (f64, f64),
    pub font_family: String,
    pub axis_label_size: f32,
    pub axis_label_weight: FontWeight,
    pub tick_label_size: f32,
    pub tick_label_weight: FontWeight,
    pub title_size: f32,
    pub title_weight: FontWeight,
    pub line_width: f32,
    pub tick_direction: TickDirection,
    pub hide_top_right: bool,
    /// Colorbar height as a fraction of the figure height.
    pub colorbar_height: f32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            dpi: 100,
            figsize: (6.0, 4.0),
            font_family: "Arial".to_string(),
            axis_label_size: 20.0,
            axis_label_weight: FontWeight::Bold,
            tick_label_size: 16.0,
            tick_label_weight: FontWeight::Regular,
            title_size: 24.0,
            title_weight: FontWeight::Bold,
            line_width: 2.0,
            tick_direction: TickDirection::Out,
            hide_top_right: true,
            colorbar_height: 0.3,
        }
    }
}

impl FigureConfig {
    /// Smaller type and thinner lines, with all four spines, for heatmaps.
    pub fn heatmap() -> Self {
        Self {
            axis_label_size: 14.0,
            tick_label_size: 10.0,
            title_size: 14.0,
            line_width: 1.0,
            hide_top_right: false,
            ..Self::default()
        }
    }

    pub fn with_dpi(&self, dpi: u32) -> Self {
        Self { dpi, ..self.clone() }
    }

    pub fn with_figsize(&self, width: f64, height: f64) -> Self {
        Self { figsize: (width, height), ..self.clone() }
    }

    pub fn with_font_family(&self, family: impl Into<String>) -> Self {
        Self { font_family: family.into(), ..self.clone() }
    }

    pub fn with_line_width(&self, line_width: f32) -> Self {
        Self { line_width, ..self.clone() }
    }

    /// Surface size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(1.0) as u32;
        (px(self.figsize.0), px(self.figsize.1))
    }
}
