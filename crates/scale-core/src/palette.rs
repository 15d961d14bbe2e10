// File: crates/scale-core/src/palette.rs
// Summary: Base continuous palettes (maps of [0, 1] to colors) addressed by id.

use scarlet::color::RGBColor;
use scarlet::colormap::{ColorMap, ListedColorMap};

use crate::color::Rgba;
use crate::error::{Result, ScaleError};

/// A continuous mapping of the numbers between 0 and 1 to colors.
/// Out-of-range inputs are clamped.
pub trait ContinuousPalette {
    fn sample(&self, t: f64) -> Rgba;

    fn sample_many<I: IntoIterator<Item = f64>>(&self, ts: I) -> Vec<Rgba>
    where
        Self: Sized,
    {
        ts.into_iter().map(|t| self.sample(t)).collect()
    }
}

/// Adapts any `Fn(f64) -> Rgba` into a palette.
pub struct FnPalette<F>(pub F);

impl<F: Fn(f64) -> Rgba> ContinuousPalette for FnPalette<F> {
    fn sample(&self, t: f64) -> Rgba {
        (self.0)(t.clamp(0.0, 1.0))
    }
}

/// Equally spaced color stops with linear interpolation between neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    name: String,
    stops: Vec<Rgba>,
}

// ColorBrewer 11-class diverging schemes, low to high.
const RDBU: [&str; 11] = [
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7",
    "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061",
];
const RDYLBU: [&str; 11] = [
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf",
    "#e0f3f8", "#abd9e9", "#74add1", "#4575b4", "#313695",
];
const PUOR: [&str; 11] = [
    "#7f3b08", "#b35806", "#e08214", "#fdb863", "#fee0b6", "#f7f7f7",
    "#d8daeb", "#b2abd2", "#8073ac", "#542788", "#2d004b",
];
const BRBG: [&str; 11] = [
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5",
    "#c7eae5", "#80cdc1", "#35978f", "#01665e", "#003c30",
];
const PIYG: [&str; 11] = [
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef", "#f7f7f7",
    "#e6f5d0", "#b8e186", "#7fbc41", "#4d9221", "#276419",
];
const PRGN: [&str; 11] = [
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8", "#f7f7f7",
    "#d9f0d3", "#a6dba0", "#5aae61", "#1b7837", "#00441b",
];
const RDGY: [&str; 11] = [
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#ffffff",
    "#e0e0e0", "#bababa", "#878787", "#4d4d4d", "#1a1a1a",
];
const SPECTRAL: [&str; 11] = [
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf",
    "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
];
const GREYS: [&str; 9] = [
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373",
    "#525252", "#252525", "#000000",
];
const GRAY: [&str; 2] = ["#000000", "#ffffff"];
const BWR: [&str; 3] = ["#0000ff", "#ffffff", "#ff0000"];

const SEISMIC: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.3],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

/// Ids accepted by [`Palette::by_name`]; each also accepts a `_r` suffix.
pub const PALETTE_NAMES: [&str; 16] = [
    "RdBu", "RdYlBu", "PuOr", "BrBG", "PiYG", "PRGn", "RdGy", "Spectral",
    "Greys", "gray", "bwr", "seismic", "viridis", "plasma", "magma", "inferno",
];

impl Palette {
    /// Contract: at least two stops.
    pub fn new(name: impl Into<String>, stops: Vec<Rgba>) -> Result<Self> {
        let name = name.into();
        if stops.len() < 2 {
            return Err(ScaleError::InvalidColorSpec(format!(
                "palette '{name}' needs at least two stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { name, stops })
    }

    /// Look up a built-in palette; a trailing `_r` reverses it (e.g. `RdBu_r`).
    pub fn by_name(id: &str) -> Result<Self> {
        if let Some(base) = id.strip_suffix("_r") {
            let mut p = Self::by_name(base)?.reversed();
            p.name = id.to_string();
            return Ok(p);
        }
        let stops = match id {
            "RdBu" => from_hex_stops(&RDBU)?,
            "RdYlBu" => from_hex_stops(&RDYLBU)?,
            "PuOr" => from_hex_stops(&PUOR)?,
            "BrBG" => from_hex_stops(&BRBG)?,
            "PiYG" => from_hex_stops(&PIYG)?,
            "PRGn" => from_hex_stops(&PRGN)?,
            "RdGy" => from_hex_stops(&RDGY)?,
            "Spectral" => from_hex_stops(&SPECTRAL)?,
            "Greys" => from_hex_stops(&GREYS)?,
            "gray" => from_hex_stops(&GRAY)?,
            "bwr" => from_hex_stops(&BWR)?,
            "seismic" => from_unit_stops(&SEISMIC),
            "viridis" => listed_stops(&ListedColorMap::viridis()),
            "plasma" => listed_stops(&ListedColorMap::plasma()),
            "magma" => listed_stops(&ListedColorMap::magma()),
            "inferno" => listed_stops(&ListedColorMap::inferno()),
            _ => return Err(ScaleError::UnknownPalette(id.to_string())),
        };
        Self::new(id, stops)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn stops(&self) -> &[Rgba] { &self.stops }

    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self { name: format!("{}_r", self.name), stops }
    }
}

impl ContinuousPalette for Palette {
    fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let float_ind = t * (self.stops.len() - 1) as f64;
        let lo = float_ind.floor() as usize;
        let hi = float_ind.ceil() as usize;
        if lo == hi {
            // exactly on a stop, no interpolation
            self.stops[lo]
        } else {
            self.stops[lo].lerp(&self.stops[hi], float_ind - lo as f64)
        }
    }
}

fn from_hex_stops(hex: &[&str]) -> Result<Vec<Rgba>> {
    hex.iter().map(|h| Rgba::from_hex(h)).collect()
}

fn from_unit_stops(rgb: &[[f64; 3]]) -> Vec<Rgba> {
    rgb.iter().map(|c| Rgba::rgb(c[0], c[1], c[2])).collect()
}

/// The raw 256-entry tables behind scarlet's matplotlib colormaps.
fn listed_stops(map: &ListedColorMap) -> Vec<Rgba> {
    from_unit_stops(&map.vals)
}

/// Any scarlet listed colormap can be remapped directly. Its own interpolation
/// goes through XYZ, so results agree with [`Palette`] up to float noise.
impl ContinuousPalette for ListedColorMap {
    fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t };
        let c: RGBColor = self.transform_single(t);
        Rgba::from(c)
    }
}
