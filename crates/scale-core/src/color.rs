// File: crates/scale-core/src/color.rs
// Summary: RGBA color value with hex and named-color conversions.

use std::fmt;

use scarlet::color::RGBColor;

use crate::error::{Result, ScaleError};

/// A color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Single-letter base colors.
const BASE_COLORS: [(&str, [f64; 3]); 8] = [
    ("b", [0.0, 0.0, 1.0]),
    ("g", [0.0, 0.5, 0.0]),
    ("r", [1.0, 0.0, 0.0]),
    ("c", [0.0, 0.75, 0.75]),
    ("m", [0.75, 0.0, 0.75]),
    ("y", [0.75, 0.75, 0.0]),
    ("k", [0.0, 0.0, 0.0]),
    ("w", [1.0, 1.0, 1.0]),
];

/// Web color names whose X11 definition differs; everything else resolves
/// through scarlet's X11 table.
const WEB_OVERRIDES: [(&str, &str); 5] = [
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("green", "#008000"),
    ("maroon", "#800000"),
    ("purple", "#800080"),
];

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Accepts a triple in either `[0, 1]` or `[0, 255]`; the latter is
    /// assumed as soon as any channel leaves the unit interval.
    pub fn from_rgb_any(rgb: [f64; 3]) -> Result<Self> {
        if rgb.iter().any(|c| !c.is_finite() || *c < 0.0 || *c > 255.0) {
            return Err(ScaleError::InvalidColor(format!("{rgb:?}")));
        }
        if rgb.iter().all(|c| *c <= 1.0) {
            Ok(Self::rgb(rgb[0], rgb[1], rgb[2]))
        } else {
            Ok(Self::rgb(rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0))
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bad = || ScaleError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(bad)?;
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let (rgb, alpha) = match digits.len() {
            6 => (digits, None),
            8 => (&digits[..6], Some(&digits[6..])),
            _ => return Err(bad()),
        };
        let color = RGBColor::from_hex_code(&format!("#{rgb}")).map_err(|_| bad())?;
        let a = match alpha {
            Some(aa) => u8::from_str_radix(aa, 16).map_err(|_| bad())? as f64 / 255.0,
            None => 1.0,
        };
        Ok(Self { a, ..Self::from(color) })
    }

    /// Resolve a base-color letter, a color name, or a hex string.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.starts_with('#') {
            return Self::from_hex(name);
        }
        if let Some((_, [r, g, b])) = BASE_COLORS.iter().find(|(short, _)| *short == name) {
            return Ok(Self::rgb(*r, *g, *b));
        }
        if let Some((_, hex)) = WEB_OVERRIDES.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            return Self::from_hex(hex);
        }
        RGBColor::from_color_name(name)
            .map(Self::from)
            .map_err(|_| ScaleError::InvalidColor(name.to_string()))
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Componentwise interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl From<RGBColor> for Rgba {
    fn from(c: RGBColor) -> Self {
        Self::rgb(c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
