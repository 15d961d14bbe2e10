// File: crates/scale-core/src/error.rs
// Summary: Error taxonomy for tick synthesis, labelling and colormap remapping.

use thiserror::Error;

/// Precondition violations detected before any output is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// Explicit or derived step is not strictly smaller than the span (or not positive).
    #[error("step {step} is too large for span {span}")]
    InvalidStep { step: f64, span: f64 },

    /// Range endpoints are reversed, non-finite, or there is no data to span.
    #[error("invalid span [{start}, {end}]")]
    InvalidSpan { start: f64, end: f64 },

    /// Step is valid but would produce more than `limit` ticks.
    #[error("step {step} over span {span} yields more than {limit} ticks")]
    TooManyTicks { step: f64, span: f64, limit: usize },

    #[error("image shape {rows}x{cols} has no pixels")]
    EmptyImage { rows: usize, cols: usize },

    #[error("invalid color specification: {0}")]
    InvalidColorSpec(String),

    /// Caller-supplied collections disagree in length.
    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch { what: &'static str, expected: usize, got: usize },

    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ScaleError>;
