//! Error types.

use thiserror::Error;

/// Reasons why a composite cannot be built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositeError {
    /// Compositing needs at least two images.
    #[error("compositing needs a list of at least 2 images, got {count}")]
    TooFewImages { count: usize },

    /// Every image needs its own color.
    #[error("{colors} color(s) given for {images} image(s), \
             use at least as many colors as images")]
    TooFewColors { images: usize, colors: usize },

    /// All input images must have the same shape.
    #[error("all input images must have the same shape, \
             got {first:?} and {other:?}")]
    MismatchedShapes { first: Vec<usize>, other: Vec<usize> },

    /// Images must be 2-D, or 3-D with channels on the last axis.
    #[error("images must be 2-D or 3-D, got {ndim} dimension(s)")]
    UnsupportedDimensions { ndim: usize },

    /// Channel weights must be finite and non-negative.
    #[error("invalid channel weights for image {index}: \
             ({r}, {g}, {b})")]
    InvalidWeight { index: usize, r: f64, g: f64, b: f64 },
}

/// Reasons why an image cannot be converted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// There are no values to derive an intensity range from.
    #[error("cannot convert an empty image")]
    EmptyImage,

    /// Quantiles are fractions in \[0, 1\].
    #[error("{name} must lie in [0, 1], got {value}")]
    QuantileOutOfRange { name: &'static str, value: f64 },

    /// The requested output range is inverted (or NaN).
    #[error("new minimum {minimum} exceeds new maximum {maximum}")]
    InvertedTargetRange { minimum: f64, maximum: f64 },

    /// Float images must not hold NaN or infinite intensities.
    #[error("cannot convert non-finite intensity {value}")]
    NonFiniteIntensity { value: f64 },

    /// The source range is a single value, the linear map does not
    /// exist.
    #[error("division by zero: source minimum and maximum are both {value}")]
    DegenerateRange { value: f64 },
}

/// Unknown names for colors or numeric types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown color “{0}”")]
    UnknownColor(String),

    #[error("unknown numeric type “{0}”")]
    UnknownType(String),
}
