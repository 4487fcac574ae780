//! Pseudo-color composites and intensity rescaling for microscopy
//! images.
//!
//! - [`compose`] merges several single-channel images into one RGB
//!   image, each input being tinted by a [`ColorName`].
//! - [`convert`] stretches the intensity range of an image to a new
//!   range and element type, optionally clipping at quantiles.
//!
//! Images are [`ndarray`] arrays of any [`Pixel`] element type.
//!
//! ```
//! use ndarray::array;
//! use color_stack::{compose, ColorName};
//! let a = array![[0u8, 10], [20, 30]];
//! let b = array![[5u8, 5], [5, 5]];
//! let rgb = compose(&[a, b], &[ColorName::Red, ColorName::Green]).unwrap();
//! assert_eq!(rgb.shape(), &[2, 2, 3]);
//! ```

use std::fmt::Debug;

mod colors;
mod compose;
mod convert;
mod error;
mod numeric;
mod quantile;

pub use colors::{ColorName, DEFAULT_COLOR_ORDER};
pub use compose::{compose, compose_weighted, to_rgb_pixels, try_compose,
                  try_compose_weighted};
pub use convert::{convert, convert_to, ConvertOptions, Converted};
pub use error::{CompositeError, ConvertError, ParseError};
pub use numeric::{NumericType, Quantized};
pub use quantile::quantile;

/// Element types an image may be made of.
///
/// Every computation on intensities happens in `f64`; the conversion
/// back follows the `as` semantics of Rust: fractional parts are
/// truncated toward zero and values outside the representable range
/// saturate at its bounds.
pub trait Pixel: Copy + PartialOrd + Default + Debug + Send + Sync {
    /// Return the intensity as a float.  Booleans are 0 or 1.
    fn to_f64(self) -> f64;

    /// Create a pixel from a float intensity.
    fn from_f64(value: f64) -> Self;
}

impl Pixel for bool {
    #[inline]
    fn to_f64(self) -> f64 { if self { 1. } else { 0. } }

    #[inline]
    fn from_f64(value: f64) -> Self { value != 0. }
}

macro_rules! impl_pixel {
    ($($t: ty),*) => {
        $(impl Pixel for $t {
            #[inline]
            fn to_f64(self) -> f64 { self as f64 }

            #[inline]
            fn from_f64(value: f64) -> Self { value as $t }
        })*
    };
}

impl_pixel!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_truncates_and_saturates() {
        assert_eq!(u8::from_f64(127.9), 127);
        assert_eq!(u8::from_f64(-3.), 0);
        assert_eq!(u8::from_f64(300.), 255);
        assert_eq!(i8::from_f64(-1.7), -1);
        assert_eq!(u64::from_f64(u64::MAX as f64), u64::MAX);
    }

    #[test]
    fn booleans_are_zero_or_one() {
        assert_eq!(true.to_f64(), 1.);
        assert_eq!(false.to_f64(), 0.);
        assert!(bool::from_f64(0.5));
        assert!(!bool::from_f64(0.));
    }
}
