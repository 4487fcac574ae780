use std::fmt;
use std::str::FromStr;
use rgb::RGB;
use serde::{Deserialize, Serialize};
use crate::error::ParseError;

/// Colors an input image can be tinted with in a composite.
///
/// Each color projects an intensity onto the red, green and blue
/// channels with the weights returned by [`ColorName::weights`].  To
/// support a new color, add a case here and a row to the weight table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Gray,
    Cyan,
    Yellow,
    Magenta,
    Blue,
    Green,
    Red,
}

/// The order in which colors are handed out when none are chosen.
pub const DEFAULT_COLOR_ORDER: [ColorName; 7] = [
    ColorName::Gray, ColorName::Cyan, ColorName::Yellow, ColorName::Magenta,
    ColorName::Blue, ColorName::Green, ColorName::Red];

// Indexed by the discriminant of `ColorName`.
const WEIGHTS: [RGB<f64>; 7] = [
    RGB { r: 1., g: 1., b: 1. }, // gray
    RGB { r: 0., g: 1., b: 1. }, // cyan
    RGB { r: 1., g: 1., b: 0. }, // yellow
    RGB { r: 1., g: 0., b: 1. }, // magenta
    RGB { r: 0., g: 0., b: 1. }, // blue
    RGB { r: 0., g: 1., b: 0. }, // green
    RGB { r: 1., g: 0., b: 0. }, // red
];

impl ColorName {
    /// Return the red, green and blue weights (in \[0, 1\]) of the
    /// color.
    #[inline]
    pub fn weights(self) -> RGB<f64> { WEIGHTS[self as usize] }

    /// Return the lowercase name of the color.
    pub fn name(self) -> &'static str {
        use ColorName::*;
        match self {
            Gray => "gray",
            Cyan => "cyan",
            Yellow => "yellow",
            Magenta => "magenta",
            Blue => "blue",
            Green => "green",
            Red => "red",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorName {
    type Err = ParseError;

    /// Parse a color from its name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DEFAULT_COLOR_ORDER.iter().copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}
