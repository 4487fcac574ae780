use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{error::ParseError, Pixel};

/// Integer element types an image can be converted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
pub enum NumericType {
    #[default]
    #[serde(rename = "uint8")]
    U8,
    #[serde(rename = "uint16")]
    U16,
    #[serde(rename = "uint32")]
    U32,
    #[serde(rename = "uint64")]
    U64,
    #[serde(rename = "int8")]
    I8,
    #[serde(rename = "int16")]
    I16,
    #[serde(rename = "int32")]
    I32,
    #[serde(rename = "int64")]
    I64,
}

struct TypeInfo {
    name: &'static str,
    minimum: f64,
    maximum: f64,
}

// Indexed by the discriminant of `NumericType`.
const TYPE_INFO: [TypeInfo; 8] = [
    TypeInfo { name: "uint8", minimum: 0., maximum: u8::MAX as f64 },
    TypeInfo { name: "uint16", minimum: 0., maximum: u16::MAX as f64 },
    TypeInfo { name: "uint32", minimum: 0., maximum: u32::MAX as f64 },
    TypeInfo { name: "uint64", minimum: 0., maximum: u64::MAX as f64 },
    TypeInfo { name: "int8",
               minimum: i8::MIN as f64, maximum: i8::MAX as f64 },
    TypeInfo { name: "int16",
               minimum: i16::MIN as f64, maximum: i16::MAX as f64 },
    TypeInfo { name: "int32",
               minimum: i32::MIN as f64, maximum: i32::MAX as f64 },
    TypeInfo { name: "int64",
               minimum: i64::MIN as f64, maximum: i64::MAX as f64 },
];

impl NumericType {
    /// All known types, unsigned first.
    pub const ALL: [NumericType; 8] = [
        NumericType::U8, NumericType::U16, NumericType::U32, NumericType::U64,
        NumericType::I8, NumericType::I16, NumericType::I32, NumericType::I64];

    #[inline]
    fn info(self) -> &'static TypeInfo { &TYPE_INFO[self as usize] }

    /// The smallest representable value.
    #[inline]
    pub fn minimum(self) -> f64 { self.info().minimum }

    /// The largest representable value.  For 64-bit types this is the
    /// nearest `f64`, which the final cast saturates back into range.
    #[inline]
    pub fn maximum(self) -> f64 { self.info().maximum }

    /// Name of the type, such as `"uint16"`.
    pub fn name(self) -> &'static str { self.info().name }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseError::UnknownType(s.to_string()))
    }
}

/// Pixel types an image can be converted to by [`crate::convert`].
pub trait Quantized: Pixel {
    /// The descriptor of this type.
    const NUMERIC_TYPE: NumericType;
}

impl Quantized for u8 { const NUMERIC_TYPE: NumericType = NumericType::U8; }
impl Quantized for u16 { const NUMERIC_TYPE: NumericType = NumericType::U16; }
impl Quantized for u32 { const NUMERIC_TYPE: NumericType = NumericType::U32; }
impl Quantized for u64 { const NUMERIC_TYPE: NumericType = NumericType::U64; }
impl Quantized for i8 { const NUMERIC_TYPE: NumericType = NumericType::I8; }
impl Quantized for i16 { const NUMERIC_TYPE: NumericType = NumericType::I16; }
impl Quantized for i32 { const NUMERIC_TYPE: NumericType = NumericType::I32; }
impl Quantized for i64 { const NUMERIC_TYPE: NumericType = NumericType::I64; }


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert_eq!(NumericType::U8.minimum(), 0.);
        assert_eq!(NumericType::U8.maximum(), 255.);
        assert_eq!(NumericType::I16.minimum(), -32768.);
        assert_eq!(NumericType::I16.maximum(), 32767.);
        assert_eq!(NumericType::U32.maximum(), 4294967295.);
        assert_eq!(NumericType::default(), NumericType::U8);
    }

    #[test]
    fn table_is_consistent() {
        for t in NumericType::ALL {
            assert!(t.minimum() < t.maximum(), "{t}");
            assert_eq!(t.to_string().parse::<NumericType>().unwrap(), t);
        }
        assert_eq!(u16::NUMERIC_TYPE, NumericType::U16);
        assert_eq!(i32::NUMERIC_TYPE, NumericType::I32);
    }

    #[test]
    fn unknown_type() {
        assert!(matches!("float32".parse::<NumericType>(),
                         Err(ParseError::UnknownType(_))));
    }
}
