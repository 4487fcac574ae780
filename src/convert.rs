use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use crate::{error::ConvertError, numeric::{NumericType, Quantized},
            quantile::quantile_of, Pixel};

/// Options for [`convert`] and [`convert_to`].
///
/// Every option is unset by default.  The new range defaults to the
/// range of the target type; the source range to the minimum and
/// maximum of the image.
///
/// ```
/// use color_stack::ConvertOptions;
/// let opts = ConvertOptions::new().new_maximum(4095.).max_quantile(0.99);
/// assert_eq!(opts.new_minimum, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Lower bound of the output range.
    pub new_minimum: Option<f64>,
    /// Upper bound of the output range.
    pub new_maximum: Option<f64>,
    /// Quantile (in \[0, 1\]) of the image mapped to `new_minimum`.
    /// Intensities below it are clipped.
    pub min_quantile: Option<f64>,
    /// Quantile (in \[0, 1\]) of the image mapped to `new_maximum`.
    /// Intensities above it are clipped.
    pub max_quantile: Option<f64>,
}

impl ConvertOptions {
    pub fn new() -> Self { Self::default() }

    pub fn new_minimum(mut self, v: f64) -> Self {
        self.new_minimum = Some(v);
        self
    }

    pub fn new_maximum(mut self, v: f64) -> Self {
        self.new_maximum = Some(v);
        self
    }

    pub fn min_quantile(mut self, q: f64) -> Self {
        self.min_quantile = Some(q);
        self
    }

    pub fn max_quantile(mut self, q: f64) -> Self {
        self.max_quantile = Some(q);
        self
    }
}

/// The affine map `x ↦ a x + b` clamped to `[minimum, maximum]`.
#[derive(Debug, Clone, Copy)]
struct LinearMap {
    a: f64,
    b: f64,
    minimum: f64,
    maximum: f64,
}

fn check_quantile(name: &'static str, q: Option<f64>)
                  -> Result<(), ConvertError> {
    match q {
        Some(value) if !(0. ..= 1.).contains(&value) =>
            Err(ConvertError::QuantileOutOfRange { name, value }),
        _ => Ok(()),
    }
}

impl LinearMap {
    fn resolve<T, S, D>(image: &ArrayBase<S, D>, target: NumericType,
                        options: &ConvertOptions) -> Result<Self, ConvertError>
    where T: Pixel, S: Data<Elem = T>, D: Dimension {
        let new_minimum = options.new_minimum.unwrap_or(target.minimum());
        let new_maximum = options.new_maximum.unwrap_or(target.maximum());
        if !(new_minimum <= new_maximum) {
            return Err(ConvertError::InvertedTargetRange {
                minimum: new_minimum, maximum: new_maximum })
        }
        check_quantile("min_quantile", options.min_quantile)?;
        check_quantile("max_quantile", options.max_quantile)?;
        if image.is_empty() { return Err(ConvertError::EmptyImage) }

        // Booleans become 0 and 1 here.
        let mut values: Vec<f64> = image.iter().map(|&x| x.to_f64()).collect();
        if let Some(&value) = values.iter().find(|x| !x.is_finite()) {
            return Err(ConvertError::NonFiniteIntensity { value })
        }
        let (lo, hi) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &x| (lo.min(x), hi.max(x)));
        let mut source = |q: Option<f64>, extremum: f64| match q {
            Some(q) => quantile_of(&mut values, q).unwrap_or(extremum),
            None => extremum,
        };
        let source_minimum = source(options.min_quantile, lo);
        let source_maximum = source(options.max_quantile, hi);

        let span = source_maximum - source_minimum;
        if span == 0. {
            return Err(ConvertError::DegenerateRange { value: source_minimum })
        }
        let a = (new_maximum - new_minimum) / span;
        let b = new_maximum - a * source_maximum;
        log::debug!("convert to {target}: [{source_minimum}, {source_maximum}] \
                     -> [{new_minimum}, {new_maximum}]");
        Ok(LinearMap { a, b, minimum: new_minimum, maximum: new_maximum })
    }

    #[inline]
    fn apply(&self, x: f64) -> f64 {
        (self.a * x + self.b).clamp(self.minimum, self.maximum)
    }
}

/// Rescale the intensities of `image` linearly and convert them to the
/// integer type `U`.
///
/// The source range `[m, M]` (the image minimum and maximum, or the
/// quantiles set in `options`) is mapped onto the new range
/// `[n, N]` (set in `options`, or the full range of `U`): `M` goes to
/// `N`, `m` to `n` and values outside `[m, M]` are clipped.  Fractional
/// results are truncated toward zero.  The input is left untouched.
///
/// Fails with [`ConvertError::DegenerateRange`] when `m == M`, e.g. for
/// a constant image; callers are expected to guard against it.  Float
/// images holding NaN or infinite intensities are rejected with
/// [`ConvertError::NonFiniteIntensity`].
///
/// # Example
///
/// ```
/// use ndarray::{array, Array1};
/// use color_stack::{convert, ConvertOptions};
/// let opts = ConvertOptions::new().new_minimum(0.).new_maximum(100.);
/// let out: Array1<u8> = convert(&array![10u8, 20, 30], &opts)?;
/// assert_eq!(out, array![0, 50, 100]);
/// # Ok::<(), color_stack::ConvertError>(())
/// ```
pub fn convert<U, T, S, D>(image: &ArrayBase<S, D>, options: &ConvertOptions)
                           -> Result<Array<U, D>, ConvertError>
where U: Quantized, T: Pixel, S: Data<Elem = T>, D: Dimension {
    let map = LinearMap::resolve(image, U::NUMERIC_TYPE, options)?;
    Ok(image.mapv(|x| U::from_f64(map.apply(x.to_f64()))))
}

/// An image converted by [`convert_to`], tagged with its element type.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted<D: Dimension> {
    U8(Array<u8, D>),
    U16(Array<u16, D>),
    U32(Array<u32, D>),
    U64(Array<u64, D>),
    I8(Array<i8, D>),
    I16(Array<i16, D>),
    I32(Array<i32, D>),
    I64(Array<i64, D>),
}

impl<D: Dimension> Converted<D> {
    /// The element type of the image.
    pub fn numeric_type(&self) -> NumericType {
        match self {
            Converted::U8(_) => NumericType::U8,
            Converted::U16(_) => NumericType::U16,
            Converted::U32(_) => NumericType::U32,
            Converted::U64(_) => NumericType::U64,
            Converted::I8(_) => NumericType::I8,
            Converted::I16(_) => NumericType::I16,
            Converted::I32(_) => NumericType::I32,
            Converted::I64(_) => NumericType::I64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Converted::U8(a) => a.shape(),
            Converted::U16(a) => a.shape(),
            Converted::U32(a) => a.shape(),
            Converted::U64(a) => a.shape(),
            Converted::I8(a) => a.shape(),
            Converted::I16(a) => a.shape(),
            Converted::I32(a) => a.shape(),
            Converted::I64(a) => a.shape(),
        }
    }
}

/// Same as [`convert`] with the target type chosen at run time.
///
/// ```
/// use ndarray::array;
/// use color_stack::{convert_to, ConvertOptions, Converted, NumericType};
/// let t: NumericType = "int8".parse()?;
/// let out = convert_to(&array![0u16, 65535], t, &ConvertOptions::new())?;
/// assert_eq!(out, Converted::I8(array![-128, 127]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_to<T, S, D>(image: &ArrayBase<S, D>, target: NumericType,
                           options: &ConvertOptions)
                           -> Result<Converted<D>, ConvertError>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    use NumericType::*;
    Ok(match target {
        U8 => Converted::U8(convert(image, options)?),
        U16 => Converted::U16(convert(image, options)?),
        U32 => Converted::U32(convert(image, options)?),
        U64 => Converted::U64(convert(image, options)?),
        I8 => Converted::I8(convert(image, options)?),
        I16 => Converted::I16(convert(image, options)?),
        I32 => Converted::I32(convert(image, options)?),
        I64 => Converted::I64(convert(image, options)?),
    })
}
