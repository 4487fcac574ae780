use ndarray::{ArrayBase, Data, Dimension};
use crate::{error::ConvertError, Pixel};

/// Return the `q`-quantile (`q` ∈ \[0, 1\]) of the values of `image`.
///
/// Interpolates linearly between the two closest ranks: with the
/// values sorted as `v`, `h = (n - 1) q` and the result is
/// `v[⌊h⌋] + (h - ⌊h⌋) (v[⌊h⌋ + 1] - v[⌊h⌋])`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use color_stack::quantile;
/// let q = quantile(&array![4u8, 1, 3, 2], 0.5).unwrap();
/// assert_eq!(q, 2.5);
/// ```
pub fn quantile<T, S, D>(image: &ArrayBase<S, D>, q: f64)
                         -> Result<f64, ConvertError>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    if !(0. ..= 1.).contains(&q) {
        return Err(ConvertError::QuantileOutOfRange { name: "quantile",
                                                      value: q })
    }
    let mut values: Vec<f64> = image.iter().map(|&x| x.to_f64()).collect();
    quantile_of(&mut values, q).ok_or(ConvertError::EmptyImage)
}

/// Quantile of `values` (reordered in the process).  `q` must be in
/// \[0, 1\].
pub(crate) fn quantile_of(values: &mut [f64], q: f64) -> Option<f64> {
    if values.is_empty() { return None }
    let h = (values.len() - 1) as f64 * q;
    let j = h.floor() as usize;
    let gamma = h - j as f64;
    let (_, &mut vj, upper) = values.select_nth_unstable_by(j, f64::total_cmp);
    if gamma == 0. || upper.is_empty() { return Some(vj) }
    // The next rank is the smallest value above position `j`.
    let vj1 = upper.iter().copied().fold(f64::INFINITY, f64::min);
    Some(vj + gamma * (vj1 - vj))
}
