use ndarray::{Array2, Array3, ArrayBase, Axis, CowArray, Data, Dimension,
              Ix2, Ix3, Zip};
use rgb::RGB;
use crate::{colors::ColorName, error::CompositeError, Pixel};

/// Merge `images` into one RGB image, tinting the i-th image with the
/// i-th color of `colors`.
///
/// The images must share one shape, either 2-D or 3-D; a 3-D image is
/// first reduced to 2-D by taking its maximum along the last axis.  Each
/// channel of the result is, pixel by pixel, the maximum over the
/// images of the channel weight times the intensity (see
/// [`ColorName::weights`]).  A NaN intensity never exceeds the running
/// maximum, so it contributes nothing to the channel.  The result has
/// the element type of the inputs and a trailing axis of length 3
/// holding red, green and blue.
///
/// Returns `None` and logs a warning if there are fewer than 2 images,
/// fewer colors than images, or the shapes differ.  Use
/// [`try_compose`] to get the reason as an error instead.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use color_stack::{compose, DEFAULT_COLOR_ORDER};
/// let a = array![[1u16, 2]];
/// let b = array![[2u16, 1]];
/// let rgb = compose(&[a, b], &DEFAULT_COLOR_ORDER).unwrap();
/// // gray, then cyan
/// assert_eq!(rgb, array![[[1, 2, 2], [2, 2, 2]]]);
/// assert!(compose(&[array![[1u8]]], &DEFAULT_COLOR_ORDER).is_none());
/// ```
pub fn compose<T, S, D>(images: &[ArrayBase<S, D>], colors: &[ColorName])
                        -> Option<Array3<T>>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    reported(try_compose(images, colors))
}

/// Same as [`compose`] with explicit red, green and blue weights for
/// each image, as in [`try_compose_weighted`].  Returns `None` and logs
/// a warning when the images or weights are rejected.
///
/// ```
/// use ndarray::array;
/// use rgb::RGB;
/// use color_stack::compose_weighted;
/// let orange = RGB::new(0.9, 0.5, 0.);
/// let blue = RGB::new(0., 0., 1.);
/// let rgb = compose_weighted(&[array![[100u8]], array![[7u8]]],
///                            &[orange, blue]);
/// assert_eq!(rgb, Some(array![[[90, 50, 7]]]));
/// ```
pub fn compose_weighted<T, S, D>(images: &[ArrayBase<S, D>],
                                 weights: &[RGB<f64>]) -> Option<Array3<T>>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    reported(try_compose_weighted(images, weights))
}

fn reported<T>(composite: Result<Array3<T>, CompositeError>)
               -> Option<Array3<T>> {
    match composite {
        Ok(composite) => Some(composite),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// Same as [`compose`] but return the reason of a failure.
pub fn try_compose<T, S, D>(images: &[ArrayBase<S, D>], colors: &[ColorName])
                            -> Result<Array3<T>, CompositeError>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    let weights: Vec<RGB<f64>> = colors.iter().map(|c| c.weights()).collect();
    try_compose_weighted(images, &weights)
}

/// Same as [`try_compose`] but with explicit red, green and blue
/// weights for each image instead of named colors.  Weights are
/// usually in \[0, 1\]; they must be finite and non-negative.
///
/// ```
/// use ndarray::array;
/// use rgb::RGB;
/// use color_stack::try_compose_weighted;
/// let orange = RGB::new(0.9, 0.5, 0.);
/// let blue = RGB::new(0., 0., 1.);
/// let rgb = try_compose_weighted(&[array![[100u8]], array![[7u8]]],
///                                &[orange, blue]).unwrap();
/// assert_eq!(rgb, array![[[90, 50, 7]]]);
/// ```
pub fn try_compose_weighted<T, S, D>(images: &[ArrayBase<S, D>],
                                     weights: &[RGB<f64>])
                                     -> Result<Array3<T>, CompositeError>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    if images.len() < 2 {
        return Err(CompositeError::TooFewImages { count: images.len() })
    }
    if weights.len() < images.len() {
        return Err(CompositeError::TooFewColors { images: images.len(),
                                                  colors: weights.len() })
    }
    let shape = images[0].shape();
    if let Some(other) = images.iter().map(|im| im.shape())
        .find(|&s| s != shape) {
        return Err(CompositeError::MismatchedShapes {
            first: shape.to_vec(), other: other.to_vec() })
    }
    if !matches!(shape.len(), 2 | 3) {
        return Err(CompositeError::UnsupportedDimensions { ndim: shape.len() })
    }
    for (index, w) in weights[.. images.len()].iter().enumerate() {
        if ![w.r, w.g, w.b].iter().all(|&x| x.is_finite() && x >= 0.) {
            return Err(CompositeError::InvalidWeight {
                index, r: w.r, g: w.g, b: w.b })
        }
    }

    let (rows, cols) = (shape[0], shape[1]);
    let mut channels: [Array2<T>; 3] =
        std::array::from_fn(|_| Array2::default((rows, cols)));
    for (image, w) in images.iter().zip(weights) {
        let plane = max_projection(image)?;
        for (channel, weight) in channels.iter_mut().zip([w.r, w.g, w.b]) {
            if weight > 0. {
                stack_max(channel, &plane, weight);
            }
        }
    }
    Ok(Array3::from_shape_fn((rows, cols, 3), |(i, j, c)| channels[c][[i, j]]))
}

/// Return `image` as a 2-D view, reducing a 3-D stack by its maximum
/// along the last axis.
fn max_projection<T, S, D>(image: &ArrayBase<S, D>)
                           -> Result<CowArray<'_, T, Ix2>, CompositeError>
where T: Pixel, S: Data<Elem = T>, D: Dimension {
    let ndim = image.ndim();
    let unsupported = |_| CompositeError::UnsupportedDimensions { ndim };
    let view = image.view().into_dyn();
    if ndim == 2 {
        return Ok(view.into_dimensionality::<Ix2>().map_err(unsupported)?
                  .into())
    }
    let stack = view.into_dimensionality::<Ix3>().map_err(unsupported)?;
    let plane = stack.map_axis(Axis(2), |lane| {
        lane.iter().copied()
            .reduce(|m, x| if x > m { x } else { m })
            .unwrap_or_default() });
    Ok(plane.into())
}

/// Raise each pixel of `channel` to `weight` times the matching pixel of
/// `plane` when the latter is larger.
fn stack_max<T, S>(channel: &mut Array2<T>, plane: &ArrayBase<S, Ix2>,
                   weight: f64)
where T: Pixel, S: Data<Elem = T> {
    Zip::from(channel).and(plane).for_each(|acc, &x| {
        // Unit weights keep 64-bit values exact.
        let x = if weight == 1. { x } else { T::from_f64(weight * x.to_f64()) };
        if x > *acc { *acc = x }
    });
}

/// Return the pixels of a composite made by [`compose`] as RGB
/// triples, or `None` if the last axis of `composite` is not of
/// length 3.
pub fn to_rgb_pixels<T, S>(composite: &ArrayBase<S, Ix3>)
                           -> Option<Array2<RGB<T>>>
where T: Copy, S: Data<Elem = T> {
    let (rows, cols, n) = composite.dim();
    if n != 3 { return None }
    Some(Array2::from_shape_fn((rows, cols), |(i, j)| {
        RGB::new(composite[[i, j, 0]], composite[[i, j, 1]],
                 composite[[i, j, 2]]) }))
}
