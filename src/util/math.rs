use num_traits::{Float, NumCast};

/// Converts an index or a length into the float type `T`.
///
/// All of the normal caveats with using the `as` keyword apply here.  Every
/// primitive float can represent a `usize` (possibly rounded), so the NaN
/// fallback is only reachable for exotic `Float` implementations.
pub fn as_float<T>(n: usize) -> T
where
    T: Float + NumCast,
{
    T::from(n).unwrap_or_else(T::nan)
}

/// Generates `size` equidistant points spanning `[min, max]`, both ends
/// included.
///
/// The bounds may be given in either order; the span always runs from the
/// smaller to the larger one.  A `size` of zero yields an empty vector and a
/// `size` of one yields just the lower bound.
///
/// # Arguments
///
/// * `min` - One end of the span.
/// * `max` - The other end of the span.
/// * `size` - Number of points to generate.
///
/// # Examples
///
/// ```
/// use dsp_rs::util::math::span;
///
/// assert_eq!(span(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// assert_eq!(span(8.0, 0.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// ```
pub fn span<T>(min: T, max: T, size: usize) -> Vec<T>
where
    T: Float,
{
    let low = min.min(max);
    let high = min.max(max);
    if size == 1 {
        return vec![low];
    }

    let width = high - low;
    let last: T = as_float(size.saturating_sub(1));
    (0..size)
        .map(|i| low + width * (as_float::<T>(i) / last))
        .collect()
}
