//! Piecewise linear resampling of an evenly sampled signal.
//!
//! Both the old and the new samples are laid out evenly over the normalized
//! axis `[0, 1]`.  Every interior new sample is found in the old axis with a
//! binary search and interpolated from its two neighbours, so resampling to
//! `n` points costs `O(n log m)` for `m` input samples.

use crate::util::math::{as_float, span};
use num_traits::Float;

/// Resamples `values` to `new_size` samples by piecewise linear
/// interpolation.
///
/// The first and last outputs are copied from the first and last inputs
/// rather than interpolated, so the end points survive exactly.  An empty
/// input or a `new_size` of zero gives an empty output, and a `new_size` of
/// one gives just the first input sample.
///
/// # Arguments
///
/// * `values` - Evenly sampled input signal.
/// * `new_size` - Number of samples in the output.
///
/// # Examples
///
/// ```
/// use dsp_rs::interpolate::resample::resample;
///
/// assert_eq!(resample(&[0.0, 1.0, 0.0], 5), vec![0.0, 0.5, 1.0, 0.5, 0.0]);
/// ```
pub fn resample<T>(values: &[T], new_size: usize) -> Vec<T>
where
    T: Float,
{
    let (first, last) = match (values.first(), values.last()) {
        (Some(first), Some(last)) if new_size > 0 => (*first, *last),
        _ => return Vec::new(),
    };
    if new_size == 1 {
        return vec![first];
    }
    if values.len() == 1 {
        return vec![first; new_size];
    }

    let axis = span(T::zero(), T::one(), values.len());
    let step: T = as_float(new_size - 1);

    let mut resampled = Vec::with_capacity(new_size);
    resampled.push(first);
    for index in 1..new_size - 1 {
        let x = as_float::<T>(index) / step;
        // First old axis point at or above `x`.  `x` lies strictly inside
        // (0, 1) so `upper` always lands in 1..len.
        let upper = axis.partition_point(|a| *a < x);
        let lower = upper - 1;
        let w = (x - axis[lower]) / (axis[upper] - axis[lower]);
        resampled.push((T::one() - w) * values[lower] + w * values[upper]);
    }
    resampled.push(last);
    resampled
}
