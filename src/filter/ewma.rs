//! Implementation of an exponentially weighted moving average (EWMA) filter.
//!
//! Each output is a blend of the previous output and the current input:
//! `y[n] = alpha * y[n - 1] + (1 - alpha) * x[n]`, seeded with the first
//! input sample so there is no start-up ramp.  Larger `alpha` smooths harder.

use num_traits::Float;

/// Smooths `signal` with an exponentially weighted moving average.
///
/// `alpha` is expected to lie in `[0, 1]` but is not validated; values outside
/// that range are applied as given (and logged), which yields an unstable or
/// oscillating response.  Keeping `alpha` sensible is up to the caller.
///
/// # Arguments
///
/// * `signal` - Input samples to be smoothed.
/// * `alpha` - Weight given to the previous output.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::ewma::ewma;
///
/// let smoothed = ewma(&[0.0, 1.0, 1.0], 0.5);
/// assert_eq!(smoothed, vec![0.0, 0.5, 0.75]);
/// ```
pub fn ewma<T>(signal: &[T], alpha: T) -> Vec<T>
where
    T: Float,
{
    if !(alpha >= T::zero() && alpha <= T::one()) {
        warn!(
            "EWMA alpha {} lies outside [0, 1]; output will not be a smoothed signal",
            alpha.to_f64().unwrap_or(f64::NAN)
        );
    }

    let (first, rest) = match signal.split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };

    // Same recurrence, written as a step towards the input so a sample equal
    // to the running value leaves it untouched.
    let beta = T::one() - alpha;
    let mut filt = *first;
    let mut smoothed = Vec::with_capacity(signal.len());
    smoothed.push(filt);
    for x in rest {
        filt = filt + beta * (*x - filt);
        smoothed.push(filt);
    }
    smoothed
}
