//! One dimensional linear interpolation at arbitrary query points.
//!
//! The samples are sorted by their x value, checked for repeated x values and
//! then every query is located in the sorted axis by binary search.  Locating
//! a query yields the index of the bracketing range together with the
//! fractional position inside it; that pair is then resolved against the
//! sorted values.  The two steps are exposed separately as `locate` and
//! `interpolate_at`.

use crate::interpolate::InterpError;
use num_traits::Float;
use std::cmp::Ordering;

/// Linearly interpolates the function sampled at `(x, v)` at every point in
/// `queries`.
///
/// The samples may come in any order.  Fails with `InvalidInput` when `x` and
/// `v` differ in length, are empty or `x` contains NaN, with
/// `DuplicateSample` when two samples share an x value and with `OutOfRange`
/// when any query falls outside `[min(x), max(x)]`.  A single bad query fails
/// the whole batch.
///
/// # Arguments
///
/// * `x` - Sample points of the independent variable.
/// * `v` - Sample values, `v[i]` belongs to `x[i]`.
/// * `queries` - Points at which to evaluate the interpolant.
///
/// # Examples
///
/// ```
/// use dsp_rs::interpolate::interp1::interp1;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let v = [10.0, 20.0, 30.0, 40.0, 50.0];
///
/// let result = interp1(&x, &v, &[2.5, 3.5, 4.5]).unwrap();
/// assert_eq!(result, vec![25.0, 35.0, 45.0]);
///
/// assert!(interp1(&x, &v, &[6.0]).is_err());
/// ```
pub fn interp1<T>(x: &[T], v: &[T], queries: &[T]) -> Result<Vec<T>, InterpError>
where
    T: Float,
{
    let invalid = |reason: String| {
        debug!("rejecting interpolation input: {}", reason);
        InterpError::InvalidInput(reason)
    };

    if x.len() != v.len() {
        return Err(invalid(format!(
            "sample points and values must have equal length: {} vs. {}",
            x.len(),
            v.len()
        )));
    }
    if x.is_empty() {
        return Err(invalid("sample points and values must not be empty".to_string()));
    }
    if x.iter().any(|xi| xi.is_nan()) {
        return Err(invalid("sample points must not contain NaN".to_string()));
    }

    let mut pairs: Vec<(T, T)> = x.iter().cloned().zip(v.iter().cloned()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    if let Some(dup) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
        let value = dup[0].0.to_f64().unwrap_or(f64::NAN);
        debug!("rejecting interpolation over duplicate sample {}", value);
        return Err(InterpError::DuplicateSample(value));
    }

    let (sorted_x, sorted_v): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

    queries
        .iter()
        .map(|q| {
            let (lower, weight) = locate(&sorted_x, *q)?;
            Ok(interpolate_at(&sorted_v, lower, weight))
        })
        .collect()
}

/// Finds the range of the ascending `sorted` axis that contains `query`.
///
/// Returns the index of the lower end of the range and the fractional
/// distance of `query` towards the upper end, so that
/// `sorted[i] + w * (sorted[i + 1] - sorted[i]) == query`.  A query that hits
/// the last sample is reported as the far end of the last range.  With a
/// single sample only that exact value can be located.
///
/// # Examples
///
/// ```
/// use dsp_rs::interpolate::interp1::locate;
///
/// assert_eq!(locate(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.5).unwrap(), (2, 0.5));
/// assert!(locate(&[1.0, 2.0, 3.0, 4.0, 5.0], 6.0).is_err());
/// ```
pub fn locate<T>(sorted: &[T], query: T) -> Result<(usize, T), InterpError>
where
    T: Float,
{
    let out_of_range = || {
        let value = query.to_f64().unwrap_or(f64::NAN);
        debug!("query {} lies outside of the sampled range", value);
        InterpError::OutOfRange(value)
    };

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(out_of_range()),
    };
    // Written so that a NaN query falls out here as well.
    if !(query >= first && query <= last) {
        return Err(out_of_range());
    }
    if sorted.len() == 1 {
        return Ok((0, T::zero()));
    }

    let mut lower = 0;
    let mut upper = sorted.len() - 1;
    while lower < upper {
        let mid = (lower + upper) / 2;
        let prev = sorted[mid];
        let next = sorted[mid + 1];
        if query < prev {
            upper = mid;
        } else if query > next {
            lower = mid + 1;
        } else {
            return Ok((mid, (query - prev) / (next - prev)));
        }
    }

    // Unreachable for a strictly ascending axis that brackets the query.
    Err(out_of_range())
}

/// Linearly interpolates between `values[lower]` and `values[lower + 1]`
/// with weight `weight` on the upper value.
///
/// A zero weight returns `values[lower]` as is, which also covers `lower`
/// being the last index.  Indices past the end of `values` give zero.
///
/// # Examples
///
/// ```
/// use dsp_rs::interpolate::interp1::interpolate_at;
///
/// assert_eq!(interpolate_at(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, 0.5), 4.5);
/// assert_eq!(interpolate_at(&[0.0, 10.0], 0, 0.25), 2.5);
/// ```
pub fn interpolate_at<T>(values: &[T], lower: usize, weight: T) -> T
where
    T: Float,
{
    let prev = match values.get(lower) {
        Some(prev) => *prev,
        None => return T::zero(),
    };
    if weight == T::zero() {
        return prev;
    }
    match values.get(lower + 1) {
        Some(next) => (T::one() - weight) * prev + weight * *next,
        None => prev,
    }
}
