use crate::regression::{Point, RegressionError};

/// Fits the line `y = slope * x + intercept` to `points` by the method of
/// least squares.
///
/// Returns `(slope, intercept)`.  Fails with `InvalidInput` for an empty
/// slice and with `RankDeficient` when the x values do not vary, which
/// includes the single point case.
///
/// # Arguments
///
/// * `points` - Samples to fit.
///
/// # Examples
///
/// ```
/// use dsp_rs::regression::linear::least_squares;
/// use dsp_rs::regression::Point;
/// use assert_approx_eq::assert_approx_eq;
///
/// let points = [
///     Point::new(1.0, 6.0),
///     Point::new(2.0, 5.0),
///     Point::new(3.0, 7.0),
///     Point::new(4.0, 10.0),
/// ];
/// let (slope, intercept) = least_squares(&points).unwrap();
/// assert_approx_eq!(slope, 1.4);
/// assert_approx_eq!(intercept, 3.5);
/// ```
pub fn least_squares(points: &[Point]) -> Result<(f64, f64), RegressionError> {
    if points.is_empty() {
        return Err(RegressionError::InvalidInput(
            "cannot fit a line to zero points".to_string(),
        ));
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), p| {
            (sx + p.x, sy + p.y, sxy + p.x * p.y, sxx + p.x * p.x)
        },
    );

    let base = n * sum_xx - sum_x * sum_x;
    if base == 0.0 {
        return Err(RegressionError::RankDeficient);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / base;
    let intercept = (sum_xx * sum_y - sum_xy * sum_x) / base;
    Ok((slope, intercept))
}
