//! Coefficient design for the second order IIR low pass filter.
//!
//! The analog prototype is a two pole Butterworth section (quality factor
//! `sqrt(2)`, i.e. maximally flat) mapped to discrete time with the bilinear
//! transform.  Frequencies are normalized to the sampling rate, so the usable
//! cutoff range is the open interval `(0, 0.5)`.

use num_traits::{Float, FloatConst};

/// Transfer function coefficients of a second order IIR section.
///
/// `b` holds the feedforward (numerator) taps and `a` the feedback
/// (denominator) taps.  `a[0]` is assumed to be one; it is stored for
/// completeness but never read by the filters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients<T> {
    pub b: [T; 3],
    pub a: [T; 3],
}

impl<T> Coefficients<T>
where
    T: Float,
{
    /// Creates a new set of `Coefficients` from raw numerator and denominator
    /// taps.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsp_rs::filter::design::Coefficients;
    ///
    /// let coeffs = Coefficients::new(
    ///     [0.00554, 0.01109, 0.00554],
    ///     [1.0, -1.77863, 0.80080],
    /// );
    /// ```
    pub fn new(b: [T; 3], a: [T; 3]) -> Coefficients<T> {
        Coefficients { b, a }
    }

    /// Gain of the filter at zero frequency, `sum(b) / sum(a)`.
    pub fn dc_gain(&self) -> T {
        let num = self.b[0] + self.b[1] + self.b[2];
        let den = T::one() + self.a[1] + self.a[2];
        num / den
    }
}

/// Designs a second order Butterworth low pass filter.
///
/// `cutoff` is the -3 dB frequency as a fraction of the sampling rate and
/// should lie strictly inside `(0, 0.5)`.  The design goes through
/// `1 / tan(pi * cutoff)`, which blows up as `cutoff` approaches 0 (the taps
/// collapse to zero and the feedback taps become NaN) and degenerates as it
/// approaches 0.5.  Cutoffs outside the interval are still computed, but the
/// result is not a low pass filter.
///
/// # Arguments
///
/// * `cutoff` - Normalized cutoff frequency.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::design::butter_lowpass;
/// use assert_approx_eq::assert_approx_eq;
///
/// let coeffs = butter_lowpass(0.05_f64);
/// assert_approx_eq!(coeffs.b[0], 0.0200834, 1e-6);
/// assert_approx_eq!(coeffs.dc_gain(), 1.0);
/// ```
pub fn butter_lowpass<T>(cutoff: T) -> Coefficients<T>
where
    T: Float + FloatConst,
{
    let two = T::one() + T::one();
    if !(cutoff > T::zero() && cutoff < two.recip()) {
        warn!(
            "IIR cutoff {} lies outside (0, 0.5); coefficients are degenerate",
            cutoff.to_f64().unwrap_or(f64::NAN)
        );
    }

    let q = T::SQRT_2();
    let ita = T::one() / (T::PI() * cutoff).tan();
    let ita_sq = ita * ita;

    let b0 = T::one() / (T::one() + q * ita + ita_sq);
    let b1 = two * b0;
    let b2 = b0;
    let a1 = -two * (ita_sq - T::one()) * b0;
    let a2 = (T::one() - q * ita + ita_sq) * b0;

    Coefficients::new([b0, b1, b2], [T::one(), a1, a2])
}
