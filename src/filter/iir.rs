//! Implementation of a second order infinite impulse response (IIR) filter.
//!
//! The filter is realized in transposed direct form II, which needs only two
//! delay elements.  The delay line lives in a `BiquadState` that is created
//! for a single pass over a signal and handed around explicitly; nothing is
//! kept between calls.

use crate::filter::design::Coefficients;
use num_traits::Float;

/// The two delay elements of a transposed direct form II section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiquadState<T> {
    pub s1: T,
    pub s2: T,
}

impl<T> Default for BiquadState<T>
where
    T: Float,
{
    fn default() -> Self {
        BiquadState {
            s1: T::zero(),
            s2: T::zero(),
        }
    }
}

impl<T> BiquadState<T>
where
    T: Float,
{
    /// Creates a new `BiquadState` with both delay elements set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state the filter settles into after an infinitely long run of the
    /// constant input `x0`.
    ///
    /// Starting a pass from this state instead of from zero removes the start
    /// up transient when the signal begins near `x0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsp_rs::filter::design::butter_lowpass;
    /// use dsp_rs::filter::iir::*;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let coeffs = butter_lowpass(0.1);
    /// let state = BiquadState::steady_state(&coeffs, 2.0f64);
    /// let output = lfilter_with_state(&coeffs, &[2.0; 8], state);
    /// for y in output {
    ///     assert_approx_eq!(y, 2.0);
    /// }
    /// ```
    pub fn steady_state(coeffs: &Coefficients<T>, x0: T) -> Self {
        let Coefficients { b, a } = coeffs;
        let y0 = coeffs.dc_gain() * x0;
        let s2 = b[2] * x0 - a[2] * y0;
        let s1 = s2 + b[1] * x0 - a[1] * y0;
        BiquadState { s1, s2 }
    }
}

/// Runs a single sample through a second order IIR section.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `coeffs` - Filter transfer function coefficients.
/// * `state` - Delay line, updated in place.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::design::Coefficients;
/// use dsp_rs::filter::iir::*;
///
/// let coeffs = Coefficients::new([0.5, 0.25, 0.0], [1.0, 0.0, 0.0]);
/// let mut state = BiquadState::new();
///
/// assert_eq!(biquad(1.0, &coeffs, &mut state), 0.5);
/// assert_eq!(biquad(0.0, &coeffs, &mut state), 0.25);
/// ```
pub fn biquad<T>(input: T, coeffs: &Coefficients<T>, state: &mut BiquadState<T>) -> T
where
    T: Float,
{
    let Coefficients { b, a } = coeffs;
    let output = b[0] * input + state.s1;
    state.s1 = state.s2 + b[1] * input - a[1] * output;
    state.s2 = b[2] * input - a[2] * output;
    output
}

/// Filters a whole signal with a causal second order IIR section, starting
/// from a zeroed delay line.
///
/// The output lags the input; see `filtfilt` for a zero phase alternative.
///
/// # Arguments
///
/// * `coeffs` - Filter transfer function coefficients.
/// * `signal` - Input samples to be filtered.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::design::butter_lowpass;
/// use dsp_rs::filter::iir::lfilter;
///
/// let signal: Vec<f64> = (0..100).map(|x| (x as f64 / 4.0).sin()).collect();
/// let output = lfilter(&butter_lowpass(0.05), &signal);
/// assert_eq!(output.len(), signal.len());
/// ```
pub fn lfilter<T>(coeffs: &Coefficients<T>, signal: &[T]) -> Vec<T>
where
    T: Float,
{
    lfilter_with_state(coeffs, signal, BiquadState::new())
}

/// Filters a whole signal with a causal second order IIR section, starting
/// from the given delay line.
///
/// The state is consumed; the final state of the pass is discarded.
///
/// # Arguments
///
/// * `coeffs` - Filter transfer function coefficients.
/// * `signal` - Input samples to be filtered.
/// * `state` - Initial contents of the delay line.
pub fn lfilter_with_state<T>(
    coeffs: &Coefficients<T>,
    signal: &[T],
    mut state: BiquadState<T>,
) -> Vec<T>
where
    T: Float,
{
    signal
        .iter()
        .map(|x| biquad(*x, coeffs, &mut state))
        .collect()
}
