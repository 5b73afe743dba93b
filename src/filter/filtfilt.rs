//! Zero phase filtering by running an IIR section forwards and backwards.
//!
//! The signal is first extended with a time reversed copy of itself.  That
//! mirror keeps the backward pass from starting cold on the last sample and
//! smears the edge transient away from the data that is returned.  The
//! extended signal is filtered, reversed, filtered again and reversed back;
//! the lag of the second pass undoes the lag of the first.  Only the first
//! half of the result, which lines up with the original samples, is kept.

use crate::filter::design::Coefficients;
use crate::filter::iir::{lfilter, lfilter_with_state, BiquadState};
use num_traits::Float;

/// Filters `signal` forwards and backwards so the output has no phase lag.
///
/// Both passes start from a zeroed delay line.  Signals of zero or one
/// samples are returned unchanged.
///
/// # Arguments
///
/// * `coeffs` - Filter transfer function coefficients.
/// * `signal` - Input samples to be filtered.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::design::Coefficients;
/// use dsp_rs::filter::filtfilt::filtfilt;
/// use assert_approx_eq::assert_approx_eq;
///
/// let coeffs = Coefficients::new(
///     [0.00554, 0.01109, 0.00554],
///     [1.0, -1.77863, 0.80080],
/// );
/// let signal: [f64; 12] = [1.0, 2.0, 3.0, 7.0, 4.0, 3.0, 2.0, 1.0, 9.0, 3.0, 2.0, 1.0];
///
/// let output = filtfilt(&coeffs, &signal);
/// assert_approx_eq!(output[0], 1.7564, 1e-4);
/// assert_approx_eq!(output[1], 1.9060, 1e-4);
/// assert_approx_eq!(output[2], 2.0412, 1e-4);
/// ```
pub fn filtfilt<T>(coeffs: &Coefficients<T>, signal: &[T]) -> Vec<T>
where
    T: Float,
{
    zero_phase(signal, |samples| lfilter(coeffs, samples))
}

/// Same as `filtfilt`, but each pass starts from the steady state of its first
/// sample instead of from zero.
///
/// This removes the start up transient of the forward pass, so a constant
/// signal comes back unchanged (for a filter with unity DC gain).
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
/// use dsp_rs::filter::filtfilt::filtfilt_zi;
/// use assert_approx_eq::assert_approx_eq;
///
/// let output = filtfilt_zi(&butter_lowpass(0.05), &[3.0f64; 50]);
/// for y in output {
///     assert_approx_eq!(y, 3.0);
/// }
/// ```
pub fn filtfilt_zi<T>(coeffs: &Coefficients<T>, signal: &[T]) -> Vec<T>
where
    T: Float,
{
    zero_phase(signal, |samples| {
        let state = match samples.first() {
            Some(x0) => BiquadState::steady_state(coeffs, *x0),
            None => BiquadState::new(),
        };
        lfilter_with_state(coeffs, samples, state)
    })
}

/// Mirror pads `signal`, applies `pass` forwards and backwards and trims the
/// result back to the original length.
fn zero_phase<T, F>(signal: &[T], pass: F) -> Vec<T>
where
    T: Float,
    F: Fn(&[T]) -> Vec<T>,
{
    if signal.len() <= 1 {
        return signal.to_vec();
    }

    let mut extended = Vec::with_capacity(2 * signal.len());
    extended.extend_from_slice(signal);
    extended.extend(signal.iter().rev());

    let mut forward = pass(&extended);
    forward.reverse();
    let mut backward = pass(&forward);
    backward.reverse();
    backward.truncate(signal.len());

    debug!(
        "zero phase filtered {} samples over a {} sample extension",
        signal.len(),
        extended.len()
    );
    backward
}

#[cfg(test)]
mod test {
    use crate::filter::design::*;
    use crate::filter::filtfilt::*;
    use assert_approx_eq::assert_approx_eq;

    const SIGNAL: [f64; 12] = [1.0, 2.0, 3.0, 7.0, 4.0, 3.0, 2.0, 1.0, 9.0, 3.0, 2.0, 1.0];

    #[test]
    fn test_filtfilt_reference() {
        let coeffs = Coefficients::new([0.00554, 0.01109, 0.00554], [1.0, -1.77863, 0.80080]);
        let output = filtfilt(&coeffs, &SIGNAL);
        let truth = [
            1.7563679394083114,
            1.9059426686383198,
            2.0411105353244365,
            2.15654630042724,
            2.247941257750679,
            2.312547740090068,
            2.3488934851311476,
            2.35601340110944,
            2.3330820626304067,
            2.279985175524023,
            2.198024803544831,
            2.089567608214709,
        ];
        assert_eq!(output.len(), truth.len());
        for (y, t) in output.iter().zip(truth.iter()) {
            assert_approx_eq!(*y, *t, 1e-9);
        }
    }

    #[test]
    fn test_filtfilt_symmetric_pulse() {
        let n = 201;
        let pulse: Vec<f64> = (0..n)
            .map(|i| (-((i as f64 - 100.0) / 10.0).powi(2)).exp())
            .collect();
        let output = filtfilt(&butter_lowpass(0.05), &pulse);

        for i in 0..n {
            assert_approx_eq!(output[i], output[n - 1 - i], 1e-6);
        }

        // No phase lag: the peak stays where it was.
        let peak = output
            .iter()
            .enumerate()
            .fold(0, |best, (i, y)| if *y > output[best] { i } else { best });
        assert_eq!(peak, 100);
    }

    #[test]
    fn test_filtfilt_degenerate_lengths() {
        let coeffs = butter_lowpass(0.1);
        let empty: Vec<f64> = filtfilt(&coeffs, &[]);
        assert!(empty.is_empty());
        assert_eq!(filtfilt(&coeffs, &[4.5]), vec![4.5]);
        assert_eq!(filtfilt_zi(&coeffs, &[4.5]), vec![4.5]);
    }

    #[test]
    fn test_filtfilt_does_not_touch_input() {
        let signal = SIGNAL.to_vec();
        let _ = filtfilt(&butter_lowpass(0.05), &signal);
        assert_eq!(signal, SIGNAL.to_vec());
    }

    #[test]
    fn test_filtfilt_zi_dc_gain() {
        let coeffs = butter_lowpass(0.05);
        for level in &[-2.0, 0.0, 3.0, 1e3] {
            let output = filtfilt_zi(&coeffs, &vec![*level; 50]);
            assert_eq!(output.len(), 50);
            for y in output {
                assert_approx_eq!(y, *level, 1e-6 * level.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_filtfilt_zi_reference() {
        let output = filtfilt_zi(&butter_lowpass(0.05), &SIGNAL);
        assert_approx_eq!(output[0], 2.164417201786984, 1e-9);
        assert_approx_eq!(output[11], 3.1007613478301637, 1e-9);
    }

    #[test]
    fn test_filtfilt_zero_state_transient() {
        // The zero state passes ramp up from nothing, so a constant signal
        // sags at the start and settles towards the end.
        let output = filtfilt(&butter_lowpass(0.05), &[3.0; 50]);
        assert!(output[0] < 2.0);
        assert_approx_eq!(output[49], 3.0, 1e-4);
    }
}
