//! One stop smoothing of a signal by either of the low pass filters.
//!
//! `Smoothing` can be deserialized, so an application can keep the choice of
//! filter and its parameter in its own configuration:
//!
//! ```
//! use dsp_rs::filter::smoothing::Smoothing;
//!
//! let config: Smoothing<f64> =
//!     serde_json::from_str(r#"{ "kind": "butterworth", "cutoff": 0.05 }"#).unwrap();
//! assert_eq!(config, Smoothing::Butterworth { cutoff: 0.05 });
//! ```

use crate::filter::design::butter_lowpass;
use crate::filter::ewma::ewma;
use crate::filter::filtfilt::filtfilt;
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};

/// Choice of low pass filter together with its single parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Smoothing<T> {
    /// Exponentially weighted moving average, see `ewma`.
    Ewma { alpha: T },
    /// Zero phase second order Butterworth low pass, see `lowpass`.
    Butterworth { cutoff: T },
}

impl<T> Smoothing<T>
where
    T: Float + FloatConst,
{
    /// Smooths `signal` with the configured filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsp_rs::filter::smoothing::Smoothing;
    ///
    /// let smoothing = Smoothing::Ewma { alpha: 0.5 };
    /// assert_eq!(smoothing.apply(&[0.0, 1.0, 1.0]), vec![0.0, 0.5, 0.75]);
    /// ```
    pub fn apply(&self, signal: &[T]) -> Vec<T> {
        match *self {
            Smoothing::Ewma { alpha } => ewma(signal, alpha),
            Smoothing::Butterworth { cutoff } => lowpass(signal, cutoff),
        }
    }
}

/// Smooths `signal` with a zero phase second order Butterworth low pass.
///
/// This designs the filter for `cutoff` (normalized to the sampling rate, see
/// `butter_lowpass`) and runs it through `filtfilt`.
///
/// # Arguments
///
/// * `signal` - Input samples to be smoothed.
/// * `cutoff` - Normalized cutoff frequency in `(0, 0.5)`.
///
/// # Examples
///
/// ```
/// use dsp_rs::filter::smoothing::lowpass;
///
/// let signal: Vec<f64> = (0..64).map(|x| (x % 2) as f64).collect();
/// let smoothed = lowpass(&signal, 0.05);
/// assert!(smoothed[32] > 0.4 && smoothed[32] < 0.6);
/// ```
pub fn lowpass<T>(signal: &[T], cutoff: T) -> Vec<T>
where
    T: Float + FloatConst,
{
    filtfilt(&butter_lowpass(cutoff), signal)
}
