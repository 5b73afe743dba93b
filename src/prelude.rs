//! This module provides an easy single import for those using this crate.

pub use crate::filter::design::{butter_lowpass, Coefficients};
pub use crate::filter::ewma::ewma;
pub use crate::filter::filtfilt::{filtfilt, filtfilt_zi};
pub use crate::filter::iir::{lfilter, BiquadState};
pub use crate::filter::smoothing::{lowpass, Smoothing};
pub use crate::interpolate::interp1::interp1;
pub use crate::interpolate::resample::resample;
pub use crate::interpolate::InterpError;
pub use crate::regression::RegressionError;
pub use crate::util::math::span;
