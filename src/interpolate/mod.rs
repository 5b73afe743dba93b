//! Linear interpolation of sampled signals.
//!
//! * `resample` stretches or squeezes an evenly sampled signal to a new
//!   number of samples.
//! * `interp1` evaluates a function known only at arbitrary (x, v) sample
//!   pairs at a list of query points.  Queries outside the sampled domain are
//!   an error; there is no extrapolation.

pub mod interp1;
pub mod resample;

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum InterpError {
    #[error("Invalid interpolation input: {0}")]
    InvalidInput(String),

    #[error("Two sample points have equal value {0}")]
    DuplicateSample(f64),

    #[error("Query value {0} lies outside of the sampled range, extrapolation is not supported")]
    OutOfRange(f64),
}
