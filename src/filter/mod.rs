//! Low pass filters for smoothing sampled signals.
//!
//! Two families of smoothing filters are provided:
//!
//! * An exponentially weighted moving average (EWMA)
//! * A second order Butterworth style Infinite Impulse Response (IIR) filter
//!
//! The EWMA is the simplest recursive smoother there is: a single pole whose
//! position is set directly by the `alpha` parameter.  It is cheap and
//! predictable but rolls off slowly and delays the signal.
//!
//! IIR filters are feedback based systems, and have all the caveats associated
//! with any feedback system.  If poorly designed they can be unstable and
//! unpredictable, and the phase response is non-linear.  The second order
//! low pass designed in `design` is maximally flat and stable for any cutoff
//! strictly inside `(0, 0.5)`.
//!
//! The non-linear phase is dealt with in `filtfilt`, which runs the causal
//! filter forwards and then backwards over the whole signal so the phase lag
//! of the two passes cancels.  The price is that the whole signal must be in
//! memory; nothing in this module operates on a stream.
pub mod design;
pub mod ewma;
pub mod filtfilt;
pub mod iir;
pub mod smoothing;
