use assert_approx_eq::assert_approx_eq;
use dsp_rs::prelude::*;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::f64::consts::PI;
use std::thread;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn noisy_sine(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let clean: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    let noisy = clean
        .iter()
        .map(|x| *x + rng.gen_range(-0.2_f64..0.2))
        .collect();
    (clean, noisy)
}

fn rms(a: &[f64], b: &[f64]) -> f64 {
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
    (sum / a.len() as f64).sqrt()
}

#[test]
fn smoothing_reduces_noise() {
    init_logging();
    let (clean, noisy) = noisy_sine(400, 0);

    let coeffs = butter_lowpass(0.02);
    let smoothed = filtfilt_zi(&coeffs, &noisy);
    assert_eq!(smoothed.len(), noisy.len());
    assert!(rms(&smoothed, &clean) < 0.5 * rms(&noisy, &clean));

    let averaged = ewma(&noisy, 0.8);
    assert!(rms(&averaged, &clean) < rms(&noisy, &clean));
}

#[test]
fn filter_then_resample_then_query() {
    init_logging();
    let (_, noisy) = noisy_sine(200, 1);

    let smoothed = Smoothing::Butterworth { cutoff: 0.05 }.apply(&noisy);
    let resampled = resample(&smoothed, 50);
    assert_eq!(resampled[0], smoothed[0]);
    assert_eq!(resampled[49], smoothed[199]);

    // Query the resampled signal on its own axis: every sample point comes
    // back, midpoints land between their neighbours.
    let axis = span(0.0, 1.0, resampled.len());
    let at_samples = interp1(&axis, &resampled, &axis).unwrap();
    for (y, r) in at_samples.iter().zip(resampled.iter()) {
        assert_approx_eq!(*y, *r, 1e-12);
    }

    let mid = (axis[10] + axis[11]) / 2.0;
    let value = interp1(&axis, &resampled, &[mid]).unwrap()[0];
    assert_approx_eq!(value, (resampled[10] + resampled[11]) / 2.0, 1e-12);

    assert_eq!(
        interp1(&axis, &resampled, &[1.5]),
        Err(InterpError::OutOfRange(1.5))
    );
}

#[test]
fn calls_are_independent_across_threads() {
    init_logging();
    let (_, noisy) = noisy_sine(256, 2);
    let coeffs = butter_lowpass(0.1);
    let expected = filtfilt(&coeffs, &noisy);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let signal = noisy.clone();
            thread::spawn(move || filtfilt(&coeffs, &signal))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
