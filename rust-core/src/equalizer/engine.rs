//! Frequency-domain equalizer
//!
//! Forward FFT, per-band gains applied to each positive bin and its mirror,
//! inverse FFT back to a real signal of the original length.

use num_complex::Complex;
use serde::Serialize;

use super::band::EqualizerBand;
use crate::spectrum::analysis::{bin_to_hz, HalfSpectrum};
use crate::spectrum::fft::{forward_transform, transform_in_place, Direction};

/// Result of one equalizer pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqualizerOutput {
    /// Equalized time-domain samples, same length as the input
    pub samples: Vec<f64>,

    /// Frequency axis of the half-band spectrum in Hz
    pub frequencies: Vec<f64>,

    /// Magnitudes after gain, before the inverse transform
    pub magnitudes: Vec<f64>,
}

/// Apply equalizer bands to a real signal
///
/// # Arguments
/// * `signal` - Real samples
/// * `sample_rate` - Sample rate in Hz
/// * `bands` - Bands applied in order; overlapping gains multiply
///
/// # Returns
/// Equalized samples plus the spectrum the caller inspects
pub fn apply_equalizer(
    signal: &[f64],
    sample_rate: f64,
    bands: &[EqualizerBand],
) -> EqualizerOutput {
    let original_len = signal.len();
    let mut spectrum = forward_transform(signal);

    for band in bands {
        apply_band_gain(&mut spectrum, sample_rate, band);
    }

    let HalfSpectrum {
        frequencies,
        magnitudes,
    } = HalfSpectrum::from_spectrum(&spectrum, sample_rate);

    // Imaginary remainder is dropped without inspection
    transform_in_place(&mut spectrum, Direction::Inverse);
    let samples = spectrum.iter().take(original_len).map(|c| c.re).collect();

    log::debug!(
        "equalizer: {} samples, {} point transform, {} bands",
        original_len,
        spectrum.len(),
        bands.len()
    );

    EqualizerOutput {
        samples,
        frequencies,
        magnitudes,
    }
}

/// Scale the bins a band covers, keeping conjugate symmetry
///
/// DC and Nyquist have no mirror and are scaled once.
///
/// # Returns
/// Number of positive-frequency bins scaled
fn apply_band_gain(spectrum: &mut [Complex<f64>], sample_rate: f64, band: &EqualizerBand) -> usize {
    let n = spectrum.len();
    if n == 0 {
        return 0;
    }
    if !band.overlaps(sample_rate / 2.0) {
        log::debug!(
            "band [{}, {}] Hz lies outside [0, {}] Hz, skipped",
            band.low,
            band.high,
            sample_rate / 2.0
        );
        return 0;
    }

    let half = n / 2;
    let mut touched = 0;
    for i in 0..=half {
        if !band.contains(bin_to_hz(i, n, sample_rate)) {
            continue;
        }

        spectrum[i] *= band.gain;
        if i > 0 && i < half {
            spectrum[n - i] *= band.gain;
        }
        touched += 1;
    }

    if touched == 0 {
        log::trace!("band [{}, {}] Hz falls between bins", band.low, band.high);
    }

    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn tone(freqs: &[f64], fs: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|n| {
                freqs
                    .iter()
                    .map(|f| (2.0 * PI * f * n as f64 / fs).sin())
                    .sum::<f64>()
            })
            .collect()
    }

    #[test]
    fn test_impulse_doubling() {
        let mut impulse = vec![0.0; 8];
        impulse[0] = 1.0;

        let output = apply_equalizer(&impulse, 8.0, &[EqualizerBand::new(0.0, 4.0, 2.0)]);

        assert_eq!(output.frequencies, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        for &mag in &output.magnitudes {
            assert_abs_diff_eq!(mag, 2.0, epsilon = 1e-12);
        }

        assert_eq!(output.samples.len(), 8);
        assert_abs_diff_eq!(output.samples[0], 2.0, epsilon = 1e-12);
        for &s in &output.samples[1..] {
            assert_abs_diff_eq!(s, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_band() {
        let fs = 1000.0;
        let signal = tone(&[37.0, 210.0], fs, 1000);
        let before = crate::spectrum::forward_fft(&signal, fs);

        let output = apply_equalizer(&signal, fs, &[EqualizerBand::new(0.0, fs / 2.0, 1.0)]);

        assert_eq!(output.samples.len(), signal.len());
        for (a, b) in output.samples.iter().zip(&signal) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
        for (a, b) in output.magnitudes.iter().zip(&before.magnitudes) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_gain_silences() {
        let fs = 44100.0;
        let signal = tone(&[440.0, 3000.0], fs, 777);

        let output = apply_equalizer(&signal, fs, &[EqualizerBand::new(0.0, fs / 2.0, 0.0)]);

        assert_eq!(output.samples.len(), 777);
        assert!(output.samples.iter().all(|s| s.abs() < 1e-12));
        assert!(output.magnitudes.iter().all(|m| m.abs() < 1e-12));
    }

    #[test]
    fn test_band_removes_one_tone() {
        // Both tones sit exactly on bins: fs = n = 1024
        let fs = 1024.0;
        let signal = tone(&[50.0, 200.0], fs, 1024);
        let expected = tone(&[50.0], fs, 1024);

        let output = apply_equalizer(&signal, fs, &[EqualizerBand::new(150.0, 250.0, 0.0)]);

        for (a, b) in output.samples.iter().zip(&expected) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(output.magnitudes[200], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(output.magnitudes[50], 512.0, epsilon = 1e-6);
    }

    #[test]
    fn test_overlapping_bands_multiply() {
        let mut impulse = vec![0.0; 16];
        impulse[0] = 1.0;
        let bands = [
            EqualizerBand::new(0.0, 5.0, 2.0),
            EqualizerBand::new(4.0, 8.0, 3.0),
        ];

        let output = apply_equalizer(&impulse, 16.0, &bands);

        assert_abs_diff_eq!(output.magnitudes[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output.magnitudes[4], 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output.magnitudes[5], 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output.magnitudes[6], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output.magnitudes[8], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_band_outside_spectrum_is_noop() {
        let fs = 100.0;
        let signal = tone(&[7.0], fs, 64);

        let output = apply_equalizer(&signal, fs, &[EqualizerBand::new(60.0, 90.0, 0.0)]);

        for (a, b) in output.samples.iter().zip(&signal) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gain_keeps_output_real() {
        let fs = 8000.0;
        let signal = tone(&[300.0, 1250.0, 2900.0], fs, 512);
        let mut spectrum = forward_transform(&signal);

        apply_band_gain(&mut spectrum, fs, &EqualizerBand::new(1000.0, 3000.0, 4.0));
        transform_in_place(&mut spectrum, Direction::Inverse);

        assert!(spectrum.iter().all(|c| c.im.abs() < 1e-9));
    }

    #[test]
    fn test_dc_and_nyquist_scaled_once() {
        let mut spectrum = vec![Complex::new(1.0, 0.0); 8];

        let touched = apply_band_gain(&mut spectrum, 8.0, &EqualizerBand::new(0.0, 4.0, 3.0));

        assert_eq!(touched, 5);
        assert!(spectrum.iter().all(|c| (c.re - 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_empty_and_single_sample() {
        let band = EqualizerBand::new(0.0, 100.0, 0.5);

        let empty = apply_equalizer(&[], 200.0, &[band]);
        assert!(empty.samples.is_empty());
        assert!(empty.frequencies.is_empty());
        assert!(empty.magnitudes.is_empty());

        let single = apply_equalizer(&[4.0], 200.0, &[band]);
        assert_eq!(single.frequencies, vec![0.0]);
        assert_abs_diff_eq!(single.magnitudes[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(single.samples[0], 2.0, epsilon = 1e-12);
    }
}
