//! Half-band spectrum view
//!
//! Non-redundant positive-frequency half of a real signal's spectrum,
//! paired with its frequency axis in Hz

use num_complex::Complex;
use serde::Serialize;

use super::fft::forward_transform;

/// Floor applied before converting magnitudes to dB
const MAGNITUDE_FLOOR: f64 = 1e-10;

/// Bins 0..=n/2 of a length-n spectrum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalfSpectrum {
    /// Bin frequencies in Hz: k * fs / n
    pub frequencies: Vec<f64>,

    /// Bin magnitudes |X[k]|
    pub magnitudes: Vec<f64>,
}

impl HalfSpectrum {
    /// Build the half-band view of a full spectrum
    ///
    /// # Arguments
    /// * `spectrum` - Full spectrum of length n
    /// * `sample_rate` - Sample rate of the originating signal in Hz
    pub fn from_spectrum(spectrum: &[Complex<f64>], sample_rate: f64) -> Self {
        let n = spectrum.len();
        if n == 0 {
            return Self {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
            };
        }

        let bins = n / 2 + 1;
        let frequencies = (0..bins)
            .map(|k| bin_to_hz(k, n, sample_rate))
            .collect();
        let magnitudes = spectrum[..bins].iter().map(|c| c.norm()).collect();

        Self {
            frequencies,
            magnitudes,
        }
    }

    /// Number of bins in the view
    pub fn num_bins(&self) -> usize {
        self.magnitudes.len()
    }

    /// Magnitudes in dB: 20*log10(|X[k]|/reference)
    pub fn magnitude_db(&self, reference: f64) -> Vec<f64> {
        to_db(&self.magnitudes, reference)
    }

    /// Strongest bin as `(frequency, magnitude)`, `None` when empty
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, &mag)| (self.frequencies[k], mag))
    }
}

/// Frequency in Hz of bin `k` in a length-`n` transform
pub fn bin_to_hz(bin: usize, n: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / n as f64
}

/// 20*log10(magnitude/reference), floored at 1e-10 to avoid log(0)
pub fn magnitude_to_db(magnitude: f64, reference: f64) -> f64 {
    20.0 * (magnitude.max(MAGNITUDE_FLOOR) / reference).log10()
}

/// Convert magnitudes to dB
pub fn to_db(magnitudes: &[f64], reference: f64) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&mag| magnitude_to_db(mag, reference))
        .collect()
}

/// Forward FFT of a real signal, reduced to its half-band view
///
/// # Arguments
/// * `samples` - Real samples (zero-padded internally to a power of two)
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Frequency axis and magnitudes, each of length n/2 + 1
pub fn forward_fft(samples: &[f64], sample_rate: f64) -> HalfSpectrum {
    let spectrum = forward_transform(samples);
    log::debug!(
        "forward FFT: {} samples -> {} point transform",
        samples.len(),
        spectrum.len()
    );
    HalfSpectrum::from_spectrum(&spectrum, sample_rate)
}
