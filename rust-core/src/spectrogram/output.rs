//! Time-frequency magnitude matrix

use ndarray::{Array2, ArrayView1};

use crate::spectrum::analysis::magnitude_to_db;

/// STFT result
///
/// `magnitudes[[k, t]]` is the magnitude of frequency bin `k` in frame `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    magnitudes: Array2<f64>,
    times: Vec<f64>,
    frequencies: Vec<f64>,
}

impl Spectrogram {
    /// Transpose frame-major magnitude rows into a bins x frames matrix
    pub(crate) fn from_frames(
        frames: &[Vec<f64>],
        num_bins: usize,
        times: Vec<f64>,
        frequencies: Vec<f64>,
    ) -> Self {
        let mut magnitudes = Array2::zeros((num_bins, frames.len()));
        for (t, frame) in frames.iter().enumerate() {
            for (k, &mag) in frame.iter().enumerate().take(num_bins) {
                magnitudes[[k, t]] = mag;
            }
        }

        Self {
            magnitudes,
            times,
            frequencies,
        }
    }

    /// Magnitude matrix, bins x frames
    pub fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }

    /// Frame start times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Bin frequencies in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn num_frames(&self) -> usize {
        self.magnitudes.ncols()
    }

    pub fn num_bins(&self) -> usize {
        self.magnitudes.nrows()
    }

    /// Magnitude spectrum of one frame
    pub fn frame(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.num_frames()).then(|| self.magnitudes.column(index))
    }

    /// Nested rows `z[bin][frame]`
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.magnitudes.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Magnitudes in dB, same layout
    pub fn to_db(&self, reference: f64) -> Array2<f64> {
        self.magnitudes.mapv(|mag| magnitude_to_db(mag, reference))
    }

    /// Split into (magnitudes, times, frequencies)
    pub fn into_parts(self) -> (Array2<f64>, Vec<f64>, Vec<f64>) {
        (self.magnitudes, self.times, self.frequencies)
    }
}
