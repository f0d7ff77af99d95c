//! Python bindings for the FFT core and spectrogram

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::error::{validate_sample_rate, validate_samples};
use crate::spectrogram::{SpectrogramConfig, Stft};
use crate::spectrum::{self, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Smallest power of two >= n
///
/// Raises:
///     ValueError: if the result does not fit in a machine word
#[pyfunction]
pub fn next_power_of_two(n: usize) -> PyResult<usize> {
    Ok(spectrum::next_power_of_two(n)?)
}

/// Half-band magnitude spectrum
///
/// Args:
///     samples: Input signal as numpy array
///     sample_rate: Sample rate in Hz
///
/// Returns:
///     (frequencies, magnitudes) as numpy arrays of length n/2 + 1
#[pyfunction]
pub fn forward_fft<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    sample_rate: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = samples.as_slice()?;
    validate_sample_rate(sample_rate)?;
    validate_samples(signal)?;

    let half = spectrum::forward_fft(signal, sample_rate);
    Ok((
        half.frequencies.into_pyarray(py),
        half.magnitudes.into_pyarray(py),
    ))
}

/// Spectrogram of a signal
///
/// Args:
///     samples: Input signal as numpy array
///     sample_rate: Sample rate in Hz
///     window_size: Window length in samples (default: 2048)
///     hop_size: Hop in samples (default: window_size / 4)
///     window_type: Window applied to each frame (default: Hann)
///
/// Returns:
///     (z, x, y): magnitudes [bin][frame], frame times, bin frequencies
#[pyfunction]
#[pyo3(signature = (samples, sample_rate, window_size=2048, hop_size=None, window_type=PyWindowType::Hann))]
pub fn compute_spectrogram<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    sample_rate: f64,
    window_size: usize,
    hop_size: Option<usize>,
    window_type: PyWindowType,
) -> PyResult<(&'py PyArray2<f64>, &'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let signal = samples.as_slice()?;
    validate_sample_rate(sample_rate)?;
    validate_samples(signal)?;

    let mut config = SpectrogramConfig::with_window_size(window_size);
    if let Some(hop) = hop_size {
        config.hop_size = hop;
    }
    config.window_type = window_type.into();

    let stft = Stft::new(config)?;
    let (z, x, y) = stft.compute(signal, sample_rate).into_parts();

    Ok((z.into_pyarray(py), x.into_pyarray(py), y.into_pyarray(py)))
}
