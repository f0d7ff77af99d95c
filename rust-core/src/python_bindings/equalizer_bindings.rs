//! Python bindings for the equalizer

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::equalizer::{self, validate_bands, EqualizerBand, EqualizerOutput, PresetBook};
use crate::error::{validate_sample_rate, validate_samples};

type PyEqualizerOutput<'py> = (&'py PyArray1<f64>, &'py PyArray1<f64>, &'py PyArray1<f64>);

fn into_py_output(py: Python<'_>, output: EqualizerOutput) -> PyEqualizerOutput<'_> {
    (
        output.samples.into_pyarray(py),
        output.frequencies.into_pyarray(py),
        output.magnitudes.into_pyarray(py),
    )
}

/// Apply equalizer bands to a signal
///
/// Args:
///     samples: Input signal as numpy array
///     sample_rate: Sample rate in Hz
///     bands: List of (low_hz, high_hz, gain) tuples
///
/// Returns:
///     (samples, frequencies, magnitudes) as numpy arrays
#[pyfunction]
pub fn apply_equalizer<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    sample_rate: f64,
    bands: Vec<(f64, f64, f64)>,
) -> PyResult<PyEqualizerOutput<'py>> {
    let signal = samples.as_slice()?;
    let bands: Vec<EqualizerBand> = bands
        .into_iter()
        .map(|(low, high, gain)| EqualizerBand::new(low, high, gain))
        .collect();

    validate_sample_rate(sample_rate)?;
    validate_samples(signal)?;
    validate_bands(&bands)?;

    let output = equalizer::apply_equalizer(signal, sample_rate, &bands);
    Ok(into_py_output(py, output))
}

/// Named equalizer presets exposed to Python
#[pyclass(name = "PresetBook")]
pub struct PyPresetBook {
    book: PresetBook,
}

#[pymethods]
impl PyPresetBook {
    /// Parse a preset document
    ///
    /// Args:
    ///     json: JSON object mapping mode names to {"sliders": [...]}
    #[new]
    fn new(json: &str) -> PyResult<Self> {
        Ok(Self {
            book: PresetBook::from_json_str(json)?,
        })
    }

    /// Load a preset document from disk
    #[staticmethod]
    fn from_path(path: &str) -> PyResult<Self> {
        Ok(Self {
            book: PresetBook::from_path(path)?,
        })
    }

    /// Mode names in sorted order
    fn names(&self) -> Vec<String> {
        self.book.names().map(str::to_string).collect()
    }

    /// Update one slider's gain
    fn set_gain(&mut self, name: &str, index: usize, gain: f64) -> PyResult<()> {
        let preset = self
            .book
            .get_mut(name)
            .ok_or_else(|| crate::error::SpectralError::UnknownPreset(name.to_string()))?;
        preset.set_gain(index, gain)?;
        Ok(())
    }

    /// Run the equalizer with a mode's bands
    ///
    /// Returns:
    ///     (samples, frequencies, magnitudes) as numpy arrays
    fn apply<'py>(
        &self,
        py: Python<'py>,
        name: &str,
        samples: PyReadonlyArray1<f64>,
        sample_rate: f64,
    ) -> PyResult<PyEqualizerOutput<'py>> {
        let signal = samples.as_slice()?;
        validate_sample_rate(sample_rate)?;
        validate_samples(signal)?;

        let output = self.book.apply(name, signal, sample_rate)?;
        Ok(into_py_output(py, output))
    }
}
