//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SpectralError;

mod equalizer_bindings;
mod spectrum_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectral_eq(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PyWindowType>()?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::next_power_of_two, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::forward_fft, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_spectrogram, m)?)?;

    m.add_function(wrap_pyfunction!(equalizer_bindings::apply_equalizer, m)?)?;
    m.add_class::<equalizer_bindings::PyPresetBook>()?;

    Ok(())
}
