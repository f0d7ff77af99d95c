//! Request and response payloads for the transport layer
//!
//! The engines assume valid input. A host decodes one of these requests,
//! calls `execute()` (validation, then the engine) and encodes the response;
//! a validation error should be reported to the client as a bad request.

use serde::{Deserialize, Serialize};

use crate::equalizer::{apply_equalizer, validate_bands, EqualizerBand, EqualizerOutput};
use crate::error::{validate_sample_rate, validate_samples, SpectralResult};
use crate::spectrogram::{compute_spectrogram, Spectrogram};
use crate::spectrum::{forward_fft, HalfSpectrum};

/// Body of a forward FFT request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FftRequest {
    pub samples: Vec<f64>,
    pub fs: f64,
}

/// Half-band spectrum of the request signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FftResponse {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl FftRequest {
    pub fn validate(&self) -> SpectralResult<()> {
        validate_sample_rate(self.fs)?;
        validate_samples(&self.samples)
    }

    pub fn execute(&self) -> SpectralResult<FftResponse> {
        self.validate()?;
        Ok(forward_fft(&self.samples, self.fs).into())
    }
}

impl From<HalfSpectrum> for FftResponse {
    fn from(spectrum: HalfSpectrum) -> Self {
        Self {
            frequencies: spectrum.frequencies,
            magnitudes: spectrum.magnitudes,
        }
    }
}

/// Body of an equalizer request; each slider is `{low, high, value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqRequest {
    pub samples: Vec<f64>,
    pub fs: f64,
    #[serde(default)]
    pub sliders: Vec<EqualizerBand>,
}

/// Equalized signal plus the post-gain spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqResponse {
    pub samples: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl EqRequest {
    pub fn validate(&self) -> SpectralResult<()> {
        validate_sample_rate(self.fs)?;
        validate_samples(&self.samples)?;
        validate_bands(&self.sliders)
    }

    pub fn execute(&self) -> SpectralResult<EqResponse> {
        self.validate()?;
        Ok(apply_equalizer(&self.samples, self.fs, &self.sliders).into())
    }
}

impl From<EqualizerOutput> for EqResponse {
    fn from(output: EqualizerOutput) -> Self {
        Self {
            samples: output.samples,
            frequencies: output.frequencies,
            magnitudes: output.magnitudes,
        }
    }
}

/// Body of a spectrogram request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramRequest {
    pub samples: Vec<f64>,
    pub fs: f64,
}

/// `x` = frame times (s), `y` = bin frequencies (Hz), `z[bin][frame]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramResponse {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl SpectrogramRequest {
    pub fn validate(&self) -> SpectralResult<()> {
        validate_sample_rate(self.fs)?;
        validate_samples(&self.samples)
    }

    pub fn execute(&self) -> SpectralResult<SpectrogramResponse> {
        self.validate()?;
        Ok(compute_spectrogram(&self.samples, self.fs).into())
    }
}

impl From<Spectrogram> for SpectrogramResponse {
    fn from(spectrogram: Spectrogram) -> Self {
        let z = spectrogram.to_rows();
        let (_, x, y) = spectrogram.into_parts();
        Self { x, y, z }
    }
}
