//! Error types for the fallible edges of the engine
//!
//! The transforms themselves never fail; these errors come from argument
//! validation, preset loading and WAV export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("Sample rate must be finite and positive (found: {0})")]
    InvalidSampleRate(f64),

    #[error("Sample {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("Invalid equalizer band {index}: {reason}")]
    InvalidBand { index: usize, reason: String },

    #[error("Window size must be at least 2 samples (found: {0})")]
    InvalidWindowSize(usize),

    #[error("Hop size must be at least 1 sample (found: {0})")]
    InvalidHopSize(usize),

    #[error("Sequence length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("No power of two >= {0} fits in usize")]
    LengthOverflow(usize),

    #[error("Unknown equalizer preset: {0}")]
    UnknownPreset(String),

    #[error("Band index {index} out of range for preset with {len} bands")]
    BandIndexOutOfRange { index: usize, len: usize },

    #[error("Failed to parse preset document: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode WAV: {0}")]
    Wav(#[from] hound::Error),
}

pub type SpectralResult<T> = Result<T, SpectralError>;

/// Reject sample rates the frequency axes cannot be built from
pub fn validate_sample_rate(fs: f64) -> SpectralResult<()> {
    if fs.is_finite() && fs > 0.0 {
        Ok(())
    } else {
        Err(SpectralError::InvalidSampleRate(fs))
    }
}

/// Reject sequences carrying NaN or infinity
pub fn validate_samples(samples: &[f64]) -> SpectralResult<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(SpectralError::NonFiniteSample { index }),
        None => Ok(()),
    }
}
