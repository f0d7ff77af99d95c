//! Equalizer band definition

use serde::{Deserialize, Serialize};

use crate::error::{SpectralError, SpectralResult};

/// Gain applied over a closed frequency interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqualizerBand {
    /// Lower edge in Hz (inclusive)
    pub low: f64,

    /// Upper edge in Hz (inclusive)
    pub high: f64,

    /// Linear gain: 1.0 leaves the band unchanged, 0.0 silences it
    #[serde(alias = "value")]
    pub gain: f64,
}

impl EqualizerBand {
    pub fn new(low: f64, high: f64, gain: f64) -> Self {
        Self { low, high, gain }
    }

    /// True if `frequency` lies within [low, high]
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.low && frequency <= self.high
    }

    /// True if the band overlaps [0, nyquist]
    pub fn overlaps(&self, nyquist: f64) -> bool {
        self.high >= 0.0 && self.low <= nyquist
    }

    /// Check edges and gain
    ///
    /// # Arguments
    /// * `index` - Position of the band in its list, used in the error
    pub fn validate(&self, index: usize) -> SpectralResult<()> {
        let invalid = |reason: &str| SpectralError::InvalidBand {
            index,
            reason: reason.to_string(),
        };

        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(invalid("band edges must be finite"));
        }
        if self.low > self.high {
            return Err(invalid("lower edge is above upper edge"));
        }
        if !self.gain.is_finite() || self.gain < 0.0 {
            return Err(invalid("gain must be finite and non-negative"));
        }
        Ok(())
    }
}

/// Validate every band in order, reporting the first failure
pub fn validate_bands(bands: &[EqualizerBand]) -> SpectralResult<()> {
    bands
        .iter()
        .enumerate()
        .try_for_each(|(index, band)| band.validate(index))
}
