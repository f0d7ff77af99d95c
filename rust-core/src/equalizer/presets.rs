//! Named equalizer presets
//!
//! A preset document maps mode names to slider lists:
//!
//! ```json
//! {
//!   "generic": {
//!     "sliders": [
//!       { "low": 0, "high": 250, "value": 1.0, "label": "Bass" },
//!       { "low": 250, "high": 4000, "value": 1.0, "label": "Mids" }
//!     ]
//!   }
//! }
//! ```
//!
//! Other per-mode fields are ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::band::EqualizerBand;
use super::engine::{apply_equalizer, EqualizerOutput};
use crate::error::{SpectralError, SpectralResult};

/// One slider of a preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSlider {
    pub low: f64,
    pub high: f64,

    /// Linear gain
    #[serde(rename = "value", alias = "gain")]
    pub gain: f64,

    /// Display name, if the document gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PresetSlider {
    pub fn band(&self) -> EqualizerBand {
        EqualizerBand::new(self.low, self.high, self.gain)
    }
}

/// Ordered slider list for one mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub sliders: Vec<PresetSlider>,
}

impl Preset {
    /// Bands in slider order
    pub fn bands(&self) -> Vec<EqualizerBand> {
        self.sliders.iter().map(PresetSlider::band).collect()
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Update one slider's gain
    pub fn set_gain(&mut self, index: usize, gain: f64) -> SpectralResult<()> {
        let len = self.sliders.len();
        let slider = self
            .sliders
            .get_mut(index)
            .ok_or(SpectralError::BandIndexOutOfRange { index, len })?;

        EqualizerBand::new(slider.low, slider.high, gain).validate(index)?;
        slider.gain = gain;
        Ok(())
    }

    /// Remove one slider, returning it
    pub fn remove_band(&mut self, index: usize) -> SpectralResult<PresetSlider> {
        let len = self.sliders.len();
        if index >= len {
            return Err(SpectralError::BandIndexOutOfRange { index, len });
        }
        Ok(self.sliders.remove(index))
    }

    fn validate(&self) -> SpectralResult<()> {
        self.sliders
            .iter()
            .enumerate()
            .try_for_each(|(index, slider)| slider.band().validate(index))
    }
}

/// Collection of presets keyed by mode name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetBook {
    modes: BTreeMap<String, Preset>,
}

impl PresetBook {
    /// Parse and validate a preset document
    pub fn from_json_str(json: &str) -> SpectralResult<Self> {
        let book: PresetBook = serde_json::from_str(json)?;
        for preset in book.modes.values() {
            preset.validate()?;
        }

        log::debug!("loaded {} equalizer presets", book.modes.len());
        Ok(book)
    }

    /// Read a preset document from disk
    pub fn from_path(path: impl AsRef<Path>) -> SpectralResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("reading equalizer presets from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Mode names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.modes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Preset> {
        self.modes.get_mut(name)
    }

    /// Add or replace a mode
    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) -> SpectralResult<()> {
        preset.validate()?;
        self.modes.insert(name.into(), preset);
        Ok(())
    }

    /// Run the equalizer with a mode's bands
    pub fn apply(&self, name: &str, signal: &[f64], sample_rate: f64) -> SpectralResult<EqualizerOutput> {
        let preset = self
            .get(name)
            .ok_or_else(|| SpectralError::UnknownPreset(name.to_string()))?;

        Ok(apply_equalizer(signal, sample_rate, &preset.bands()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DOCUMENT: &str = r#"{
        "generic": {
            "sliders": [
                { "low": 0, "high": 2, "value": 1.0, "label": "Low" },
                { "low": 2, "high": 4, "value": 0.5 }
            ],
            "output_signal": "public/generic_output.wav"
        },
        "silence": {
            "sliders": [ { "low": 0, "high": 4, "value": 0.0 } ]
        }
    }"#;

    #[test]
    fn test_parse_document() {
        let book = PresetBook::from_json_str(DOCUMENT).unwrap();

        assert_eq!(book.names().collect::<Vec<_>>(), vec!["generic", "silence"]);

        let generic = book.get("generic").unwrap();
        assert_eq!(generic.len(), 2);
        assert_eq!(generic.sliders[0].label.as_deref(), Some("Low"));
        assert_eq!(generic.sliders[1].label, None);
        assert_eq!(generic.bands()[1], EqualizerBand::new(2.0, 4.0, 0.5));
    }

    #[test]
    fn test_invalid_band_rejected() {
        let json = r#"{ "bad": { "sliders": [ { "low": 10, "high": 5, "value": 1 } ] } }"#;
        assert!(matches!(
            PresetBook::from_json_str(json),
            Err(SpectralError::InvalidBand { index: 0, .. })
        ));

        assert!(matches!(
            PresetBook::from_json_str("not json"),
            Err(SpectralError::Preset(_))
        ));
    }

    #[test]
    fn test_apply_preset() {
        let book = PresetBook::from_json_str(DOCUMENT).unwrap();
        let mut impulse = vec![0.0; 8];
        impulse[0] = 1.0;

        let silent = book.apply("silence", &impulse, 8.0).unwrap();
        assert!(silent.samples.iter().all(|s| s.abs() < 1e-12));

        // Bin 2 sits on both bands' edges: 1.0 * 0.5
        let generic = book.apply("generic", &impulse, 8.0).unwrap();
        assert_abs_diff_eq!(generic.magnitudes[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(generic.magnitudes[2], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(generic.magnitudes[4], 0.5, epsilon = 1e-12);

        assert!(matches!(
            book.apply("missing", &impulse, 8.0),
            Err(SpectralError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_edit_sliders() {
        let mut book = PresetBook::from_json_str(DOCUMENT).unwrap();
        let generic = book.get_mut("generic").unwrap();

        generic.set_gain(1, 2.0).unwrap();
        assert_eq!(generic.sliders[1].gain, 2.0);
        assert!(generic.set_gain(1, -1.0).is_err());
        assert!(matches!(
            generic.set_gain(5, 1.0),
            Err(SpectralError::BandIndexOutOfRange { index: 5, len: 2 })
        ));

        let removed = generic.remove_band(0).unwrap();
        assert_eq!(removed.label.as_deref(), Some("Low"));
        assert_eq!(generic.len(), 1);
        assert!(generic.remove_band(3).is_err());
    }

    #[test]
    fn test_insert_and_round_trip() {
        let mut book = PresetBook::default();
        let preset = Preset {
            sliders: vec![PresetSlider {
                low: 20.0,
                high: 200.0,
                gain: 1.5,
                label: Some("Bass".to_string()),
            }],
        };
        book.insert("bass", preset.clone()).unwrap();

        let json = serde_json::to_string(&book).unwrap();
        let parsed = PresetBook::from_json_str(&json).unwrap();
        assert_eq!(parsed.get("bass"), Some(&preset));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("spectral-eq-presets-{}.json", std::process::id()));
        std::fs::write(&path, DOCUMENT).unwrap();

        let book = PresetBook::from_path(&path).unwrap();
        assert!(book.get("silence").is_some());

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(PresetBook::from_path(&path), Err(SpectralError::Io(_))));
    }
}
