//! Frequency-domain equalizer and its presets

pub mod band;
pub mod engine;
pub mod presets;

pub use band::{validate_bands, EqualizerBand};
pub use engine::{apply_equalizer, EqualizerOutput};
pub use presets::{Preset, PresetBook, PresetSlider};
