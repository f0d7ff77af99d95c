//! Spectral EQ - FFT, Equalizer and Spectrogram Core
//! 
//! Radix-2 FFT engine with a conjugate-symmetric frequency-domain equalizer
//! and a short-time Fourier transform, plus optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod equalizer;
pub mod error;
pub mod export;
pub mod protocol;
pub mod spectrogram;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use equalizer::{apply_equalizer, EqualizerBand, EqualizerOutput, PresetBook};
pub use error::{SpectralError, SpectralResult};
pub use spectrogram::{compute_spectrogram, Spectrogram, SpectrogramConfig, Stft};
pub use spectrum::{forward_fft, next_power_of_two, HalfSpectrum};
