//! Short-time Fourier transform and spectrogram data

pub mod output;
pub mod stft;

pub use output::Spectrogram;
pub use stft::{compute_spectrogram, FramingMode, SpectrogramConfig, Stft};
