//! Short-time Fourier transform
//!
//! Slides a window over the signal, runs the FFT core on each windowed
//! frame and keeps the half-band magnitudes.

use serde::{Deserialize, Serialize};

use super::output::Spectrogram;
use crate::error::{SpectralError, SpectralResult};
use crate::spectrum::fft::forward_transform;
use crate::spectrum::padding::next_power_of_two;
use crate::spectrum::windowing::extract_frame;
use crate::spectrum::windows::{generate_window, WindowType};

/// Default analysis window length in samples
pub const DEFAULT_WINDOW_SIZE: usize = 2048;

/// Default hop: a quarter window (75% overlap)
pub const DEFAULT_HOP_SIZE: usize = DEFAULT_WINDOW_SIZE / 4;

/// How the end of the signal is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingMode {
    /// Frames start at every hop before the end of the signal; the last
    /// frames are zero-padded. Frame count = ceil(len / hop).
    #[default]
    PadFinal,

    /// Only frames that fit entirely inside the signal.
    /// Frame count = (len - window) / hop + 1, or 0 when len < window.
    FullFramesOnly,
}

/// Spectrogram configuration
///
/// Every field is optional when deserializing. A missing `hop_size` is a
/// quarter of the (possibly non-default) `window_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpectrogramConfigFields")]
pub struct SpectrogramConfig {
    /// Window length in samples (padded to a power of two for the FFT)
    pub window_size: usize,

    /// Distance between frame starts in samples
    pub hop_size: usize,

    /// Window applied to each frame
    pub window_type: WindowType,

    /// End-of-signal framing
    pub framing: FramingMode,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            hop_size: DEFAULT_HOP_SIZE,
            window_type: WindowType::Hann,
            framing: FramingMode::PadFinal,
        }
    }
}

#[derive(Deserialize)]
struct SpectrogramConfigFields {
    #[serde(default = "default_window_size")]
    window_size: usize,
    #[serde(default)]
    hop_size: Option<usize>,
    #[serde(default)]
    window_type: WindowType,
    #[serde(default)]
    framing: FramingMode,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl From<SpectrogramConfigFields> for SpectrogramConfig {
    fn from(fields: SpectrogramConfigFields) -> Self {
        Self {
            window_size: fields.window_size,
            hop_size: fields
                .hop_size
                .unwrap_or_else(|| quarter_window(fields.window_size)),
            window_type: fields.window_type,
            framing: fields.framing,
        }
    }
}

fn quarter_window(window_size: usize) -> usize {
    (window_size / 4).max(1)
}

impl SpectrogramConfig {
    /// Config with the given window and a quarter-window hop
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_size,
            hop_size: quarter_window(window_size),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SpectralResult<()> {
        if self.window_size < 2 {
            return Err(SpectralError::InvalidWindowSize(self.window_size));
        }
        next_power_of_two(self.window_size)?;
        if self.hop_size == 0 {
            return Err(SpectralError::InvalidHopSize(self.hop_size));
        }
        Ok(())
    }
}

/// STFT engine with a precomputed window
#[derive(Debug, Clone)]
pub struct Stft {
    config: SpectrogramConfig,
    window: Vec<f64>,
    fft_size: usize,
}

impl Default for Stft {
    fn default() -> Self {
        Self::build(SpectrogramConfig::default())
    }
}

impl Stft {
    /// Create a new STFT engine
    ///
    /// # Errors
    /// `InvalidWindowSize` for windows shorter than 2 samples,
    /// `InvalidHopSize` for a zero hop, `LengthOverflow` for a window
    /// with no power-of-two FFT length
    pub fn new(config: SpectrogramConfig) -> SpectralResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SpectrogramConfig) -> Self {
        let window = generate_window(config.window_type, config.window_size);
        // Validated configs (and the default) always have a padded length
        let fft_size = config.window_size.next_power_of_two();
        if fft_size != config.window_size {
            log::debug!(
                "STFT window of {} samples runs a {} point FFT",
                config.window_size,
                fft_size
            );
        }

        Self {
            config,
            window,
            fft_size,
        }
    }

    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }

    /// Frequency bins per frame: fft_size/2 + 1, from DC up to Nyquist
    ///
    /// Equals window_size/2 + 1 for power-of-two windows.
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// FFT length used per frame
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Start offsets of every frame for a signal of `signal_len` samples
    pub fn frame_starts(&self, signal_len: usize) -> Vec<usize> {
        let hop = self.config.hop_size;
        let window = self.config.window_size;

        match self.config.framing {
            FramingMode::PadFinal => (0..signal_len).step_by(hop).collect(),
            FramingMode::FullFramesOnly => {
                if signal_len < window {
                    Vec::new()
                } else {
                    (0..=signal_len - window).step_by(hop).collect()
                }
            }
        }
    }

    /// Compute the spectrogram of a signal
    ///
    /// # Arguments
    /// * `signal` - Real samples
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Returns
    /// Magnitudes laid out [frequency bin][frame] with both axes
    pub fn compute(&self, signal: &[f64], sample_rate: f64) -> Spectrogram {
        let starts = self.frame_starts(signal.len());
        let num_bins = self.num_bins();

        let frames: Vec<Vec<f64>> = starts
            .iter()
            .map(|&start| {
                let frame = extract_frame(signal, start, &self.window);
                forward_transform(&frame)
                    .iter()
                    .take(num_bins)
                    .map(|c| c.norm())
                    .collect()
            })
            .collect();

        let times = (0..starts.len())
            .map(|t| (t * self.config.hop_size) as f64 / sample_rate)
            .collect();
        let frequencies = (0..num_bins)
            .map(|k| k as f64 * sample_rate / self.fft_size as f64)
            .collect();

        log::debug!(
            "spectrogram: {} samples -> {} frames x {} bins",
            signal.len(),
            frames.len(),
            num_bins
        );

        Spectrogram::from_frames(&frames, num_bins, times, frequencies)
    }
}

/// Spectrogram with the default 2048-sample Hann window and 512-sample hop
pub fn compute_spectrogram(signal: &[f64], sample_rate: f64) -> Spectrogram {
    Stft::default().compute(signal, sample_rate)
}
