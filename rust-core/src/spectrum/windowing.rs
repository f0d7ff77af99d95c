//! Frame extraction and windowing for short-time analysis
//!
//! Applies windows to time-domain frames before the FFT to reduce spectral
//! leakage at frame boundaries

/// Extract one windowed frame starting at `start`
///
/// # Arguments
/// * `signal` - Long signal
/// * `start` - Index of the first sample in the frame
/// * `window` - Window coefficients; the frame has the window's length
///
/// # Returns
/// `signal[start + i] * window[i]`, with zeros past the end of the signal
pub fn extract_frame(signal: &[f64], start: usize, window: &[f64]) -> Vec<f64> {
    let mut frame = vec![0.0; window.len()];

    if start < signal.len() {
        let available = &signal[start..];
        for ((slot, &s), &w) in frame.iter_mut().zip(available).zip(window) {
            *slot = s * w;
        }
    }

    frame
}
