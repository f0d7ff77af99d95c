//! Window functions for frame-based spectral analysis

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~31 dB, zero at both ends
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~43 dB
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    /// Sidelobe attenuation: ~58 dB
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1. A single-sample
/// window is `[1.0]` for every type.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    match length {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let denom = (length - 1) as f64;
    let cosine = |n: usize, k: f64| (k * PI * n as f64 / denom).cos();

    match window_type {
        WindowType::Hann => (0..length).map(|n| 0.5 - 0.5 * cosine(n, 2.0)).collect(),

        WindowType::Hamming => (0..length).map(|n| 0.54 - 0.46 * cosine(n, 2.0)).collect(),

        WindowType::Blackman => (0..length)
            .map(|n| 0.42 - 0.5 * cosine(n, 2.0) + 0.08 * cosine(n, 4.0))
            .collect(),

        WindowType::Rectangular => vec![1.0; length],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hann_formula() {
        let window = generate_window(WindowType::Hann, 5);

        // 0.5 - 0.5*cos(2πi/4)
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (w, e) in window.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*w, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_window_generation() {
        let length = 161;

        let hann = generate_window(WindowType::Hann, length);
        let hamming = generate_window(WindowType::Hamming, length);
        let blackman = generate_window(WindowType::Blackman, length);

        assert_eq!(hann.len(), length);
        assert_eq!(hamming.len(), length);
        assert_eq!(blackman.len(), length);

        // Symmetric about the centre
        assert_abs_diff_eq!(hann[0], hann[length - 1], epsilon = 1e-10);
        assert_abs_diff_eq!(hamming[0], hamming[length - 1], epsilon = 1e-10);
        assert_abs_diff_eq!(blackman[0], blackman[length - 1], epsilon = 1e-10);

        // Peak of 1.0 at the centre
        let center = length / 2;
        assert_abs_diff_eq!(hann[center], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(hamming[center], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(blackman[center], 1.0, epsilon = 1e-10);

        // Hamming keeps non-zero endpoints (0.08)
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_rectangular_window() {
        let window = generate_window(WindowType::Rectangular, 100);
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_window(WindowType::Hann, 0).is_empty());
        assert_eq!(generate_window(WindowType::Blackman, 1), vec![1.0]);
    }

    #[test]
    fn test_window_type_names() {
        let parsed: WindowType = serde_json::from_str("\"blackman\"").unwrap();
        assert_eq!(parsed, WindowType::Blackman);
        assert_eq!(WindowType::default(), WindowType::Hann);
    }
}
