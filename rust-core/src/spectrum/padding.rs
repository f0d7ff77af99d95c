//! Zero-padding helpers shared by every transform path

use num_complex::Complex;

use crate::error::{SpectralError, SpectralResult};

/// Smallest power of two >= `n`
///
/// `n = 0` yields 1; callers that must not allocate for empty input
/// short-circuit before asking.
///
/// # Errors
/// `LengthOverflow` when the result would not fit in `usize`
pub fn next_power_of_two(n: usize) -> SpectralResult<usize> {
    n.checked_next_power_of_two()
        .ok_or(SpectralError::LengthOverflow(n))
}

/// Copy a real signal into a complex buffer of power-of-two length
///
/// # Returns
/// Buffer of length `next_power_of_two(signal.len())` with trailing zeros,
/// or an empty buffer for an empty signal
pub fn zero_pad_complex(signal: &[f64]) -> Vec<Complex<f64>> {
    if signal.is_empty() {
        return Vec::new();
    }

    // A slice of f64 holds at most isize::MAX / 8 elements, so this cannot overflow
    let n = signal.len().next_power_of_two();
    let mut buffer = vec![Complex::new(0.0, 0.0); n];
    for (slot, &sample) in buffer.iter_mut().zip(signal) {
        *slot = Complex::new(sample, 0.0);
    }

    if n != signal.len() {
        log::trace!("zero-padded {} samples to {}", signal.len(), n);
    }

    buffer
}
