//! Radix-2 FFT core
//!
//! Iterative in-place Cooley-Tukey transform over power-of-two lengths.
//! Signals of any other length are zero-padded before they get here.

use num_complex::Complex;
use std::f64::consts::PI;

use super::padding::zero_pad_complex;
use crate::error::{SpectralError, SpectralResult};

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time domain -> frequency domain, twiddle e^(-2πik/n)
    Forward,

    /// Frequency domain -> time domain, twiddle e^(+2πik/n), scaled by 1/n
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Forward transform of a real signal
///
/// # Arguments
/// * `signal` - Real samples of any length
///
/// # Returns
/// Full spectrum of length `next_power_of_two(signal.len())`; empty for
/// an empty signal
pub fn forward_transform(signal: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer = zero_pad_complex(signal);
    transform_in_place(&mut buffer, Direction::Forward);
    buffer
}

/// Inverse transform of a full spectrum
///
/// The spectrum must already have power-of-two length; padding it is the
/// caller's job.
pub fn inverse_transform(spectrum: Vec<Complex<f64>>) -> SpectralResult<Vec<Complex<f64>>> {
    transform(spectrum, Direction::Inverse)
}

/// Transform an owned complex sequence in either direction
pub fn transform(
    mut sequence: Vec<Complex<f64>>,
    direction: Direction,
) -> SpectralResult<Vec<Complex<f64>>> {
    let n = sequence.len();
    if n > 1 && !n.is_power_of_two() {
        return Err(SpectralError::NotPowerOfTwo(n));
    }

    transform_in_place(&mut sequence, direction);
    Ok(sequence)
}

/// In-place radix-2 transform
///
/// Bit-reversal permutation followed by log2(n) butterfly stages. The
/// inverse divides by n once at the end, which equals halving at every
/// stage.
///
/// Lengths 0 and 1 are left untouched. Any other length must be a power
/// of two.
pub(crate) fn transform_in_place(buffer: &mut [Complex<f64>], direction: Direction) {
    let n = buffer.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two(), "radix-2 length must be a power of two, got {}", n);

    bit_reverse_permute(buffer);

    let mut twiddles = Vec::with_capacity(n / 2);
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let angle = direction.sign() * 2.0 * PI / len as f64;

        twiddles.clear();
        twiddles.extend((0..half).map(|k| Complex::from_polar(1.0, angle * k as f64)));

        for block in buffer.chunks_exact_mut(len) {
            let (evens, odds) = block.split_at_mut(half);
            for ((even, odd), &w) in evens.iter_mut().zip(odds.iter_mut()).zip(&twiddles) {
                let t = *odd * w;
                *odd = *even - t;
                *even += t;
            }
        }

        len <<= 1;
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
    }
}

fn bit_reverse_permute(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if j > i {
            buffer.swap(i, j);
        }
    }
}
