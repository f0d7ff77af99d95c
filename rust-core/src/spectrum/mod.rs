//! FFT core and spectrum views

pub mod analysis;
pub mod fft;
pub mod padding;
pub mod windowing;
pub mod windows;

pub use analysis::{forward_fft, HalfSpectrum};
pub use fft::{forward_transform, inverse_transform, transform, Direction};
pub use padding::next_power_of_two;
pub use windows::{generate_window, WindowType};
