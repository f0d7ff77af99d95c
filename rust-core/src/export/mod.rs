//! Export of equalized signals

pub mod wav;

pub use wav::{encode_wav_pcm16, to_pcm16, write_wav_pcm16};
