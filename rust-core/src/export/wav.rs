//! Mono 16-bit PCM WAV export of processed signals

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use crate::error::SpectralResult;

/// Full-scale value for 16-bit PCM
const PCM16_SCALE: f64 = 32767.0;

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Clip to [-1, 1] and scale to i16, truncating toward zero
pub fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM16_SCALE) as i16
}

fn write_samples<W: Write + Seek>(writer: W, samples: &[f64], sample_rate: u32) -> SpectralResult<()> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(to_pcm16(sample))?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encode samples as an in-memory WAV file
///
/// # Arguments
/// * `samples` - Mono samples, nominally in [-1, 1]
/// * `sample_rate` - Sample rate in Hz
pub fn encode_wav_pcm16(samples: &[f64], sample_rate: u32) -> SpectralResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_samples(Cursor::new(&mut bytes), samples, sample_rate)?;
    Ok(bytes)
}

/// Write samples to a WAV file on disk
pub fn write_wav_pcm16(path: impl AsRef<Path>, samples: &[f64], sample_rate: u32) -> SpectralResult<()> {
    let path = path.as_ref();
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_samples(file, samples, sample_rate)?;

    log::debug!(
        "wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}
