//! WAV container I/O for tone files (mono, 16-bit integer PCM, 8 kHz)

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use thiserror::Error;
use tritone_core::SAMPLE_RATE;

#[derive(Debug, Error)]
pub enum WavFormatError {
    #[error("Expected mono audio, got {0} channels")]
    Channels(u16),

    #[error("Expected 16-bit integer samples, got {bits}-bit {format:?}")]
    SampleFormat { bits: u16, format: SampleFormat },

    #[error("Expected {expected} Hz sample rate, got {actual} Hz")]
    SampleRate { expected: u32, actual: u32 },
}

pub fn tone_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Reject anything the decoder cannot read sample-for-sample
pub fn validate_spec(spec: &WavSpec) -> Result<(), WavFormatError> {
    if spec.channels != 1 {
        return Err(WavFormatError::Channels(spec.channels));
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(WavFormatError::SampleFormat {
            bits: spec.bits_per_sample,
            format: spec.sample_format,
        });
    }
    if spec.sample_rate != SAMPLE_RATE as u32 {
        return Err(WavFormatError::SampleRate {
            expected: SAMPLE_RATE as u32,
            actual: spec.sample_rate,
        });
    }
    Ok(())
}

pub fn write_wav(path: &Path, samples: &[i16]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WavWriter::create(path, tone_spec())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

pub fn read_wav(path: &Path) -> Result<Vec<i16>, Box<dyn std::error::Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    log::info!(
        "Read WAV: {} Hz, {} channels, {} bits",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample
    );
    validate_spec(&spec)?;

    let samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    Ok(samples?)
}
