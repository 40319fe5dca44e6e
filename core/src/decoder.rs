use crate::error::Result;
use crate::filter_bank::FilterBankDemodulator;
use crate::pcm;
use crate::spectrum::SpectralDemodulator;
use crate::{PLACEHOLDER, SYMBOL_SAMPLES};
use log::debug;

/// Which detector turns a block into a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMethod {
    /// FFT peak picking
    Spectral,
    /// Resonant filter bank
    FilterBank,
}

/// Tone to text decoder
///
/// The sample stream is cut into consecutive `SYMBOL_SAMPLES` blocks; a
/// trailing partial block is ignored. Each block yields exactly one
/// character, or `PLACEHOLDER` when it cannot be matched.
pub struct Decoder {
    spectral: SpectralDemodulator,
    filter_bank: FilterBankDemodulator,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            spectral: SpectralDemodulator::new(),
            filter_bank: FilterBankDemodulator::new(),
        }
    }

    pub fn spectral(&self) -> &SpectralDemodulator {
        &self.spectral
    }

    pub fn filter_bank(&self) -> &FilterBankDemodulator {
        &self.filter_bank
    }

    /// Decode one float block
    pub fn decode_block(&self, block: &[f32], method: DecodeMethod) -> Result<char> {
        match method {
            DecodeMethod::Spectral => self.spectral.demodulate_symbol(block),
            DecodeMethod::FilterBank => self.filter_bank.demodulate_symbol(block),
        }
    }

    /// Decode PCM samples back to text
    pub fn decode(&self, samples: &[i16], method: DecodeMethod) -> String {
        let trailing = samples.len() % SYMBOL_SAMPLES;
        if trailing > 0 {
            debug!("Ignoring {} trailing samples", trailing);
        }

        samples
            .chunks_exact(SYMBOL_SAMPLES)
            .enumerate()
            .map(|(index, chunk)| {
                let block = pcm::from_pcm(chunk);
                match self.decode_block(&block, method) {
                    Ok(c) => c,
                    Err(err) => {
                        debug!("Block {} ({:?}): {}", index, method, err);
                        PLACEHOLDER
                    }
                }
            })
            .collect()
    }

    /// Decode with both methods: (spectral, filter bank)
    pub fn decode_both(&self, samples: &[i16]) -> (String, String) {
        (
            self.decode(samples, DecodeMethod::Spectral),
            self.decode(samples, DecodeMethod::FilterBank),
        )
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode PCM samples with the FFT peak detector
pub fn decode_spectral(samples: &[i16]) -> String {
    Decoder::new().decode(samples, DecodeMethod::Spectral)
}

/// Decode PCM samples with the resonant filter bank
pub fn decode_filterbank(samples: &[i16]) -> String {
    Decoder::new().decode(samples, DecodeMethod::FilterBank)
}
