use crate::error::{Result, ToneCodecError};
use crate::symbol_table::{signature_of, Case, Symbol};
use crate::{DEFAULT_AMPLITUDE, SYMBOL_SAMPLES};
use std::f32::consts::PI;

/// Four-tone symbol generator
///
/// Each symbol block is the sum of four cosines sampled at the scheme rate:
/// the three signature tones plus the case tone. No windowing is applied,
/// the first sample sits at t = 0 and the block spans exactly one symbol
/// duration (end point excluded).
pub struct ToneModulator {
    sample_rate: f32,
    amplitude: f32,
}

impl ToneModulator {
    pub fn new() -> Self {
        Self {
            sample_rate: crate::SAMPLE_RATE as f32,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Create a modulator with a custom per-tone amplitude
    pub fn with_amplitude(amplitude: f32) -> Result<Self> {
        if !amplitude.is_finite() || amplitude <= 0.0 {
            return Err(ToneCodecError::InvalidAmplitude(amplitude));
        }
        Ok(Self {
            amplitude,
            ..Self::new()
        })
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Frequencies making up one symbol: signature tones then the case tone
    ///
    /// The space always carries the lowercase tone.
    pub fn symbol_tones(symbol: Symbol, case: Case) -> [u32; 4] {
        let [low, mid, high] = signature_of(symbol).tones();
        let case = if symbol.is_space() { Case::Lower } else { case };
        [low, mid, high, case.tone()]
    }

    /// Render one symbol into a block of `SYMBOL_SAMPLES` samples
    pub fn modulate_symbol(&self, symbol: Symbol, case: Case) -> Vec<f32> {
        let tones = Self::symbol_tones(symbol, case);
        let mut samples = vec![0.0; SYMBOL_SAMPLES];

        for (i, sample) in samples.iter_mut().enumerate() {
            let t = i as f32 / self.sample_rate;
            *sample = tones
                .iter()
                .map(|&freq| self.amplitude * (2.0 * PI * freq as f32 * t).cos())
                .sum();
        }

        samples
    }

    /// Render a sequence of symbols back to back
    pub fn modulate(&self, symbols: &[(Symbol, Case)]) -> Vec<f32> {
        let mut samples = Vec::with_capacity(symbols.len() * SYMBOL_SAMPLES);
        for &(symbol, case) in symbols {
            samples.extend_from_slice(&self.modulate_symbol(symbol, case));
        }
        samples
    }
}

impl Default for ToneModulator {
    fn default() -> Self {
        Self::new()
    }
}
