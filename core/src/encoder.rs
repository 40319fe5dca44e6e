use crate::error::Result;
use crate::pcm;
use crate::symbol_table::{Case, Symbol};
use crate::tone::ToneModulator;
use log::debug;

/// Keep only characters the scheme can carry (A-Z, a-z and space)
pub fn sanitize_text(text: &str) -> String {
    text.chars().filter(|&c| Symbol::from_char(c).is_some()).collect()
}

/// Text to tone encoder
///
/// Characters outside A-Z, a-z and space are dropped silently. Each remaining
/// character becomes one symbol block; blocks are concatenated in text order.
pub struct Encoder {
    tone: ToneModulator,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            tone: ToneModulator::new(),
        }
    }

    /// Create an encoder with a custom per-tone amplitude
    pub fn with_amplitude(amplitude: f32) -> Result<Self> {
        Ok(Self {
            tone: ToneModulator::with_amplitude(amplitude)?,
        })
    }

    /// Split text into encodable symbols, dropping everything else
    pub fn symbols(text: &str) -> Vec<(Symbol, Case)> {
        text.chars().filter_map(Symbol::from_char).collect()
    }

    /// Encode text into a float waveform
    pub fn encode_samples(&self, text: &str) -> Vec<f32> {
        let symbols = Self::symbols(text);
        let dropped = text.chars().count() - symbols.len();
        if dropped > 0 {
            debug!("Dropped {} unsupported characters", dropped);
        }
        debug!(
            "Encoding {} symbols at amplitude {}",
            symbols.len(),
            self.tone.amplitude()
        );

        self.tone.modulate(&symbols)
    }

    /// Encode text into 16-bit PCM samples ready for storage
    pub fn encode(&self, text: &str) -> Vec<i16> {
        pcm::to_pcm(&self.encode_samples(text))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text at the default amplitude
pub fn encode(text: &str) -> Vec<i16> {
    Encoder::new().encode(text)
}
