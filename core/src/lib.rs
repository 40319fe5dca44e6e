//! Multi-tone text codec
//!
//! Every letter (and the space) is sent as the sum of three signature tones
//! drawn from a fixed set of canonical frequencies, plus one case tone
//! (100 Hz lowercase, 200 Hz uppercase). Audio is decoded back to text with
//! either an FFT peak picker or a bank of resonant peak filters.

pub mod error;
pub mod symbol_table;
pub mod quantizer;
pub mod tone;
pub mod pcm;
pub mod spectrum;
pub mod peak_filter;
pub mod filter_bank;
pub mod encoder;
pub mod decoder;

pub use decoder::{decode_filterbank, decode_spectral, DecodeMethod, Decoder};
pub use encoder::{encode, sanitize_text, Encoder};
pub use error::{Result, ToneCodecError};
pub use symbol_table::{Case, Signature, Symbol};

// Scheme configuration
pub const SAMPLE_RATE: usize = 8000;
pub const SYMBOL_DURATION_MS: usize = 40;
pub const SYMBOL_SAMPLES: usize = (SAMPLE_RATE * SYMBOL_DURATION_MS) / 1000; // 320

/// Storage quantization: float samples are multiplied by this before rounding to i16
pub const PCM_SCALE: f32 = 100.0;

/// Per-tone amplitude used when none is given
pub const DEFAULT_AMPLITUDE: f32 = 1.0;

/// Quality factor of every resonant filter in the bank
pub const FILTER_Q: f64 = 5.0;

/// Emitted for a block that matches no symbol
pub const PLACEHOLDER: char = '*';
