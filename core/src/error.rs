use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToneCodecError {
    #[error("No symbol matches tones {low}/{mid}/{high} Hz")]
    UnrecognizedSymbol { low: u32, mid: u32, high: u32 },

    #[error("Degenerate block: {0}")]
    DegenerateBlock(&'static str),

    #[error("Invalid input size")]
    InvalidInputSize,

    #[error("Invalid amplitude: {0}")]
    InvalidAmplitude(f32),

    #[error("FFT error: {0}")]
    FftError(String),
}

pub type Result<T> = std::result::Result<T, ToneCodecError>;
