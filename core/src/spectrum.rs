//! FFT peak-picking demodulator
//!
//! Per block: single-sided magnitude spectrum scaled by 2/N, the four
//! strongest bins, each snapped to a canonical frequency. The lowest of the
//! four is the case tone, the other three form the signature.
//!
//! At 8 kHz and 320 samples the bin spacing is 25 Hz, so every canonical
//! frequency falls exactly on a bin (4000 Hz is the Nyquist bin).

use crate::error::{Result, ToneCodecError};
use crate::quantizer::quantize;
use crate::symbol_table::{letter_of, Case, Signature, LOWER_CASE_TONE, UPPER_CASE_TONE};
use crate::SYMBOL_SAMPLES;
use log::{trace, warn};
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex;
use std::cmp::Ordering;
use std::sync::Arc;

/// Number of spectral peaks per symbol (three signature tones plus the case tone)
pub const SPECTRAL_PEAK_COUNT: usize = 4;

/// The weakest of the four peaks must reach this fraction of the strongest,
/// otherwise the block has fewer than four tones and is treated as degenerate.
const MIN_PEAK_RATIO: f32 = 1e-3;

/// A spectral peak: bin frequency in Hz and its scaled magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub frequency: f32,
    pub magnitude: f32,
}

pub struct SpectralDemodulator {
    sample_rate: f32,
    fft: Arc<dyn RealToComplex<f32>>,
}

impl SpectralDemodulator {
    pub fn new() -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        Self {
            sample_rate: crate::SAMPLE_RATE as f32,
            fft: planner.plan_fft_forward(SYMBOL_SAMPLES),
        }
    }

    /// Frequency in Hz of a spectrum bin
    pub fn bin_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.sample_rate / SYMBOL_SAMPLES as f32
    }

    /// Magnitude of the non-negative frequency bins (N/2 + 1 values), scaled by 2/N
    pub fn magnitude_spectrum(&self, samples: &[f32]) -> Result<Vec<f32>> {
        if samples.len() != SYMBOL_SAMPLES {
            return Err(ToneCodecError::InvalidInputSize);
        }

        let mut input = samples.to_vec();
        let mut spectrum: Vec<Complex<f32>> = self.fft.make_output_vec();
        self.fft
            .process(&mut input, &mut spectrum)
            .map_err(|e| ToneCodecError::FftError(format!("Forward FFT failed: {:?}", e)))?;

        let scale = 2.0 / SYMBOL_SAMPLES as f32;
        Ok(spectrum.iter().map(|bin| bin.norm() * scale).collect())
    }

    /// The four strongest bins, strongest first
    ///
    /// Equal magnitudes keep ascending bin order (stable sort).
    pub fn peaks(&self, samples: &[f32]) -> Result<Vec<SpectralPeak>> {
        let spectrum = self.magnitude_spectrum(samples)?;

        let mut bins: Vec<(usize, f32)> = spectrum.into_iter().enumerate().collect();
        bins.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(bins
            .into_iter()
            .take(SPECTRAL_PEAK_COUNT)
            .map(|(bin, magnitude)| SpectralPeak {
                frequency: self.bin_frequency(bin).abs(),
                magnitude,
            })
            .collect())
    }

    /// Demodulate a single symbol block into a character
    pub fn demodulate_symbol(&self, samples: &[f32]) -> Result<char> {
        let peaks = self.peaks(samples)?;

        let strongest = peaks[0].magnitude;
        let weakest = peaks[SPECTRAL_PEAK_COUNT - 1].magnitude;
        if !(strongest > 0.0) {
            return Err(ToneCodecError::DegenerateBlock("silent block"));
        }
        if weakest < strongest * MIN_PEAK_RATIO {
            return Err(ToneCodecError::DegenerateBlock("fewer than four tones"));
        }

        let mut tones: Vec<u32> = peaks.iter().map(|peak| quantize(peak.frequency)).collect();
        tones.sort_unstable();
        trace!("Spectral peaks {:?} -> tones {:?}", peaks, tones);

        let case_tone = tones[0];
        if case_tone != LOWER_CASE_TONE && case_tone != UPPER_CASE_TONE {
            warn!("Case tone quantized to {} Hz, reading as uppercase", case_tone);
        }
        let case = Case::from_tone(case_tone);

        let signature = Signature::new([tones[1], tones[2], tones[3]]);
        letter_of(signature, case).ok_or(ToneCodecError::UnrecognizedSymbol {
            low: tones[1],
            mid: tones[2],
            high: tones[3],
        })
    }
}

impl Default for SpectralDemodulator {
    fn default() -> Self {
        Self::new()
    }
}
