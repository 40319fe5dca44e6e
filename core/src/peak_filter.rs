//! Second-order resonant peak filter with zero-phase (forward-backward) filtering.
//!
//! The coefficient design is the classic digital peak filter with a -3 dB
//! bandwidth of `center / Q`: unity gain at the centre frequency, zeros at
//! DC and Nyquist.

use crate::error::{Result, ToneCodecError};
use std::f64::consts::PI;

/// Samples of odd-reflection padding on each side for zero-phase filtering
/// (three times the coefficient count)
pub const FILTFILT_PADDING: usize = 9;

/// Peak filter coefficients, normalized so that a0 = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl PeakCoeffs {
    /// Creates peak filter coefficients.
    ///
    /// # Arguments
    /// * `center` - Centre frequency in Hz, in (0, sample_rate / 2]
    /// * `q` - Quality factor
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(center: f64, q: f64, sample_rate: f64) -> Self {
        let w0 = center / (sample_rate / 2.0);
        let bandwidth = w0 / q;
        let omega = w0 * PI;

        // With the -3 dB reference gain 1/sqrt(2) the bandwidth factor is 1
        let beta = (bandwidth * PI / 2.0).tan();
        let gain = 1.0 / (1.0 + beta);

        Self {
            b0: 1.0 - gain,
            b1: 0.0,
            b2: -(1.0 - gain),
            a1: -2.0 * gain * omega.cos(),
            a2: 2.0 * gain - 1.0,
        }
    }

    /// Filter state reached after a unit step has settled
    ///
    /// Scaling it by the first input sample starts the filter as if that
    /// sample had been present forever, which suppresses the start-up transient.
    fn step_state(&self) -> [f64; 2] {
        let c0 = self.b1 - self.a1 * self.b0;
        let c1 = self.b2 - self.a2 * self.b0;
        let s1 = (c0 + c1) / (1.0 + self.a1 + self.a2);
        let s2 = c1 - self.a2 * s1;
        [s1, s2]
    }
}

/// Peak filter state (transposed direct form II).
#[derive(Debug, Clone)]
pub struct PeakFilter {
    center: f64,
    coeffs: PeakCoeffs,
    s1: f64,
    s2: f64,
}

impl PeakFilter {
    pub fn new(center: f64, q: f64, sample_rate: f64) -> Self {
        Self {
            center,
            coeffs: PeakCoeffs::new(center, q, sample_rate),
            s1: 0.0,
            s2: 0.0,
        }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn coeffs(&self) -> &PeakCoeffs {
        &self.coeffs
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.s1 = 0.0;
        self.s2 = 0.0;
    }

    fn prime(&mut self, level: f64) {
        let [s1, s2] = self.coeffs.step_state();
        self.s1 = s1 * level;
        self.s2 = s2 * level;
    }

    /// Processes a single sample through the filter.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let output = c.b0 * input + self.s1;
        self.s1 = c.b1 * input - c.a1 * output + self.s2;
        self.s2 = c.b2 * input - c.a2 * output;
        output
    }

    /// Zero-phase filtering: forward pass, then a backward pass over the result
    ///
    /// The input is extended by odd reflection at both ends and each pass starts
    /// from the settled state for its first sample. Needs more than
    /// `FILTFILT_PADDING` samples. The filter's own state is left untouched.
    pub fn filtfilt(&self, input: &[f64]) -> Result<Vec<f64>> {
        let n = input.len();
        if n <= FILTFILT_PADDING {
            return Err(ToneCodecError::InvalidInputSize);
        }

        let first = input[0];
        let last = input[n - 1];
        let mut extended = Vec::with_capacity(n + 2 * FILTFILT_PADDING);
        extended.extend((1..=FILTFILT_PADDING).rev().map(|i| 2.0 * first - input[i]));
        extended.extend_from_slice(input);
        extended.extend((1..=FILTFILT_PADDING).map(|i| 2.0 * last - input[n - 1 - i]));

        let mut forward = self.clone();
        forward.prime(extended[0]);
        let mut filtered: Vec<f64> = extended.iter().map(|&x| forward.process(x)).collect();

        filtered.reverse();
        let mut backward = self.clone();
        backward.prime(filtered[0]);
        for sample in filtered.iter_mut() {
            *sample = backward.process(*sample);
        }
        filtered.reverse();

        Ok(filtered[FILTFILT_PADDING..FILTFILT_PADDING + n].to_vec())
    }
}
