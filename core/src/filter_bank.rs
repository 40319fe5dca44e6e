use crate::error::{Result, ToneCodecError};
use crate::peak_filter::PeakFilter;
use crate::quantizer::FILTER_BANK_FREQUENCIES;
use crate::symbol_table::{letter_of, Case, Signature, LOWER_CASE_TONE, UPPER_CASE_TONE};
use crate::{FILTER_Q, SYMBOL_SAMPLES};
use log::trace;
use std::cmp::Ordering;

/// Below this, the third strongest response means the block carries no tones
const MIN_RESPONSE: f64 = 1e-6;

/// Per-filter responses for one block
#[derive(Debug, Clone, PartialEq)]
pub struct BankResponses {
    /// (centre Hz, response) in bank order
    pub tones: Vec<(u32, f64)>,
    pub lower_case: f64,
    pub upper_case: f64,
}

impl BankResponses {
    pub fn case(&self) -> Case {
        Case::from_uppercase(self.upper_case > self.lower_case)
    }

    /// The three strongest bank frequencies, ascending
    pub fn signature(&self) -> Signature {
        let ranked = self.ranked();
        Signature::new([ranked[0].0, ranked[1].0, ranked[2].0])
    }

    /// Bank entries sorted by descending response; ties keep bank order
    pub fn ranked(&self) -> Vec<(u32, f64)> {
        let mut ranked = self.tones.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

/// Resonant filter bank demodulator
///
/// Each block is normalized by its maximum sample, then run through one
/// zero-phase peak filter per signature frequency. The three strongest
/// responses form the signature; a separate pair of filters at the case
/// tones decides upper/lower case.
///
/// A filter's response is the largest value of its output (signed peak).
pub struct FilterBankDemodulator {
    bank: Vec<(u32, PeakFilter)>,
    lower_case: PeakFilter,
    upper_case: PeakFilter,
}

impl FilterBankDemodulator {
    pub fn new() -> Self {
        let sample_rate = crate::SAMPLE_RATE as f64;
        let filter = |freq: u32| PeakFilter::new(freq as f64, FILTER_Q, sample_rate);

        Self {
            bank: FILTER_BANK_FREQUENCIES
                .iter()
                .map(|&freq| (freq, filter(freq)))
                .collect(),
            lower_case: filter(LOWER_CASE_TONE),
            upper_case: filter(UPPER_CASE_TONE),
        }
    }

    /// Scale a block so its maximum sample is 1.0
    fn normalize(samples: &[f32]) -> Result<Vec<f64>> {
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if max == 0.0 {
            return Err(ToneCodecError::DegenerateBlock("maximum sample is zero"));
        }
        let max = max as f64;
        Ok(samples.iter().map(|&s| s as f64 / max).collect())
    }

    fn response(filter: &PeakFilter, block: &[f64]) -> Result<f64> {
        let output = filter.filtfilt(block)?;
        Ok(output.into_iter().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Run the whole bank and both case filters over one block
    pub fn responses(&self, samples: &[f32]) -> Result<BankResponses> {
        if samples.len() != SYMBOL_SAMPLES {
            return Err(ToneCodecError::InvalidInputSize);
        }
        let block = Self::normalize(samples)?;

        let mut tones = Vec::with_capacity(self.bank.len());
        for (freq, filter) in &self.bank {
            tones.push((*freq, Self::response(filter, &block)?));
        }

        Ok(BankResponses {
            tones,
            lower_case: Self::response(&self.lower_case, &block)?,
            upper_case: Self::response(&self.upper_case, &block)?,
        })
    }

    /// Demodulate a single symbol block into a character
    pub fn demodulate_symbol(&self, samples: &[f32]) -> Result<char> {
        let responses = self.responses(samples)?;
        trace!("Filter bank responses {:?}", responses);

        if !(responses.ranked()[2].1 >= MIN_RESPONSE) {
            return Err(ToneCodecError::DegenerateBlock("no tonal content"));
        }

        let signature = responses.signature();
        letter_of(signature, responses.case()).ok_or_else(|| {
            let [low, mid, high] = signature.tones();
            ToneCodecError::UnrecognizedSymbol { low, mid, high }
        })
    }
}

impl Default for FilterBankDemodulator {
    fn default() -> Self {
        Self::new()
    }
}
