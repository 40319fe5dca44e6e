//! Conversion between float waveforms and stored 16-bit PCM samples
//!
//! Storage scaling multiplies by `PCM_SCALE` and rounds half away from zero.
//! Values outside the i16 range saturate at `i16::MIN` / `i16::MAX`; a
//! per-tone amplitude above roughly 81 will clip.

use crate::PCM_SCALE;

/// Quantize float samples for storage
pub fn to_pcm(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| (sample * PCM_SCALE).round() as i16)
        .collect()
}

/// Widen stored samples for analysis (no rescaling)
pub fn from_pcm(samples: &[i16]) -> Vec<f32> {
    samples.iter().map(|&sample| sample as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pcm_scales_and_rounds() {
        let pcm = to_pcm(&[0.0, 1.0, -1.0, 0.004, 0.006, -0.006, 3.999]);
        assert_eq!(pcm, vec![0, 100, -100, 0, 1, -1, 400]);
    }

    #[test]
    fn test_to_pcm_saturates() {
        let pcm = to_pcm(&[400.0, -400.0, f32::INFINITY]);
        assert_eq!(pcm, vec![i16::MAX, i16::MIN, i16::MAX]);
    }

    #[test]
    fn test_from_pcm() {
        assert_eq!(from_pcm(&[-3, 0, 250]), vec![-3.0, 0.0, 250.0]);
    }
}
