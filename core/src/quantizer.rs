/// Canonical frequencies in Hz, in the order used to break quantization ties
pub const CANONICAL_FREQUENCIES: [u32; 11] =
    [100, 200, 400, 600, 800, 1000, 1200, 1600, 2000, 2400, 4000];

/// Canonical frequencies without the two case tones
pub const FILTER_BANK_FREQUENCIES: [u32; 9] = [400, 600, 800, 1000, 1200, 1600, 2000, 2400, 4000];

/// Snap a measured frequency to the nearest canonical frequency
///
/// Callers pass a magnitude (absolute value). On an exact tie the earlier
/// entry of [`CANONICAL_FREQUENCIES`] wins. A NaN input yields the first entry.
pub fn quantize(freq: f32) -> u32 {
    let mut nearest = CANONICAL_FREQUENCIES[0];
    let mut min_diff = f32::INFINITY;

    for &canonical in CANONICAL_FREQUENCIES.iter() {
        let diff = (canonical as f32 - freq).abs();
        if diff < min_diff {
            min_diff = diff;
            nearest = canonical;
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_table::{LOWER_CASE_TONE, UPPER_CASE_TONE};

    #[test]
    fn test_quantize_identity() {
        for &f in CANONICAL_FREQUENCIES.iter() {
            assert_eq!(quantize(f as f32), f);
        }
    }

    #[test]
    fn test_quantize_ties_pick_earlier() {
        assert_eq!(quantize(150.0), 100);
        assert_eq!(quantize(300.0), 200);
        assert_eq!(quantize(1400.0), 1200);
        assert_eq!(quantize(3200.0), 2400);

        for pair in CANONICAL_FREQUENCIES.windows(2) {
            let midpoint = (pair[0] + pair[1]) as f32 / 2.0;
            assert_eq!(quantize(midpoint), pair[0], "Tie at {} Hz", midpoint);
        }
    }

    #[test]
    fn test_quantize_nearest() {
        assert_eq!(quantize(0.0), 100);
        assert_eq!(quantize(175.0), 200);
        assert_eq!(quantize(1025.0), 1000);
        assert_eq!(quantize(1450.0), 1600);
        assert_eq!(quantize(3500.0), 4000);
        assert_eq!(quantize(12000.0), 4000);
    }

    #[test]
    fn test_quantize_nan() {
        assert_eq!(quantize(f32::NAN), 100);
    }

    #[test]
    fn test_bank_excludes_case_tones() {
        let expected: Vec<u32> = CANONICAL_FREQUENCIES
            .iter()
            .copied()
            .filter(|&f| f != LOWER_CASE_TONE && f != UPPER_CASE_TONE)
            .collect();
        assert_eq!(FILTER_BANK_FREQUENCIES.to_vec(), expected);
    }
}
