//! Symbol table: 26 letters plus space, each identified by three tones
//!
//! Tone layout:
//! - First tone from {400, 600, 1000} Hz
//! - Second tone from {800, 1200, 2000} Hz
//! - Third tone from {1600, 2400, 4000} Hz
//!
//! The 27 combinations are all used; the last one (1000, 2000, 4000) is the space.
//! Case is carried by a separate fourth tone, see [`Case`].

use std::collections::HashMap;
use std::sync::OnceLock;

/// Case tone for lowercase letters (and the space) in Hz
pub const LOWER_CASE_TONE: u32 = 100;

/// Case tone for uppercase letters in Hz
pub const UPPER_CASE_TONE: u32 = 200;

/// Index of the space in [`SYMBOL_TONES`]
const SPACE_INDEX: usize = 26;

/// Signature tones in Hz, letters A-Z followed by the space
const SYMBOL_TONES: [(char, [u32; 3]); 27] = [
    ('A', [400, 800, 1600]),
    ('B', [400, 800, 2400]),
    ('C', [400, 800, 4000]),
    ('D', [400, 1200, 1600]),
    ('E', [400, 1200, 2400]),
    ('F', [400, 1200, 4000]),
    ('G', [400, 2000, 1600]),
    ('H', [400, 2000, 2400]),
    ('I', [400, 2000, 4000]),
    ('J', [600, 800, 1600]),
    ('K', [600, 800, 2400]),
    ('L', [600, 800, 4000]),
    ('M', [600, 1200, 1600]),
    ('N', [600, 1200, 2400]),
    ('O', [600, 1200, 4000]),
    ('P', [600, 2000, 1600]),
    ('Q', [600, 2000, 2400]),
    ('R', [600, 2000, 4000]),
    ('S', [1000, 800, 1600]),
    ('T', [1000, 800, 2400]),
    ('U', [1000, 800, 4000]),
    ('V', [1000, 1200, 1600]),
    ('W', [1000, 1200, 2400]),
    ('X', [1000, 1200, 4000]),
    ('Y', [1000, 2000, 1600]),
    ('Z', [1000, 2000, 2400]),
    (' ', [1000, 2000, 4000]),
];

/// One encodable character: an uppercase letter A-Z or the space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    pub const SPACE: Symbol = Symbol(' ');

    /// Split a text character into its symbol and case
    ///
    /// Returns None for anything outside A-Z, a-z and space. The space is
    /// reported as lowercase since it carries the low case tone.
    pub fn from_char(c: char) -> Option<(Symbol, Case)> {
        match c {
            ' ' => Some((Symbol::SPACE, Case::Lower)),
            'A'..='Z' => Some((Symbol(c), Case::Upper)),
            'a'..='z' => Some((Symbol(c.to_ascii_uppercase()), Case::Lower)),
            _ => None,
        }
    }

    /// Iterate over all 27 symbols in table order
    pub fn all() -> impl Iterator<Item = Symbol> {
        SYMBOL_TONES.iter().map(|&(c, _)| Symbol(c))
    }

    pub fn is_space(self) -> bool {
        self.0 == ' '
    }

    /// Uppercase letter or ' '
    pub fn as_char(self) -> char {
        self.0
    }

    /// Render with the given case; the space ignores case
    pub fn render(self, case: Case) -> char {
        match case {
            Case::Upper => self.0,
            Case::Lower => self.0.to_ascii_lowercase(),
        }
    }

    fn index(self) -> usize {
        if self.is_space() {
            SPACE_INDEX
        } else {
            (self.0 as u8 - b'A') as usize
        }
    }
}

/// Letter case, carried by the auxiliary case tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    pub fn from_uppercase(is_uppercase: bool) -> Self {
        if is_uppercase {
            Case::Upper
        } else {
            Case::Lower
        }
    }

    /// Case tone frequency in Hz
    pub fn tone(self) -> u32 {
        match self {
            Case::Lower => LOWER_CASE_TONE,
            Case::Upper => UPPER_CASE_TONE,
        }
    }

    /// Only the exact lowercase tone reads as lowercase; any other value is uppercase.
    pub fn from_tone(tone: u32) -> Self {
        Case::from_uppercase(tone != LOWER_CASE_TONE)
    }
}

/// Three signature tones, stored sorted so matching is order-independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature([u32; 3]);

impl Signature {
    pub fn new(mut tones: [u32; 3]) -> Self {
        tones.sort_unstable();
        Self(tones)
    }

    /// Tones in ascending order
    pub fn tones(&self) -> [u32; 3] {
        self.0
    }
}

fn reverse_table() -> &'static HashMap<Signature, Symbol> {
    static TABLE: OnceLock<HashMap<Signature, Symbol>> = OnceLock::new();
    TABLE.get_or_init(|| {
        SYMBOL_TONES
            .iter()
            .map(|&(c, tones)| (Signature::new(tones), Symbol(c)))
            .collect()
    })
}

/// Signature of a symbol
pub fn signature_of(symbol: Symbol) -> Signature {
    Signature::new(SYMBOL_TONES[symbol.index()].1)
}

/// Symbol identified by a signature, if any
pub fn lookup(signature: Signature) -> Option<Symbol> {
    reverse_table().get(&signature).copied()
}

/// Character for a signature rendered with the given case
///
/// The space matches regardless of case. None when no entry matches; callers
/// turn that into a placeholder.
pub fn letter_of(signature: Signature, case: Case) -> Option<char> {
    lookup(signature).map(|symbol| symbol.render(case))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantizer::FILTER_BANK_FREQUENCIES;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(Symbol::all().count(), 27);
        assert_eq!(reverse_table().len(), 27);
    }

    #[test]
    fn test_signatures_unique() {
        let signatures: HashSet<Signature> = Symbol::all().map(signature_of).collect();
        assert_eq!(signatures.len(), 27, "Two symbols share a signature");
    }

    #[test]
    fn test_signatures_use_bank_frequencies() {
        for symbol in Symbol::all() {
            for tone in signature_of(symbol).tones() {
                assert!(
                    FILTER_BANK_FREQUENCIES.contains(&tone),
                    "{:?} uses {} Hz outside the filter bank",
                    symbol,
                    tone
                );
            }
        }
    }

    #[test]
    fn test_signature_sorted() {
        let g = Symbol::from_char('G').unwrap().0;
        assert_eq!(signature_of(g).tones(), [400, 1600, 2000]);
        assert_eq!(Signature::new([2000, 400, 1600]), signature_of(g));
    }

    #[test]
    fn test_lookup_every_symbol() {
        for symbol in Symbol::all() {
            assert_eq!(lookup(signature_of(symbol)), Some(symbol));
        }
    }

    #[test]
    fn test_letter_of_applies_case() {
        let sig = Signature::new([1000, 800, 1600]);
        assert_eq!(letter_of(sig, Case::Upper), Some('S'));
        assert_eq!(letter_of(sig, Case::Lower), Some('s'));
    }

    #[test]
    fn test_space_ignores_case() {
        let sig = signature_of(Symbol::SPACE);
        assert_eq!(letter_of(sig, Case::Upper), Some(' '));
        assert_eq!(letter_of(sig, Case::Lower), Some(' '));
    }

    #[test]
    fn test_letter_of_not_found() {
        assert_eq!(letter_of(Signature::new([400, 600, 800]), Case::Lower), None);
        assert_eq!(letter_of(Signature::new([100, 200, 400]), Case::Upper), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Symbol::from_char('q'), Some((Symbol('Q'), Case::Lower)));
        assert_eq!(Symbol::from_char('Q'), Some((Symbol('Q'), Case::Upper)));
        assert_eq!(Symbol::from_char(' '), Some((Symbol::SPACE, Case::Lower)));
        assert_eq!(Symbol::from_char('!'), None);
        assert_eq!(Symbol::from_char('7'), None);
        assert_eq!(Symbol::from_char('é'), None);
        assert_eq!(Symbol::from_char('\t'), None);
    }

    #[test]
    fn test_case_tone() {
        assert_eq!(Case::Lower.tone(), 100);
        assert_eq!(Case::Upper.tone(), 200);
        assert_eq!(Case::from_tone(100), Case::Lower);
        assert_eq!(Case::from_tone(200), Case::Upper);
        // No validation: anything but the low tone is uppercase
        assert_eq!(Case::from_tone(400), Case::Upper);
    }
}
