//! Phoneme tokens and their classification.
//!
//! Pronunciations are ordered sequences of phoneme tokens in the CMU phonetic
//! alphabet, e.g. `["K", "AE1", "T"]` for "CAT". Vowel phoneme codes always
//! begin with a vowel letter and carry a trailing stress digit; consonant
//! codes do not. Classification therefore inspects only the first character
//! of a token. This is a convention of the CMU symbol set, not a general
//! linguistic rule, and must not be applied to other phoneme alphabets.

use serde::{Deserialize, Serialize};

/// The class of a phoneme token, determined by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    /// Token begins with A/E/I/O/U (a syllable nucleus).
    Vowel,
    /// Any other token.
    Consonant,
}

/// Classify a phoneme token by its first character.
///
/// Empty tokens classify as consonants; the dictionary loader never produces
/// them, but callers handing in raw slices should not panic on one.
///
/// # Examples
///
/// ```
/// use cadenza::phoneme::{classify, PhonemeClass};
///
/// assert_eq!(classify("AE1"), PhonemeClass::Vowel);
/// assert_eq!(classify("K"), PhonemeClass::Consonant);
/// ```
pub fn classify(token: &str) -> PhonemeClass {
    match token.chars().next() {
        Some(c) if matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U') => {
            PhonemeClass::Vowel
        }
        _ => PhonemeClass::Consonant,
    }
}

/// Strip the trailing stress digit from a phoneme token, if present.
///
/// `"AH0"` becomes `"AH"`; consonant tokens pass through unchanged.
pub fn strip_stress(token: &str) -> &str {
    token.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// An ordered, non-empty sequence of phoneme tokens for one way of saying a
/// word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    phonemes: Vec<String>,
}

impl Pronunciation {
    /// Create a pronunciation from phoneme tokens.
    pub fn new(phonemes: Vec<String>) -> Self {
        Pronunciation { phonemes }
    }

    /// The phoneme tokens, in order, stress digits intact.
    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    /// The phoneme tokens with stress digits removed.
    pub fn stress_stripped(&self) -> Vec<String> {
        self.phonemes
            .iter()
            .map(|p| strip_stress(p).to_string())
            .collect()
    }

    /// Number of vowel-class tokens, i.e. the syllable count.
    pub fn syllable_count(&self) -> usize {
        self.phonemes
            .iter()
            .filter(|p| classify(p) == PhonemeClass::Vowel)
            .count()
    }

    /// Number of phoneme tokens.
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// Whether the pronunciation has no tokens.
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }
}

impl From<Vec<String>> for Pronunciation {
    fn from(phonemes: Vec<String>) -> Self {
        Pronunciation::new(phonemes)
    }
}

impl From<&[&str]> for Pronunciation {
    fn from(phonemes: &[&str]) -> Self {
        Pronunciation::new(phonemes.iter().map(|p| p.to_string()).collect())
    }
}
