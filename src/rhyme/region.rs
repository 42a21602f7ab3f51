//! Phonetic region extraction.
//!
//! Each extractor selects the subsequence of a pronunciation that acts as a
//! matching key for one query family, and returns it space-joined. Two words
//! stand in the corresponding relation when their extracted regions are
//! equal. Extractors are pure; whether stress digits participate in a
//! comparison is decided by the caller, which strips them before extraction
//! when it wants stress-insensitive matching.

use crate::phoneme::{PhonemeClass, classify};

/// The active rhyming region: everything from the first vowel-class token to
/// the end of the pronunciation.
///
/// A pronunciation with no vowel-class token at all yields the whole-list
/// join.
///
/// # Examples
///
/// ```
/// use cadenza::rhyme::region::active;
///
/// let cat: Vec<String> = ["K", "AE1", "T"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(active(&cat), "AE1 T");
/// ```
pub fn active(ws: &[String]) -> String {
    ws[active_cut(ws)..].join(" ")
}

/// The widened rhyming region: `active` with the cut shifted earlier by up to
/// `fuzz` tokens, admitting near-rhymes that share trailing consonants before
/// the vowel.
///
/// The shift is capped at `len - cut` and the cut saturates at the start of
/// the pronunciation. `fuzz = 0` is identical to [`active`].
pub fn active_sloppy(ws: &[String], fuzz: usize) -> String {
    let cut = active_cut(ws);
    let cut = cut.saturating_sub(fuzz.min(ws.len() - cut));
    ws[cut..].join(" ")
}

/// The last phonetic group: the trailing run of same-class tokens plus the
/// opposite-class token just before it (the syllable nucleus + coda, or the
/// coda alone).
///
/// This is a tighter rhyme unit than [`active`]. A pronunciation whose
/// tokens are all one class yields the whole-list join.
pub fn last_group(ws: &[String]) -> String {
    let Some(last) = ws.last() else {
        return String::new();
    };

    let class = classify(last);
    let mut start = ws.len() - 1;
    while start > 0 && classify(&ws[start - 1]) == class {
        start -= 1;
    }

    // The opposite-class transition token starts the slice when present.
    ws[start.saturating_sub(1)..].join(" ")
}

/// The alliteration key: the initial consonant cluster plus everything up to
/// and including the last vowel-class token.
///
/// Equivalently, the pronunciation with its trailing consonant run dropped.
/// A pronunciation with no vowel-class token keeps only its first token.
pub fn first_slice(ws: &[String]) -> String {
    if ws.is_empty() {
        return String::new();
    }

    let stop = ws
        .iter()
        .rposition(|w| classify(w) == PhonemeClass::Vowel)
        .unwrap_or(0);

    ws[..=stop].join(" ")
}

/// Index of the first vowel-class token, or 0 when there is none.
fn active_cut(ws: &[String]) -> usize {
    ws.iter()
        .position(|w| classify(w) == PhonemeClass::Vowel)
        .unwrap_or(0)
}
