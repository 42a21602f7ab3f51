//! Pronunciation dictionary loading and lookup.
//!
//! The dictionary source is line-oriented CMU format: `WORD[(N)] PHONEME
//! PHONEME ...`. A line is a data line iff its first character is an ASCII
//! letter; everything else (`;;;` headers, blank lines) is skipped. The
//! `(N)` suffix marks an alternate pronunciation and is stripped from the
//! key, so all variants of a word collapse into one entry.
//!
//! A dictionary is built once by one of the `load*` constructors and exposes
//! no mutators afterward, which is what makes sharing `&PronouncingDictionary`
//! across threads safe.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::phoneme::Pronunciation;

lazy_static! {
    /// Alternate-pronunciation suffix on dictionary keys, e.g. `READ(1)`.
    static ref VARIANT_SUFFIX: Regex = Regex::new(r"\(\d+\)$").unwrap();
}

/// Bundled excerpt of the CMU pronouncing dictionary.
const DEFAULT_DICTIONARY: &str = include_str!("../data/cmudict.sample");

/// An immutable mapping from uppercase words to their pronunciations.
#[derive(Debug, Clone)]
pub struct PronouncingDictionary {
    /// Word table keyed by normalized (uppercase, variant-stripped) word.
    entries: AHashMap<String, Vec<Pronunciation>>,
    /// Keys in first-insertion order, for deterministic scans.
    order: Vec<String>,
}

impl PronouncingDictionary {
    /// Load a dictionary from any buffered reader.
    ///
    /// Malformed data lines (a word with no phonemes) are skipped; an
    /// unreadable source fails the whole load. Either a fully populated
    /// dictionary is returned or none at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadenza::dictionary::PronouncingDictionary;
    ///
    /// let source = "CAT K AE1 T\nHAT HH AE1 T\n";
    /// let dict = PronouncingDictionary::load(source.as_bytes()).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = PronouncingDictionary {
            entries: AHashMap::new(),
            order: Vec::new(),
        };

        for line in reader.lines() {
            let line = line?;
            dictionary.add_line(&line);
        }

        Ok(dictionary)
    }

    /// Load a dictionary from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    /// Load the bundled CMU dictionary excerpt.
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_DICTIONARY.as_bytes())
    }

    /// Parse one source line, appending a pronunciation if it is a data line.
    fn add_line(&mut self, line: &str) {
        if !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return;
        }

        let mut tokens = line.split_whitespace();
        let Some(raw_word) = tokens.next() else {
            return;
        };

        let phonemes: Vec<String> = tokens.map(|t| t.to_string()).collect();
        if phonemes.is_empty() {
            // Word with no pronunciation; tolerate and move on.
            return;
        }

        let word = VARIANT_SUFFIX.replace(raw_word, "").to_uppercase();
        let pronunciation = Pronunciation::new(phonemes);

        match self.entries.get_mut(&word) {
            Some(pronunciations) => pronunciations.push(pronunciation),
            None => {
                self.order.push(word.clone());
                self.entries.insert(word, vec![pronunciation]);
            }
        }
    }

    /// Look up all pronunciations of a word. Case-insensitive.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries
            .get(&word.to_uppercase())
            .map(|prons| prons.as_slice())
    }

    /// Check whether a word has an entry. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_uppercase())
    }

    /// Iterate over all words in first-insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|w| w.as_str())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(source: &str) -> PronouncingDictionary {
        PronouncingDictionary::load(source.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_basic_entries() {
        let dict = load_str("CAT K AE1 T\nDOG D AO1 G\n");

        assert_eq!(dict.len(), 2);
        let prons = dict.lookup("CAT").unwrap();
        assert_eq!(prons.len(), 1);
        assert_eq!(prons[0].phonemes(), ["K", "AE1", "T"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = load_str("CAT K AE1 T\n");

        assert!(dict.lookup("cat").is_some());
        assert!(dict.lookup("Cat").is_some());
        assert!(dict.contains("cAt"));
    }

    #[test]
    fn test_comment_and_blank_lines_skipped() {
        let source = ";;; CMU dictionary header\n\n'APOSTROPHE entry skipped\nCAT K AE1 T\n";
        let dict = load_str(source);

        assert_eq!(dict.len(), 1);
        assert!(dict.contains("CAT"));
    }

    #[test]
    fn test_variant_entries_collapse() {
        let dict = load_str("READ R IY1 D\nREAD(1) R EH1 D\n");

        assert_eq!(dict.len(), 1);
        let prons = dict.lookup("READ").unwrap();
        assert_eq!(prons.len(), 2);
        assert_eq!(prons[0].phonemes(), ["R", "IY1", "D"]);
        assert_eq!(prons[1].phonemes(), ["R", "EH1", "D"]);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let dict = load_str("EMPTYWORD\nCAT K AE1 T\n");

        assert_eq!(dict.len(), 1);
        assert!(!dict.contains("EMPTYWORD"));
    }

    #[test]
    fn test_word_order_is_insertion_order() {
        let dict = load_str("CAT K AE1 T\nHAT HH AE1 T\nDOG D AO1 G\nHAT(1) HH AE2 T\n");

        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, ["CAT", "HAT", "DOG"]);
    }

    #[test]
    fn test_unknown_word_lookup() {
        let dict = load_str("CAT K AE1 T\n");

        assert!(dict.lookup("ZZZNOTAWORD").is_none());
    }

    #[test]
    fn test_load_default() {
        let dict = PronouncingDictionary::load_default().unwrap();

        assert!(!dict.is_empty());
        assert!(dict.contains("THE"));
    }
}
