//! The rhyme query engine.
//!
//! [`RhymeEngine`] owns a loaded [`PronouncingDictionary`] and answers every
//! phonetic-similarity query over it. All queries are pure reads; the engine
//! never mutates the dictionary, so a shared reference can serve concurrent
//! callers.
//!
//! Stress digits are stripped uniformly before every region comparison, so a
//! pair of words matches (or not) regardless of which query family the caller
//! picked. `pronounce` is the exception: it returns the raw tokens, stress
//! intact.

use ahash::AHashSet;

use crate::dictionary::PronouncingDictionary;
use crate::error::Result;
use crate::phoneme::Pronunciation;
use crate::rhyme::region;

/// Query engine over an immutable pronouncing dictionary.
///
/// # Examples
///
/// ```
/// use cadenza::PronouncingDictionary;
/// use cadenza::RhymeEngine;
///
/// let source = "CAT K AE1 T\nHAT HH AE1 T\nDOG D AO1 G\n";
/// let dict = PronouncingDictionary::load(source.as_bytes()).unwrap();
/// let engine = RhymeEngine::with_dictionary(dict);
///
/// assert!(engine.does_rhyme("CAT", "HAT"));
/// assert!(!engine.does_rhyme("CAT", "DOG"));
/// ```
pub struct RhymeEngine {
    dictionary: PronouncingDictionary,
}

impl RhymeEngine {
    /// Create an engine over the bundled dictionary excerpt.
    pub fn new() -> Result<Self> {
        Ok(RhymeEngine {
            dictionary: PronouncingDictionary::load_default()?,
        })
    }

    /// Create an engine over an already loaded dictionary.
    pub fn with_dictionary(dictionary: PronouncingDictionary) -> Self {
        RhymeEngine { dictionary }
    }

    /// Create an engine over a dictionary file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(RhymeEngine {
            dictionary: PronouncingDictionary::load_file(path)?,
        })
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &PronouncingDictionary {
        &self.dictionary
    }

    /// All pronunciations of a word, stress digits intact.
    pub fn pronounce(&self, word: &str) -> Option<&[Pronunciation]> {
        self.dictionary.lookup(word)
    }

    /// Syllable count of the word's first pronunciation, or `None` if the
    /// word is unknown.
    pub fn syllables(&self, word: &str) -> Option<usize> {
        self.dictionary
            .lookup(word)
            .and_then(|prons| prons.first())
            .map(|pron| pron.syllable_count())
    }

    /// Whether two words rhyme exactly, i.e. share an active rhyming region
    /// across any pair of their pronunciations.
    ///
    /// `false` when either word is unknown or both resolve to the same
    /// dictionary entry (a word does not rhyme with itself).
    pub fn does_rhyme(&self, word1: &str, word2: &str) -> bool {
        self.regions_intersect(word1, word2, region::active)
    }

    /// Whether two words rhyme on their last phonetic group, a tighter unit
    /// than the full active region.
    pub fn does_last_group_rhyme(&self, word1: &str, word2: &str) -> bool {
        self.regions_intersect(word1, word2, region::last_group)
    }

    /// Whether two words rhyme when the matched region is widened by up to
    /// `fuzz` tokens. `fuzz = 0` is exactly [`RhymeEngine::does_rhyme`].
    pub fn does_rhyme_sloppy(&self, word1: &str, word2: &str, fuzz: usize) -> bool {
        self.regions_intersect(word1, word2, |ws| region::active_sloppy(ws, fuzz))
    }

    /// Every other dictionary word that rhymes with `word`, in dictionary
    /// insertion order. Empty when the word is unknown.
    pub fn rhyme(&self, word: &str) -> Vec<String> {
        self.scan(word, region::active)
    }

    /// Every other dictionary word sharing `word`'s initial consonant
    /// cluster and first vowel, in dictionary insertion order.
    pub fn alliteration(&self, word: &str) -> Vec<String> {
        self.scan(word, region::first_slice)
    }

    /// All rhyming pairs among the given words: every unordered pair
    /// `(i, j)` with `i < j` for which [`RhymeEngine::does_rhyme`] holds,
    /// in `(i, j)` enumeration order.
    pub fn find_rhymes<S: AsRef<str>>(&self, words: &[S]) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (i, first) in words.iter().enumerate() {
            for second in &words[i + 1..] {
                if self.does_rhyme(first.as_ref(), second.as_ref()) {
                    pairs.push((first.as_ref().to_string(), second.as_ref().to_string()));
                }
            }
        }

        pairs
    }

    /// Region-set intersection test between two words' pronunciations.
    fn regions_intersect<F>(&self, word1: &str, word2: &str, extract: F) -> bool
    where
        F: Fn(&[String]) -> String,
    {
        let key1 = word1.to_uppercase();
        let key2 = word2.to_uppercase();

        // Same entry never rhymes with itself.
        if key1 == key2 {
            return false;
        }

        let (Some(prons1), Some(prons2)) =
            (self.dictionary.lookup(&key1), self.dictionary.lookup(&key2))
        else {
            return false;
        };

        let regions: AHashSet<String> = prons1
            .iter()
            .map(|p| extract(&p.stress_stripped()))
            .collect();

        prons2
            .iter()
            .any(|p| regions.contains(&extract(&p.stress_stripped())))
    }

    /// Full-table scan for words whose extracted region intersects the query
    /// word's region set. Linear in dictionary size, which is fine for an
    /// interactive tool over a lexicon-sized table.
    fn scan<F>(&self, word: &str, extract: F) -> Vec<String>
    where
        F: Fn(&[String]) -> String,
    {
        let key = word.to_uppercase();
        let Some(prons) = self.dictionary.lookup(&key) else {
            return Vec::new();
        };

        let regions: AHashSet<String> =
            prons.iter().map(|p| extract(&p.stress_stripped())).collect();

        self.dictionary
            .words()
            .filter(|candidate| *candidate != key)
            .filter(|candidate| {
                self.dictionary.lookup(candidate).is_some_and(|prons| {
                    prons
                        .iter()
                        .any(|p| regions.contains(&extract(&p.stress_stripped())))
                })
            })
            .map(|candidate| candidate.to_string())
            .collect()
    }
}
