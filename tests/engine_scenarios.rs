//! Integration tests for dictionary loading and rhyme queries.

use std::io::Write;

use cadenza::error::Result;
use cadenza::{PronouncingDictionary, RhymeEngine};
use tempfile::NamedTempFile;

fn engine_from(source: &str) -> RhymeEngine {
    let dict = PronouncingDictionary::load(source.as_bytes()).unwrap();
    RhymeEngine::with_dictionary(dict)
}

#[test]
fn test_minimal_dictionary_scenario() {
    let engine = engine_from("CAT K AE1 T\nHAT HH AE1 T\nDOG D AO1 G\n");

    assert!(engine.does_rhyme("CAT", "HAT"));
    assert!(!engine.does_rhyme("CAT", "DOG"));

    let pairs = engine.find_rhymes(&["CAT", "HAT", "DOG"]);
    assert_eq!(pairs, [("CAT".to_string(), "HAT".to_string())]);
}

#[test]
fn test_load_from_file_with_headers_and_variants() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, ";;; test dictionary")?;
    writeln!(file)?;
    writeln!(file, "READ R IY1 D")?;
    writeln!(file, "READ(1) R EH1 D")?;
    writeln!(file, "RED R EH1 D")?;
    file.flush()?;

    let engine = RhymeEngine::from_file(file.path())?;

    // Both variants collapse into one entry with two pronunciations.
    let prons = engine.pronounce("READ").expect("READ should be present");
    assert_eq!(prons.len(), 2, "variants must collapse into one entry");
    assert_eq!(prons[0].phonemes(), ["R", "IY1", "D"]);
    assert_eq!(prons[1].phonemes(), ["R", "EH1", "D"]);

    assert!(engine.does_rhyme("READ", "RED"));
    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    let result = RhymeEngine::from_file("/nonexistent/cadenza-test-dictionary");
    assert!(result.is_err(), "unreadable source must fail the load");
}

#[test]
fn test_unknown_words_are_not_errors() -> Result<()> {
    let engine = RhymeEngine::new()?;

    assert!(engine.pronounce("ZZZNOTAWORD").is_none());
    assert_eq!(engine.syllables("ZZZNOTAWORD"), None);
    assert!(engine.rhyme("ZZZNOTAWORD").is_empty());
    assert!(engine.alliteration("ZZZNOTAWORD").is_empty());
    assert!(!engine.does_rhyme("CAT", "ZZZNOTAWORD"));
    Ok(())
}

#[test]
fn test_bundled_dictionary_basics() -> Result<()> {
    let engine = RhymeEngine::new()?;

    assert_eq!(engine.syllables("CAT"), Some(1));
    assert_eq!(engine.syllables("ABOUT"), Some(2));

    let rhymes = engine.rhyme("CAT");
    assert!(rhymes.contains(&"HAT".to_string()));
    assert!(rhymes.contains(&"BAT".to_string()));
    assert!(!rhymes.contains(&"DOG".to_string()));
    Ok(())
}

#[test]
fn test_rhyme_symmetry_over_bundled_dictionary() -> Result<()> {
    let engine = RhymeEngine::new()?;
    let words = ["CAT", "HAT", "DOG", "READ", "RED", "NIGHT", "LIGHT", "ABOUT"];

    for a in &words {
        for b in &words {
            assert_eq!(
                engine.does_rhyme(a, b),
                engine.does_rhyme(b, a),
                "asymmetric result for {a} / {b}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_sloppy_fuzz_zero_is_never_stricter_than_exact() -> Result<()> {
    let engine = RhymeEngine::new()?;
    let words = ["CAT", "HAT", "BAT", "READ", "RED", "NIGHT", "LIGHT", "SLEEP"];

    for a in &words {
        for b in &words {
            if engine.does_rhyme(a, b) {
                assert!(
                    engine.does_rhyme_sloppy(a, b, 0),
                    "fuzz 0 rejected exact rhyme {a} / {b}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_scans_exclude_query_word() -> Result<()> {
    let engine = RhymeEngine::new()?;

    for word in ["CAT", "READ", "NIGHT", "STREET"] {
        assert!(
            !engine.rhyme(word).contains(&word.to_string()),
            "rhyme({word}) contained the word itself"
        );
        assert!(
            !engine.alliteration(word).contains(&word.to_string()),
            "alliteration({word}) contained the word itself"
        );
    }
    Ok(())
}

#[test]
fn test_all_consonant_pronunciations_match_on_whole_list() {
    // Degenerate entries with no vowel-class token; the active region is
    // the whole phoneme list.
    let engine = engine_from("SHH SH\nSH SH\nPSST P S S T\n");

    assert!(engine.does_rhyme("SHH", "SH"));
    assert!(!engine.does_rhyme("SHH", "PSST"));
}

#[test]
fn test_engine_is_shareable_across_threads() -> Result<()> {
    let engine = RhymeEngine::new()?;
    let engine = &engine;

    std::thread::scope(|s| {
        let a = s.spawn(move || engine.rhyme("CAT"));
        let b = s.spawn(move || engine.does_rhyme("NIGHT", "LIGHT"));

        assert!(a.join().unwrap().contains(&"HAT".to_string()));
        assert!(b.join().unwrap());
    });
    Ok(())
}

#[test]
fn test_heteronyms_rhyme_through_either_pronunciation() -> Result<()> {
    let engine = RhymeEngine::new()?;

    // READ carries both R IY1 D and R EH1 D in the bundled excerpt;
    // WIND carries W IH1 N D and W AY1 N D.
    assert!(engine.does_rhyme("READ", "RED"));
    assert!(engine.does_rhyme("WIND", "FIND"));
    Ok(())
}
