//! Rhyme and alliteration detection over a pronouncing dictionary.
//!
//! This module contains the phonetic-region extractors that turn a
//! pronunciation into a matching key, and the query engine that compares
//! those keys across dictionary entries for rhyme detection, alliteration
//! detection, and batch rhyme finding.

pub mod engine;
pub mod region;
