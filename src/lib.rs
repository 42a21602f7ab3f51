//! # Cadenza
//!
//! A phonetic rhyming dictionary library for Rust.
//!
//! ## Features
//!
//! - CMU-style pronunciation dictionary loading
//! - Exact, sloppy, and last-group rhyme detection
//! - Alliteration detection and syllable counting
//! - Immutable post-load store, safe to share across threads

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod phoneme;
pub mod rhyme;

pub use dictionary::PronouncingDictionary;
pub use rhyme::engine::RhymeEngine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
