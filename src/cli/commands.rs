//! Command implementations for the Cadenza CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::rhyme::engine::RhymeEngine;

/// Execute a CLI command.
pub fn execute_command(args: CadenzaArgs) -> Result<()> {
    let engine = load_engine(&args)?;

    match &args.command {
        Command::Pronounce(word_args) => pronounce(&engine, word_args.clone(), &args),
        Command::Syllables(word_args) => syllables(&engine, word_args.clone(), &args),
        Command::Rhyme(scan_args) => rhyme(&engine, scan_args.clone(), &args),
        Command::Alliteration(scan_args) => alliteration(&engine, scan_args.clone(), &args),
        Command::Check(check_args) => check(&engine, check_args.clone(), &args),
        Command::Pairs(pairs_args) => pairs(&engine, pairs_args.clone(), &args),
    }
}

/// Load the dictionary the engine will answer from.
fn load_engine(cli_args: &CadenzaArgs) -> Result<RhymeEngine> {
    match &cli_args.dict_file {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading dictionary from: {}", path.display());
            }
            RhymeEngine::from_file(path)
        }
        None => RhymeEngine::new(),
    }
}

/// Show the pronunciations of a word.
fn pronounce(engine: &RhymeEngine, args: WordArgs, cli_args: &CadenzaArgs) -> Result<()> {
    let pronunciations = engine.pronounce(&args.word).map(|prons| {
        prons
            .iter()
            .map(|p| p.phonemes().to_vec())
            .collect::<Vec<_>>()
    });

    output_result(
        &PronounceResult {
            word: args.word,
            pronunciations,
        },
        cli_args,
    )
}

/// Count the syllables of a word.
fn syllables(engine: &RhymeEngine, args: WordArgs, cli_args: &CadenzaArgs) -> Result<()> {
    output_result(
        &SyllablesResult {
            syllables: engine.syllables(&args.word),
            word: args.word,
        },
        cli_args,
    )
}

/// Scan the dictionary for rhymes of a word.
fn rhyme(engine: &RhymeEngine, args: ScanArgs, cli_args: &CadenzaArgs) -> Result<()> {
    let matches = engine.rhyme(&args.word);
    output_scan(args, matches, cli_args)
}

/// Scan the dictionary for alliterations of a word.
fn alliteration(engine: &RhymeEngine, args: ScanArgs, cli_args: &CadenzaArgs) -> Result<()> {
    let matches = engine.alliteration(&args.word);
    output_scan(args, matches, cli_args)
}

fn output_scan(args: ScanArgs, mut matches: Vec<String>, cli_args: &CadenzaArgs) -> Result<()> {
    let total = matches.len();
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    output_result(
        &ScanResults {
            word: args.word,
            matches,
            total,
        },
        cli_args,
    )
}

/// Check whether two words rhyme.
fn check(engine: &RhymeEngine, args: CheckArgs, cli_args: &CadenzaArgs) -> Result<()> {
    let rhymes = if args.last_group {
        engine.does_last_group_rhyme(&args.word1, &args.word2)
    } else if args.fuzz > 0 {
        engine.does_rhyme_sloppy(&args.word1, &args.word2, args.fuzz)
    } else {
        engine.does_rhyme(&args.word1, &args.word2)
    };

    output_result(
        &CheckResult {
            word1: args.word1,
            word2: args.word2,
            rhymes,
            fuzz: args.fuzz,
            last_group: args.last_group,
        },
        cli_args,
    )
}

/// Find all rhyming pairs among the given words.
fn pairs(engine: &RhymeEngine, args: PairsArgs, cli_args: &CadenzaArgs) -> Result<()> {
    output_result(
        &PairsResults {
            pairs: engine.find_rhymes(&args.words),
        },
        cli_args,
    )
}
