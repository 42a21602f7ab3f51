//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CadenzaArgs, OutputFormat};
use crate::error::Result;

/// Human-readable rendering for a command result.
pub trait HumanFormat {
    /// Format the result as text for terminal output.
    fn human(&self) -> String;
}

/// Print a command result in the format the CLI was asked for.
pub fn output_result<T: Serialize + HumanFormat>(data: &T, cli_args: &CadenzaArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            println!("{}", data.human());
        }
    }

    Ok(())
}

/// Result structure for pronunciation lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PronounceResult {
    pub word: String,
    /// One phoneme sequence per pronunciation; `None` for unknown words.
    pub pronunciations: Option<Vec<Vec<String>>>,
}

impl HumanFormat for PronounceResult {
    fn human(&self) -> String {
        match &self.pronunciations {
            Some(prons) => prons
                .iter()
                .map(|p| format!("{}  {}", self.word, p.join(" ")))
                .collect::<Vec<_>>()
                .join("\n"),
            None => format!("{}: no dictionary entry", self.word),
        }
    }
}

/// Result structure for syllable counting.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllablesResult {
    pub word: String,
    pub syllables: Option<usize>,
}

impl HumanFormat for SyllablesResult {
    fn human(&self) -> String {
        match self.syllables {
            Some(n) => format!("{}: {} syllable(s)", self.word, n),
            None => format!("{}: no dictionary entry", self.word),
        }
    }
}

/// Result structure for rhyme and alliteration scans.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResults {
    pub word: String,
    pub matches: Vec<String>,
    /// Total matches before any `--limit` truncation.
    pub total: usize,
}

impl HumanFormat for ScanResults {
    fn human(&self) -> String {
        if self.matches.is_empty() {
            return format!("{}: no matches", self.word);
        }

        let mut lines = vec![format!("{} ({} match(es)):", self.word, self.total)];
        for m in &self.matches {
            lines.push(format!("  {m}"));
        }
        lines.join("\n")
    }
}

/// Result structure for pairwise rhyme checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word1: String,
    pub word2: String,
    pub rhymes: bool,
    pub fuzz: usize,
    pub last_group: bool,
}

impl HumanFormat for CheckResult {
    fn human(&self) -> String {
        let verdict = if self.rhymes { "rhyme" } else { "do not rhyme" };
        format!("{} and {} {}", self.word1, self.word2, verdict)
    }
}

/// Result structure for batch rhyme finding.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairsResults {
    pub pairs: Vec<(String, String)>,
}

impl HumanFormat for PairsResults {
    fn human(&self) -> String {
        if self.pairs.is_empty() {
            return "no rhyming pairs".to_string();
        }

        self.pairs
            .iter()
            .map(|(a, b)| format!("{a} / {b}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronounce_result_human() {
        let result = PronounceResult {
            word: "READ".to_string(),
            pronunciations: Some(vec![
                vec!["R".to_string(), "IY1".to_string(), "D".to_string()],
                vec!["R".to_string(), "EH1".to_string(), "D".to_string()],
            ]),
        };

        assert_eq!(result.human(), "READ  R IY1 D\nREAD  R EH1 D");
    }

    #[test]
    fn test_unknown_word_human() {
        let result = PronounceResult {
            word: "ZZZ".to_string(),
            pronunciations: None,
        };

        assert_eq!(result.human(), "ZZZ: no dictionary entry");
    }

    #[test]
    fn test_scan_results_human_empty() {
        let result = ScanResults {
            word: "DOG".to_string(),
            matches: vec![],
            total: 0,
        };

        assert_eq!(result.human(), "DOG: no matches");
    }
}
