use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Default value functions for serde
fn default_true() -> bool {
    true
}

/// Options handed to the citation parser — the knobs the external grammar
/// exposes. This system always requests the NAB canon with the apocrypha
/// included; only the punctuation strategy differs between canonical and
/// locale input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Recognize deuterocanonical books
    #[serde(default = "default_true")]
    pub include_apocrypha: bool,
    /// Canon/numbering convention (affects chapter/verse boundaries)
    #[serde(default)]
    pub versification: VersificationSystem,
    /// Canonical vs. locale punctuation (European uses "," for verses)
    #[serde(default)]
    pub punctuation: PunctuationStrategy,
    /// Granularity of the parser's canonical-form output
    #[serde(default)]
    pub osis_compaction: OsisCompactionStrategy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            include_apocrypha: true,
            versification: VersificationSystem::default(),
            punctuation: PunctuationStrategy::default(),
            osis_compaction: OsisCompactionStrategy::default(),
        }
    }
}

impl ParserConfig {
    /// Configuration for canonical interchange notation.
    pub fn canonical() -> Self {
        Self {
            include_apocrypha: true,
            versification: VersificationSystem::Nab,
            punctuation: PunctuationStrategy::Us,
            osis_compaction: OsisCompactionStrategy::Bcv,
        }
    }

    /// Configuration for locale citation text (European punctuation).
    pub fn locale() -> Self {
        Self {
            punctuation: PunctuationStrategy::Eu,
            ..Self::canonical()
        }
    }

    /// Load a parser configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// The canon/numbering convention requested from the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersificationSystem {
    #[default]
    Default,
    Kjv,
    /// New American Bible — the apocrypha-inclusive canon this system uses
    Nab,
    Vulgate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationStrategy {
    /// "," separates references, ":" separates chapter and verse
    #[default]
    Us,
    /// "." separates verses, "," separates chapter and verse
    Eu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsisCompactionStrategy {
    /// Whole books collapse to the book id
    B,
    /// Whole chapters collapse to book.chapter
    Bc,
    /// Always book.chapter.verse
    #[default]
    Bcv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_config_differs_from_canonical_only_in_punctuation() {
        let canonical = ParserConfig::canonical();
        let locale = ParserConfig::locale();
        assert_eq!(locale.punctuation, PunctuationStrategy::Eu);
        assert_eq!(
            ParserConfig {
                punctuation: PunctuationStrategy::Us,
                ..locale
            },
            canonical
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ParserConfig = serde_yaml::from_str("versification: nab").unwrap();
        assert!(config.include_apocrypha);
        assert_eq!(config.versification, VersificationSystem::Nab);
        assert_eq!(config.punctuation, PunctuationStrategy::Us);
        assert_eq!(config.osis_compaction, OsisCompactionStrategy::Bcv);
    }
}
