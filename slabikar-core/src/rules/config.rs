//! Rule profile schema and validation
//!
//! This module defines the TOML schema for a syllabification rule profile.
//! The character classes, cluster exceptions and the special-case word table
//! are adjustable policy, not hard-coded branches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root rule profile configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Profile metadata
    pub metadata: Metadata,
    /// Sentence splitting configuration
    pub sentences: Sentences,
    /// Word-level punctuation configuration
    pub words: Words,
    /// Syllable nucleus configuration
    pub nuclei: Nuclei,
    /// Consonant cluster configuration
    pub clusters: Clusters,
    /// Fixed word-to-syllables table overriding the rule engine
    #[serde(default)]
    pub special_cases: HashMap<String, Vec<String>>,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code, e.g. "cs"
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// Sentence splitting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    /// Sentence terminator characters
    pub terminators: Vec<char>,
}

/// Word-level punctuation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Words {
    /// Characters stripped from the end of a word before syllabification
    /// and reattached to the final syllable
    pub punctuation: Vec<char>,
}

/// Syllable nucleus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nuclei {
    /// Vowel characters (lowercase)
    pub vowels: Vec<char>,
    /// Consonants that form a nucleus between non-vowels (lowercase)
    #[serde(default)]
    pub syllabic_consonants: Vec<char>,
}

/// Consonant cluster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clusters {
    /// Obstruent consonants; one- or two-character entries (digraphs)
    pub obstruents: Vec<String>,
    /// Two-consonant clusters that always move to the next syllable's onset
    #[serde(default)]
    pub onset_exceptions: Vec<String>,
}

impl RulesConfig {
    /// Validate the profile
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code is required".to_string());
        }

        if self.sentences.terminators.is_empty() {
            return Err("No sentence terminator characters defined".to_string());
        }

        if self.nuclei.vowels.is_empty() {
            return Err("No vowel characters defined".to_string());
        }

        for entry in &self.clusters.obstruents {
            let len = entry.chars().count();
            if len == 0 || len > 2 {
                return Err(format!(
                    "Obstruent '{entry}' must be one character or a two-character digraph"
                ));
            }
        }

        for cluster in &self.clusters.onset_exceptions {
            if cluster.chars().count() != 2 {
                return Err(format!(
                    "Onset exception '{cluster}' must be exactly two characters"
                ));
            }
        }

        for (word, syllables) in &self.special_cases {
            if syllables.is_empty() {
                return Err(format!("Special case '{word}' has no syllables"));
            }
            let joined: String = syllables.concat();
            if &joined != word {
                return Err(format!(
                    "Special case '{word}' does not match its syllables '{joined}'"
                ));
            }
        }

        Ok(())
    }
}
