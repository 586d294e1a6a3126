//! Segment assembly
//!
//! Composes the sentence splitter, the word tokenizer and the syllabifier
//! into a list of per-sentence segments. Pure and deterministic; the
//! segment list is recomputed wholesale on every source-text change rather
//! than patched incrementally.

use crate::rules::SyllableRules;
use crate::sentence::split_sentences;
use crate::syllable::syllabify;
use crate::token::tokenize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity a segment is rendered and spoken at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    /// Per-syllable reading practice
    #[default]
    Syllables,
    /// Whole words
    Words,
    /// Whole sentences
    Sentences,
}

impl ReadingMode {
    /// All modes, in presentation order
    pub const ALL: [ReadingMode; 3] = [
        ReadingMode::Syllables,
        ReadingMode::Words,
        ReadingMode::Sentences,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingMode::Syllables => "syllables",
            ReadingMode::Words => "words",
            ReadingMode::Sentences => "sentences",
        }
    }
}

impl fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "syllables" => Ok(ReadingMode::Syllables),
            "words" => Ok(ReadingMode::Words),
            "sentences" => Ok(ReadingMode::Sentences),
            other => Err(format!("unknown reading mode: {other}")),
        }
    }
}

/// One sentence of the source text with its per-word syllable breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Trimmed sentence text including trailing punctuation
    pub text: String,
    /// Syllables of each word token, in order
    pub syllables: Vec<Vec<String>>,
    /// Granularity the segment was derived for
    pub kind: ReadingMode,
}

impl TextSegment {
    /// Word tokens recovered from the syllable breakdown.
    ///
    /// Joining a word's syllables reproduces the token exactly, so no
    /// second tokenization pass is needed.
    pub fn words(&self) -> Vec<String> {
        self.syllables.iter().map(|word| word.concat()).collect()
    }

    /// Number of word tokens in the segment
    pub fn word_count(&self) -> usize {
        self.syllables.len()
    }

    /// Number of syllables across all words in the segment
    pub fn syllable_count(&self) -> usize {
        self.syllables.iter().map(Vec::len).sum()
    }

    /// The units to highlight and speak at the segment's granularity
    pub fn units(&self) -> Vec<String> {
        match self.kind {
            ReadingMode::Syllables => self
                .syllables
                .iter()
                .flat_map(|word| word.iter().cloned())
                .collect(),
            ReadingMode::Words => self.words(),
            ReadingMode::Sentences => vec![self.text.clone()],
        }
    }
}

/// Assemble the source text into per-sentence segments at the given
/// granularity. Pure function of its inputs.
pub fn assemble(text: &str, rules: &SyllableRules, mode: ReadingMode) -> Vec<TextSegment> {
    split_sentences(text, rules)
        .into_iter()
        .map(|sentence| {
            let syllables = tokenize(&sentence)
                .into_iter()
                .map(|word| syllabify(word, rules))
                .collect();
            TextSegment {
                text: sentence,
                syllables,
                kind: mode,
            }
        })
        .collect()
}
