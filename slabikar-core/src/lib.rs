//! Czech syllable, word and sentence segmentation for reading practice
//!
//! The core of this crate is a deterministic, rule-based syllabifier: it
//! maps an arbitrary Czech word to its syllables using nucleus detection
//! (vowels and syllabic r/l) and consonant-cluster rules, with a
//! special-case table for words the heuristic mis-segments. Around it sit
//! a sentence splitter, a whitespace tokenizer and an assembler producing
//! per-sentence [`TextSegment`]s with per-word syllable breakdowns.
//!
//! The rule sets are data: the built-in Czech profile is embedded TOML and
//! external profiles can be loaded to adjust the policy. Segmentation is
//! pure, synchronous and total: any string input produces a result.
//!
//! ```
//! let syllables = slabikar_core::syllabify("maminka");
//! assert_eq!(syllables, ["ma", "min", "ka"]);
//!
//! let segments = slabikar_core::segment("Jde pes.");
//! assert_eq!(segments[0].text, "Jde pes.");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod input;
pub mod output;
pub mod processor;
pub mod rules;
pub mod segment;
pub mod sentence;
pub mod speech;
pub mod state;
pub mod syllable;
pub mod token;

pub use error::CoreError;
pub use input::Input;
pub use output::{Metadata, Output};
pub use processor::{ProcessorConfig, ProcessorConfigBuilder, SyllableProcessor};
pub use rules::SyllableRules;
pub use segment::{ReadingMode, TextSegment};
pub use speech::{NullSynthesizer, SpeechError, SpeechRequest, SpeechSynthesizer};
pub use state::{ReaderState, VoiceHandle, VoiceSettings};

/// Split one word into syllables with the built-in Czech profile.
///
/// Total function: never fails, degrades to the whole word as one
/// syllable. Concatenating the result reproduces the input exactly.
pub fn syllabify(word: &str) -> Vec<String> {
    syllable::syllabify(word, &rules::czech())
}

/// Segment source text into per-sentence segments with the built-in Czech
/// profile at the default granularity.
///
/// Total function: the empty string yields an empty segment list.
pub fn segment(text: &str) -> Vec<TextSegment> {
    segment::assemble(text, &rules::czech(), ReadingMode::default())
}
