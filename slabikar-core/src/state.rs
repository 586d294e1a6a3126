//! Reader state
//!
//! The source text, reading mode and voice settings live in one explicit
//! state container that is passed around, not in ambient globals. The
//! segment list is a derived view: `segments` recomputes it from the
//! current text, never caching or mutating in place.

use crate::rules::SyllableRules;
use crate::segment::{assemble, ReadingMode, TextSegment};
use serde::{Deserialize, Serialize};

/// Read-only handle to an externally owned synthesis voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceHandle(String);

impl VoiceHandle {
    /// Wrap an external voice identifier
    pub fn new<S: Into<String>>(id: S) -> Self {
        VoiceHandle(id.into())
    }

    /// The external identifier
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Speech synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Speaking rate multiplier (1.0 = normal)
    pub rate: f32,
    /// Pitch multiplier (1.0 = normal)
    pub pitch: f32,
    /// Selected synthesis voice, if any
    pub voice: Option<VoiceHandle>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            voice: None,
        }
    }
}

/// State container for a reading-practice session
#[derive(Debug, Clone, Default)]
pub struct ReaderState {
    text: String,
    mode: ReadingMode,
    voice: VoiceSettings,
}

impl ReaderState {
    /// Create an empty state with default mode and voice settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given source text
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Current source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the source text; the derived segments change accordingly
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Current reading mode
    pub fn mode(&self) -> ReadingMode {
        self.mode
    }

    /// Select the reading granularity
    pub fn set_mode(&mut self, mode: ReadingMode) {
        self.mode = mode;
    }

    /// Current voice settings
    pub fn voice(&self) -> &VoiceSettings {
        &self.voice
    }

    /// Mutable access to the voice settings
    pub fn voice_mut(&mut self) -> &mut VoiceSettings {
        &mut self.voice
    }

    /// Derive the segment list for the current text and mode.
    ///
    /// Recomputed wholesale on each call; cost is proportional to the text
    /// length, so no incremental caching is kept.
    pub fn segments(&self, rules: &SyllableRules) -> Vec<TextSegment> {
        assemble(&self.text, rules, self.mode)
    }
}
