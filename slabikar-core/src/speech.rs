//! Speech synthesis seam
//!
//! Speaking is delegated to an external collaborator behind the
//! [`SpeechSynthesizer`] trait. Segmentation never depends on a
//! synthesizer being present: an unavailable engine is reported to the
//! user, not raised as a segmentation failure.

use crate::state::VoiceSettings;
use thiserror::Error;

/// One utterance request
#[derive(Debug, Clone, Copy)]
pub struct SpeechRequest<'a> {
    /// Text of the unit to speak
    pub text: &'a str,
    /// Rate, pitch and voice selection
    pub settings: &'a VoiceSettings,
}

/// Errors from the speech collaborator
#[derive(Error, Debug)]
pub enum SpeechError {
    /// The synthesizer is not present in this environment
    #[error("speech synthesizer '{name}' is not available")]
    Unavailable {
        /// Name of the missing synthesizer
        name: String,
    },

    /// The synthesizer ran but reported failure
    #[error("speech synthesis failed: {0}")]
    Failed(String),

    /// I/O error talking to the synthesizer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// External speech synthesis collaborator
pub trait SpeechSynthesizer {
    /// Name of the underlying engine, for user-facing reporting
    fn name(&self) -> &str;

    /// Whether the engine can be reached in this environment
    fn is_available(&self) -> bool;

    /// Speak one unit of text. Overlap and queuing semantics are the
    /// engine's own; the core does not serialize requests.
    fn speak(&self, request: &SpeechRequest<'_>) -> Result<(), SpeechError>;
}

/// Synthesizer for environments with no speech capability; always reports
/// unavailable
#[derive(Debug, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn name(&self) -> &str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _request: &SpeechRequest<'_>) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable {
            name: self.name().to_string(),
        })
    }
}
