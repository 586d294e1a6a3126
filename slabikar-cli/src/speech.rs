//! espeak-ng speech backend
//!
//! Implements the core speech seam by invoking the system espeak-ng
//! binary. Availability is probed up front; a missing binary downgrades
//! the reading session to print-only and never affects segmentation.

use log::debug;
use slabikar_core::{SpeechError, SpeechRequest, SpeechSynthesizer};
use std::io;
use std::process::{Command, Stdio};

const DEFAULT_PROGRAM: &str = "espeak-ng";
const DEFAULT_VOICE: &str = "cs";

/// espeak-ng default speaking rate, in words per minute
const BASE_WPM: f32 = 175.0;
/// espeak-ng default pitch on its 0-99 scale
const BASE_PITCH: f32 = 50.0;

/// Speech synthesizer shelling out to espeak-ng
pub struct EspeakSynthesizer {
    program: String,
}

impl EspeakSynthesizer {
    /// Create a synthesizer using the `espeak-ng` binary from PATH
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Create a synthesizer using a specific binary
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn voice_arg(&self, request: &SpeechRequest<'_>) -> String {
        match &request.settings.voice {
            Some(handle) => handle.id().to_string(),
            None => DEFAULT_VOICE.to_string(),
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn speak(&self, request: &SpeechRequest<'_>) -> Result<(), SpeechError> {
        let wpm = (BASE_WPM * request.settings.rate).round().max(10.0) as i32;
        let pitch = (BASE_PITCH * request.settings.pitch)
            .round()
            .clamp(0.0, 99.0) as i32;
        let voice = self.voice_arg(request);

        debug!(
            "speaking {:?} via {} (voice {}, {} wpm, pitch {})",
            request.text, self.program, voice, wpm, pitch
        );

        let status = Command::new(&self.program)
            .arg("-v")
            .arg(&voice)
            .arg("-s")
            .arg(wpm.to_string())
            .arg("-p")
            .arg(pitch.to_string())
            .arg(request.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(SpeechError::Failed(format!(
                "{} exited with {status}",
                self.program
            ))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SpeechError::Unavailable {
                name: self.program.clone(),
            }),
            Err(e) => Err(SpeechError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slabikar_core::VoiceSettings;

    #[test]
    fn missing_binary_is_unavailable() {
        let synth = EspeakSynthesizer::with_program("slabikar-no-such-binary");
        assert!(!synth.is_available());

        let settings = VoiceSettings::default();
        let request = SpeechRequest {
            text: "Jde pes.",
            settings: &settings,
        };
        assert!(matches!(
            synth.speak(&request),
            Err(SpeechError::Unavailable { .. })
        ));
    }

    #[test]
    fn voice_handle_overrides_default_voice() {
        let synth = EspeakSynthesizer::new();
        let mut settings = VoiceSettings::default();
        settings.voice = Some(slabikar_core::VoiceHandle::new("cs+f3"));
        let request = SpeechRequest {
            text: "Jde",
            settings: &settings,
        };
        assert_eq!(synth.voice_arg(&request), "cs+f3");
    }
}
