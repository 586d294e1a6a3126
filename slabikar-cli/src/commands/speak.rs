//! Speak command implementation
//!
//! The CLI's version of reading practice: each unit is printed as it is
//! spoken. Without espeak-ng the units are still printed, so the command
//! works (silently) on machines with no speech capability.

use super::{build_processor, init_logging, Mode};
use crate::input::FileReader;
use crate::speech::EspeakSynthesizer;
use anyhow::{bail, Result};
use clap::Args;
use slabikar_core::{ReaderState, SpeechRequest, SpeechSynthesizer, VoiceHandle};
use std::path::{Path, PathBuf};

/// Arguments for the speak command
#[derive(Debug, Args)]
pub struct SpeakArgs {
    /// Text to read aloud
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file; use "-" for stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reading granularity
    #[arg(short, long, value_enum, default_value = "syllables")]
    pub mode: Mode,

    /// Speaking rate multiplier (1.0 = normal)
    #[arg(long, default_value_t = 1.0)]
    pub rate: f32,

    /// Pitch multiplier (1.0 = normal)
    #[arg(long, default_value_t = 1.0)]
    pub pitch: f32,

    /// Synthesis voice handle passed to the speech engine
    #[arg(long, value_name = "VOICE")]
    pub voice: Option<String>,

    /// External rule profile (TOML) instead of the built-in Czech one
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Print units without speaking
    #[arg(long)]
    pub no_audio: bool,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SpeakArgs {
    /// Execute the speak command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        if self.rate <= 0.0 {
            bail!("Speaking rate must be positive");
        }
        if self.pitch <= 0.0 {
            bail!("Pitch must be positive");
        }

        let text = self.source_text()?;
        let processor = build_processor(self.rules.as_deref(), None, self.mode.into())?;

        let mut state = ReaderState::with_text(text);
        state.set_mode(self.mode.into());
        state.voice_mut().rate = self.rate;
        state.voice_mut().pitch = self.pitch;
        state.voice_mut().voice = self.voice.clone().map(VoiceHandle::new);

        let synthesizer = EspeakSynthesizer::new();
        let speaking = !self.no_audio && synthesizer.is_available();
        if !self.no_audio && !speaking {
            log::warn!(
                "speech synthesizer '{}' not found; printing units without audio",
                synthesizer.name()
            );
        }

        for segment in state.segments(processor.rules()) {
            for unit in segment.units() {
                println!("{unit}");
                if speaking {
                    let request = SpeechRequest {
                        text: &unit,
                        settings: state.voice(),
                    };
                    if let Err(e) = synthesizer.speak(&request) {
                        log::warn!("speech failed: {e}");
                    }
                }
            }
        }

        Ok(())
    }

    fn source_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.input {
            Some(path) if path == Path::new("-") => FileReader::read_stdin(),
            Some(path) => FileReader::read_text(path),
            None => bail!("Either --text or --input is required"),
        }
    }
}
