//! CLI command implementations

use crate::error::CliError;
use anyhow::Result;
use clap::Subcommand;
use slabikar_core::{ProcessorConfig, ReadingMode, SyllableProcessor};
use std::path::Path;

pub mod generate_config;
pub mod process;
pub mod speak;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into syllables, words or sentences
    Process(process::ProcessArgs),

    /// Read text aloud unit by unit via the system speech synthesizer
    Speak(speak::SpeakArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a rule profile template for customization
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate an external rule profile
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Speak(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available reading modes
    Modes,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Modes => {
                for mode in ReadingMode::ALL {
                    println!("{mode}");
                }
            }
            ListCommands::Formats => {
                println!("text     - one segment per line, syllables joined with '-'");
                println!("json     - JSON array of segments with syllable breakdowns");
                println!("markdown - numbered sentence list with totals");
            }
        }
        Ok(())
    }
}

/// Reading granularity argument shared by process and speak
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Mode {
    /// Per-syllable reading practice
    Syllables,
    /// Whole words
    Words,
    /// Whole sentences
    Sentences,
}

impl From<Mode> for ReadingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Syllables => ReadingMode::Syllables,
            Mode::Words => ReadingMode::Words,
            Mode::Sentences => ReadingMode::Sentences,
        }
    }
}

/// Build a processor from an optional external rule profile
pub(crate) fn build_processor(
    rules: Option<&Path>,
    rules_code: Option<&str>,
    mode: ReadingMode,
) -> Result<SyllableProcessor> {
    let mut builder = ProcessorConfig::builder().mode(mode);
    if let Some(path) = rules {
        builder = builder.rules_file(path);
    }
    if let Some(code) = rules_code {
        builder = builder.code_override(code);
    }
    SyllableProcessor::with_config(builder.build())
        .map_err(|e| CliError::RulesError(e.to_string()).into())
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
