//! Process command implementation

use super::{build_processor, init_logging, Mode};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); use "-" for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reading granularity
    #[arg(short, long, value_enum, default_value = "syllables")]
    pub mode: Mode,

    /// External rule profile (TOML) instead of the built-in Czech one
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Language code override for the external rule profile
    #[arg(long, value_name = "CODE", requires = "rules")]
    pub rules_code: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One segment per line, syllables joined with '-'
    Text,
    /// JSON array of segments with syllable breakdowns
    Json,
    /// Markdown numbered list with totals
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {self:?}");

        let processor = build_processor(
            self.rules.as_deref(),
            self.rules_code.as_deref(),
            self.mode.into(),
        )?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        if self.reads_stdin() {
            let text = FileReader::read_stdin()?;
            self.process_one(&processor, &text, &mut *formatter)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for file in &files {
                let text = FileReader::read_text(file)?;
                self.process_one(&processor, &text, &mut *formatter)?;
                progress.file_completed(&file.display().to_string());
            }
            progress.finish();
        }

        formatter.finish()?;
        Ok(())
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == "-"
    }

    fn process_one(
        &self,
        processor: &slabikar_core::SyllableProcessor,
        text: &str,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let output = processor
            .process_text(text)
            .map_err(|e| anyhow::anyhow!("Segmentation failed: {e}"))?;

        log::info!(
            "{} sentences, {} words, {} syllables in {} ms",
            output.metadata.sentence_count,
            output.metadata.word_count,
            output.metadata.syllable_count,
            output.metadata.processing_time_ms
        );

        for segment in &output.segments {
            formatter.format_segment(segment)?;
        }
        Ok(())
    }
}
