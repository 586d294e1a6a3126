//! Segmentation processor and builder
//!
//! Entry point tying the rule profile, the segment assembler and the
//! input/output types together behind a stable API.

use crate::error::Result;
use crate::input::Input;
use crate::output::{Metadata, Output};
use crate::rules::{self, SyllableRules};
use crate::segment::{assemble, ReadingMode};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Built-in language code; ignored when `rules_file` is set
    pub language: String,
    /// External rule profile to load instead of a built-in one
    pub rules_file: Option<PathBuf>,
    /// Language code override for an external profile
    pub code_override: Option<String>,
    /// Granularity stamped on derived segments
    pub mode: ReadingMode,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            language: "cs".to_string(),
            rules_file: None,
            code_override: None,
            mode: ReadingMode::default(),
        }
    }
}

impl ProcessorConfig {
    /// Start building a configuration
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }
}

/// Builder for [`ProcessorConfig`]
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Set the built-in language code
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.language = language.into();
        self
    }

    /// Load rules from an external profile file
    pub fn rules_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.rules_file = Some(path.into());
        self
    }

    /// Override the language code of an external profile
    pub fn code_override<S: Into<String>>(mut self, code: S) -> Self {
        self.config.code_override = Some(code.into());
        self
    }

    /// Set the reading granularity
    pub fn mode(mut self, mode: ReadingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Finish building
    pub fn build(self) -> ProcessorConfig {
        self.config
    }
}

/// Main segmentation processor
#[derive(Debug)]
pub struct SyllableProcessor {
    rules: Arc<SyllableRules>,
    config: ProcessorConfig,
}

impl SyllableProcessor {
    /// Create a processor with the built-in Czech profile and defaults
    pub fn new() -> Self {
        Self {
            rules: rules::czech(),
            config: ProcessorConfig::default(),
        }
    }

    /// Create a processor for a built-in language code
    pub fn with_language(language: &str) -> Result<Self> {
        Self::with_config(ProcessorConfig {
            language: language.to_string(),
            ..ProcessorConfig::default()
        })
    }

    /// Create a processor from a full configuration
    pub fn with_config(config: ProcessorConfig) -> Result<Self> {
        let rules = match &config.rules_file {
            Some(path) => Arc::new(SyllableRules::from_file(
                path,
                config.code_override.as_deref(),
            )?),
            None => rules::get_rules(&config.language)?,
        };
        Ok(Self { rules, config })
    }

    /// The active rule profile
    pub fn rules(&self) -> &SyllableRules {
        &self.rules
    }

    /// The active configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Segment one input and gather statistics
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        let total_bytes = text.len();
        let total_chars = text.chars().count();

        let segments = assemble(&text, &self.rules, self.config.mode);

        let word_count = segments.iter().map(|s| s.word_count()).sum();
        let syllable_count = segments.iter().map(|s| s.syllable_count()).sum();
        let metadata = Metadata {
            total_bytes,
            total_chars,
            sentence_count: segments.len(),
            word_count,
            syllable_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output { segments, metadata })
    }

    /// Segment a text string directly
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }
}

impl Default for SyllableProcessor {
    fn default() -> Self {
        Self::new()
    }
}
