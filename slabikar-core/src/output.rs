//! Processing output with runtime statistics

use crate::segment::TextSegment;
use serde::{Deserialize, Serialize};

/// Statistics gathered while segmenting one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Number of sentences found
    pub sentence_count: usize,
    /// Number of word tokens found
    pub word_count: usize,
    /// Number of syllables found
    pub syllable_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete segmentation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Per-sentence segments
    pub segments: Vec<TextSegment>,
    /// Processing metadata
    pub metadata: Metadata,
}
