//! Markdown output formatter

use super::{render_segment, OutputFormatter};
use anyhow::Result;
use slabikar_core::TextSegment;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list with a totals
/// footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    word_count: usize,
    syllable_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            word_count: 0,
            syllable_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, segment: &TextSegment) -> Result<()> {
        self.sentence_count += 1;
        self.word_count += segment.word_count();
        self.syllable_count += segment.syllable_count();
        writeln!(
            self.writer,
            "{}. {}",
            self.sentence_count,
            render_segment(segment)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, words: {}, syllables: {}*",
            self.sentence_count, self.word_count, self.syllable_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
