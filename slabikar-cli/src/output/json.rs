//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use slabikar_core::TextSegment;
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array with their per-word
/// syllable breakdowns
pub struct JsonFormatter<W: Write> {
    writer: W,
    segments: Vec<TextSegment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segments: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &TextSegment) -> Result<()> {
        self.segments.push(segment.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
