//! Output formatting module

use anyhow::Result;
use slabikar_core::{ReadingMode, TextSegment};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single segment
    fn format_segment(&mut self, segment: &TextSegment) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Render a segment as one line at its granularity; syllables within a
/// word are joined with `-` so the reading units stay visible
pub fn render_segment(segment: &TextSegment) -> String {
    match segment.kind {
        ReadingMode::Syllables => segment
            .syllables
            .iter()
            .map(|word| word.join("-"))
            .collect::<Vec<_>>()
            .join(" "),
        ReadingMode::Words => segment.words().join(" "),
        ReadingMode::Sentences => segment.text.clone(),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(mode: ReadingMode) -> TextSegment {
        TextSegment {
            text: "Jde pes.".to_string(),
            syllables: vec![
                vec!["Jde".to_string()],
                vec!["pes.".to_string()],
            ],
            kind: mode,
        }
    }

    #[test]
    fn renders_each_granularity() {
        let seg = TextSegment {
            text: "Maminka mele.".to_string(),
            syllables: vec![
                vec!["Ma".to_string(), "min".to_string(), "ka".to_string()],
                vec!["me".to_string(), "le.".to_string()],
            ],
            kind: ReadingMode::Syllables,
        };
        assert_eq!(render_segment(&seg), "Ma-min-ka me-le.");

        assert_eq!(render_segment(&sample(ReadingMode::Words)), "Jde pes.");
        assert_eq!(render_segment(&sample(ReadingMode::Sentences)), "Jde pes.");
    }
}
