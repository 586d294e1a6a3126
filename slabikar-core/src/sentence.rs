//! Sentence splitting
//!
//! Divides raw text into sentence units. A run of terminator characters
//! belongs to the sentence it terminates, so "?!" never opens an empty
//! sentence; text without terminal punctuation is a single sentence.

use crate::rules::SyllableRules;

/// Split raw text into trimmed sentence strings.
///
/// Every character of the input lands in exactly one sentence (modulo the
/// leading/trailing whitespace trimmed from each); whitespace-only
/// fragments are discarded.
pub fn split_sentences(text: &str, rules: &SyllableRules) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut iter = text.char_indices().peekable();
    while let Some((idx, ch)) = iter.next() {
        if rules.is_terminator(ch) {
            let run_continues = iter
                .peek()
                .is_some_and(|&(_, next)| rules.is_terminator(next));
            if !run_continues {
                let end = idx + ch.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
