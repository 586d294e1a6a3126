//! Word tokenization
//!
//! Splits a trimmed sentence on whitespace runs. Tokens keep their original
//! casing, diacritics and attached punctuation.

/// Split a sentence into word tokens, discarding empty ones
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}
