//! Czech syllabification
//!
//! Maps one word token to its syllables. The segmenter is a best-effort
//! linguistic heuristic, not a parser: it is total over any input and
//! degrades to returning the whole word as one syllable.
//!
//! Dispatch is two-branch: an exact-match special-case table, else the
//! nucleus-based rule engine. A syllable nucleus is a vowel, or a syllabic
//! consonant (r, l) sitting between non-vowels; the boundary between two
//! nuclei is placed from the consonant cluster separating them.

use crate::rules::{fold, SyllableRules};
use smallvec::SmallVec;

/// Nucleus positions within a word stem; words rarely carry more than eight
type NucleusBuf = SmallVec<[usize; 8]>;

/// Split a word token into syllables.
///
/// The concatenation of the returned syllables always reproduces the input
/// exactly, including any trailing punctuation, which is attached to the
/// final syllable.
pub fn syllabify(word: &str, rules: &SyllableRules) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return vec![word.to_string()];
    }

    let stem_len = stem_length(&chars, rules);
    let (stem, punctuation) = chars.split_at(stem_len);
    if stem.is_empty() {
        return vec![word.to_string()];
    }

    let mut syllables = match special_case_split(stem, rules) {
        Some(syllables) => syllables,
        None => rule_split(stem, rules),
    };

    if !punctuation.is_empty() {
        if let Some(last) = syllables.last_mut() {
            last.extend(punctuation.iter());
        }
    }

    syllables
}

/// Length of the word stem once the trailing punctuation run is stripped
fn stem_length(chars: &[char], rules: &SyllableRules) -> usize {
    let mut len = chars.len();
    while len > 0 && rules.is_word_punctuation(chars[len - 1]) {
        len -= 1;
    }
    len
}

/// Exact-match branch: the stored entry contributes the boundary positions,
/// the original stem contributes the characters, so casing survives and the
/// round-trip invariant holds. A stale entry whose syllables no longer sum
/// to the stem length falls through to the rule engine.
fn special_case_split(stem: &[char], rules: &SyllableRules) -> Option<Vec<String>> {
    let lowered: String = stem.iter().flat_map(|c| c.to_lowercase()).collect();
    let stored = rules.special_case(&lowered)?;

    let total: usize = stored.iter().map(|s| s.chars().count()).sum();
    if total != stem.len() {
        return None;
    }

    let mut syllables = Vec::with_capacity(stored.len());
    let mut start = 0;
    for part in stored {
        let len = part.chars().count();
        syllables.push(stem[start..start + len].iter().collect());
        start += len;
    }
    Some(syllables)
}

/// Rule-engine branch: nucleus detection followed by boundary placement
fn rule_split(stem: &[char], rules: &SyllableRules) -> Vec<String> {
    let nuclei = find_nuclei(stem, rules);
    if nuclei.len() <= 1 {
        return vec![stem.iter().collect()];
    }

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut start = 0;
    for pair in nuclei.windows(2) {
        let cut = boundary_after(stem, pair[0], pair[1], rules);
        syllables.push(stem[start..cut].iter().collect());
        start = cut;
    }
    syllables.push(stem[start..].iter().collect());
    syllables
}

/// Scan the stem for syllable nuclei
fn find_nuclei(stem: &[char], rules: &SyllableRules) -> NucleusBuf {
    let mut nuclei = NucleusBuf::new();
    for (i, &ch) in stem.iter().enumerate() {
        if rules.is_vowel(ch) {
            nuclei.push(i);
        } else if rules.is_syllabic_consonant(ch) {
            let prev_is_vowel = i > 0 && rules.is_vowel(stem[i - 1]);
            let next_is_vowel = i + 1 < stem.len() && rules.is_vowel(stem[i + 1]);
            if !prev_is_vowel && !next_is_vowel {
                nuclei.push(i);
            }
        }
    }
    nuclei
}

/// Place the boundary between two adjacent nuclei.
///
/// Returns the index the following syllable starts at, derived from the
/// consonant cluster strictly between the nuclei:
/// - 0 or 1 consonants move to the next onset;
/// - a two-consonant obstruent+sonant cluster (or obstruent+`v`, or a
///   configured onset exception) moves wholesale, otherwise it is split
///   after its first consonant;
/// - of a longer cluster, the first consonant stays and the rest moves.
fn boundary_after(stem: &[char], nucleus: usize, next: usize, rules: &SyllableRules) -> usize {
    match next - nucleus - 1 {
        0 | 1 => nucleus + 1,
        2 => {
            let first = stem[nucleus + 1];
            let second = stem[nucleus + 2];
            if rules.is_onset_exception(first, second) {
                nucleus + 1
            } else if rules.is_obstruent(first)
                && (fold(second) == 'v' || rules.is_sonant(second))
            {
                nucleus + 1
            } else {
                nucleus + 2
            }
        }
        _ => nucleus + 2,
    }
}
