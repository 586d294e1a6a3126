//! Integration tests for the public segmentation API

use slabikar_core::{segment, syllabify, Input, ReadingMode, SyllableProcessor};

#[test]
fn syllabify_matches_documented_examples() {
    assert_eq!(syllabify("krtka"), ["krt", "ka"]);
    assert_eq!(syllabify("mrkev"), ["mr", "kev"]);
    assert_eq!(syllabify("domeček"), ["do", "me", "ček"]);
}

#[test]
fn segment_empty_text_is_empty() {
    assert!(segment("").is_empty());
}

#[test]
fn segment_jde_pes() {
    let segments = segment("Jde pes.");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "Jde pes.");
    assert_eq!(segments[0].syllables.len(), 2);
    assert_eq!(segments[0].syllables[0], ["Jde"]);
    assert_eq!(segments[0].syllables[1], ["pes."]);
}

#[test]
fn terminal_punctuation_never_opens_a_segment() {
    let segments = segment("Kde je pes?! U boudy. A dost!");
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["Kde je pes?!", "U boudy.", "A dost!"]);
}

#[test]
fn segment_is_idempotent() {
    let text = "Maminka mele maso. Táta čte noviny?! A děti spí.";
    assert_eq!(segment(text), segment(text));
}

#[test]
fn processor_reads_from_a_reader() {
    let processor = SyllableProcessor::new();
    let input = Input::from_reader(std::io::Cursor::new(b"Jde pes.".to_vec()));
    let output = processor.process(input).unwrap();
    assert_eq!(output.metadata.sentence_count, 1);
    assert_eq!(output.segments[0].kind, ReadingMode::Syllables);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Czech letters, digits and the strippable punctuation set
    const WORD_PATTERN: &str =
        "[aábcčdďeéěfghchiíjklmnňoópqrřsštťuúůvwxyýzžAÁBCČDĎEÉĚKLMNŇRŘSŠTŤZŽ0-9.,!?;:]{0,14}";

    proptest! {
        #[test]
        fn concatenation_reproduces_the_word(word in WORD_PATTERN) {
            prop_assert_eq!(syllabify(&word).concat(), word);
        }

        #[test]
        fn result_is_never_empty(word in WORD_PATTERN) {
            prop_assert!(!syllabify(&word).is_empty());
        }

        #[test]
        fn single_character_words_stay_whole(word in "[aákrzž]") {
            prop_assert_eq!(syllabify(&word), vec![word.clone()]);
        }

        #[test]
        fn sentences_account_for_every_word(text in "[aábcčdďeéěijklmnoprstuvyz ]{0,40}[.!?]?") {
            for seg in segment(&text) {
                let words: Vec<String> =
                    seg.text.split_whitespace().map(str::to_string).collect();
                prop_assert_eq!(seg.words(), words);
            }
        }
    }
}
