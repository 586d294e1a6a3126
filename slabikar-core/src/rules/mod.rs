//! Syllabification rule profiles
//!
//! The character classes, cluster exceptions and the special-case word table
//! driving the segmenter are data, not code. The built-in Czech profile is
//! embedded TOML; external profiles can be loaded from disk to adjust the
//! policy without code changes.

pub mod config;

pub use config::RulesConfig;

use crate::error::{CoreError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Case-fold a single character for rule lookups
pub(crate) fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Runtime form of a syllabification rule profile
#[derive(Debug, Clone)]
pub struct SyllableRules {
    code: String,
    name: String,
    terminators: HashSet<char>,
    word_punctuation: HashSet<char>,
    vowels: HashSet<char>,
    syllabic_consonants: HashSet<char>,
    obstruents: HashSet<String>,
    onset_exceptions: HashSet<String>,
    special_cases: HashMap<String, Vec<String>>,
}

impl SyllableRules {
    /// Build runtime rules from a validated configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate().map_err(CoreError::Config)?;

        let fold_str =
            |s: &String| -> String { s.chars().flat_map(char::to_lowercase).collect() };

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: config.sentences.terminators.iter().copied().collect(),
            word_punctuation: config.words.punctuation.iter().copied().collect(),
            vowels: config.nuclei.vowels.iter().map(|&c| fold(c)).collect(),
            syllabic_consonants: config
                .nuclei
                .syllabic_consonants
                .iter()
                .map(|&c| fold(c))
                .collect(),
            obstruents: config.clusters.obstruents.iter().map(fold_str).collect(),
            onset_exceptions: config
                .clusters
                .onset_exceptions
                .iter()
                .map(fold_str)
                .collect(),
            special_cases: config
                .special_cases
                .iter()
                .map(|(word, syllables)| (fold_str(word), syllables.clone()))
                .collect(),
        })
    }

    /// Load a rule profile from an external TOML file
    pub fn from_file(path: &Path, code_override: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        let mut config: RulesConfig = toml::from_str(&content).map_err(|e| {
            CoreError::Config(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(code) = code_override {
            config.metadata.code = code.to_string();
        }

        Self::from_config(&config)
    }

    /// Degraded fallback: vowel and syllabic-consonant detection only,
    /// no cluster classification and no special cases
    pub(crate) fn minimal() -> Self {
        Self {
            code: "cs".to_string(),
            name: "Czech (minimal)".to_string(),
            terminators: ['.', '!', '?'].into_iter().collect(),
            word_punctuation: ['.', ',', '!', '?', ';', ':'].into_iter().collect(),
            vowels: [
                'a', 'á', 'e', 'é', 'ě', 'i', 'í', 'o', 'ó', 'u', 'ú', 'ů', 'y', 'ý',
            ]
            .into_iter()
            .collect(),
            syllabic_consonants: ['r', 'l'].into_iter().collect(),
            obstruents: HashSet::new(),
            onset_exceptions: HashSet::new(),
            special_cases: HashMap::new(),
        }
    }

    /// Language code of the profile
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name of the profile
    pub fn language_name(&self) -> &str {
        &self.name
    }

    /// Whether the character ends a sentence
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Whether the character is strippable word-level punctuation
    pub fn is_word_punctuation(&self, ch: char) -> bool {
        self.word_punctuation.contains(&ch)
    }

    /// Whether the character is a vowel (case-insensitive)
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&fold(ch))
    }

    /// Whether the character can form a nucleus between non-vowels
    pub fn is_syllabic_consonant(&self, ch: char) -> bool {
        self.syllabic_consonants.contains(&fold(ch))
    }

    /// Whether the character is an obstruent
    pub fn is_obstruent(&self, ch: char) -> bool {
        self.obstruents.contains(fold(ch).to_string().as_str())
    }

    /// Whether the character is a sonant: a consonant that is neither a
    /// vowel nor an obstruent
    pub fn is_sonant(&self, ch: char) -> bool {
        !self.is_vowel(ch) && !self.is_obstruent(ch)
    }

    /// Whether the two-consonant cluster always moves to the next onset
    pub fn is_onset_exception(&self, first: char, second: char) -> bool {
        let mut cluster = String::with_capacity(8);
        cluster.push(fold(first));
        cluster.push(fold(second));
        self.onset_exceptions.contains(cluster.as_str())
    }

    /// Look up a lowercased stem in the special-case table
    pub fn special_case(&self, stem: &str) -> Option<&[String]> {
        self.special_cases.get(stem).map(Vec::as_slice)
    }
}

/// Embedded rule profiles, keyed by language code and name
static EMBEDDED: OnceLock<HashMap<String, Arc<SyllableRules>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<SyllableRules>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        let rules = match load_embedded(include_str!("../../configs/czech.toml")) {
            Ok(rules) => rules,
            Err(e) => {
                eprintln!("Warning: failed to load built-in Czech profile: {e}");
                Arc::new(SyllableRules::minimal())
            }
        };
        map.insert("cs".to_string(), Arc::clone(&rules));
        map.insert("czech".to_string(), rules);

        map
    })
}

fn load_embedded(toml_str: &str) -> Result<Arc<SyllableRules>> {
    let config: RulesConfig = toml::from_str(toml_str)
        .map_err(|e| CoreError::Config(format!("Failed to parse embedded profile: {e}")))?;
    Ok(Arc::new(SyllableRules::from_config(&config)?))
}

/// Look up built-in rules by language code
pub fn get_rules(code: &str) -> Result<Arc<SyllableRules>> {
    embedded()
        .get(code)
        .cloned()
        .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))
}

/// The built-in Czech profile
pub fn czech() -> Arc<SyllableRules> {
    get_rules("cs").unwrap_or_else(|_| Arc::new(SyllableRules::minimal()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_profile_is_valid() {
        let config: RulesConfig =
            toml::from_str(include_str!("../../configs/czech.toml")).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn czech_profile_classifies_characters() {
        let rules = czech();
        assert_eq!(rules.language_code(), "cs");
        assert!(rules.is_vowel('a'));
        assert!(rules.is_vowel('Á'));
        assert!(rules.is_vowel('ě'));
        assert!(!rules.is_vowel('r'));
        assert!(rules.is_syllabic_consonant('R'));
        assert!(rules.is_obstruent('č'));
        assert!(rules.is_obstruent('T'));
        assert!(!rules.is_obstruent('m'));
        assert!(rules.is_sonant('m'));
        assert!(rules.is_sonant('n'));
        assert!(!rules.is_sonant('k'));
        assert!(rules.is_onset_exception('ď', 'm'));
        assert!(rules.is_onset_exception('b', 'v'));
        assert!(!rules.is_onset_exception('t', 'k'));
    }

    #[test]
    fn czech_profile_has_special_cases() {
        let rules = czech();
        assert_eq!(rules.special_case("krtka").unwrap(), ["krt", "ka"]);
        assert_eq!(rules.special_case("mrkev").unwrap(), ["mr", "kev"]);
        assert!(rules.special_case("pes").is_none());
    }

    #[test]
    fn get_rules_rejects_unknown_code() {
        assert!(matches!(
            get_rules("xx"),
            Err(CoreError::UnknownLanguage(_))
        ));
        assert!(get_rules("czech").is_ok());
    }

    #[test]
    fn from_file_loads_external_profile() {
        let toml_content = r#"
[metadata]
code = "cs-x"
name = "Czech (experimental)"

[sentences]
terminators = ["."]

[words]
punctuation = [".", ","]

[nuclei]
vowels = ["a", "e", "i", "o", "u", "y"]
syllabic_consonants = ["r", "l"]

[clusters]
obstruents = ["p", "t", "k"]
onset_exceptions = ["ch"]

[special_cases]
"okno" = ["ok", "no"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let rules = SyllableRules::from_file(temp_file.path(), None).unwrap();
        assert_eq!(rules.language_code(), "cs-x");
        assert!(rules.is_onset_exception('c', 'h'));
        assert_eq!(rules.special_case("okno").unwrap(), ["ok", "no"]);

        let overridden = SyllableRules::from_file(temp_file.path(), Some("cs-y")).unwrap();
        assert_eq!(overridden.language_code(), "cs-y");
    }

    #[test]
    fn from_file_rejects_invalid_profile() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[metadata\ncode = \"cs\"").unwrap();

        let result = SyllableRules::from_file(temp_file.path(), None);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn from_file_missing_is_config_error() {
        let result = SyllableRules::from_file(Path::new("/nonexistent/rules.toml"), None);
        match result {
            Err(CoreError::Config(msg)) => assert!(msg.contains("Failed to read file")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}
