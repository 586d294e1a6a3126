//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new rule profile
    #[arg(short = 'l', long, value_name = "CODE", default_value = "cs")]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the profile to adjust the cluster policy or add special cases");
        println!("2. Validate your profile:");
        println!("   slabikar validate --rules {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   slabikar process -i cteni.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        format!(
            r#"# Syllabification rule profile for {code}

[metadata]
code = "{code}"
name = "Custom profile"

# Sentence-ending punctuation; a run of these characters belongs to the
# sentence it terminates
[sentences]
terminators = [".", "!", "?"]

# Punctuation stripped from the end of a word before nucleus detection and
# reattached to the final syllable
[words]
punctuation = [".", ",", "!", "?", ";", ":"]

[nuclei]
vowels = ["a", "á", "e", "é", "ě", "i", "í", "o", "ó", "u", "ú", "ů", "y", "ý"]
# Consonants that form a nucleus between non-vowels ("vlk", "krtek")
syllabic_consonants = ["r", "l"]

[clusters]
# Obstruent consonants; two-character digraphs are allowed
obstruents = ["p", "b", "t", "d", "ť", "ď", "k", "g", "f", "v", "s", "z", "š", "ž", "ch", "h", "c", "č"]
# Two-consonant clusters that always move to the next syllable's onset
onset_exceptions = ["ďm", "bv"]

# Words the cluster heuristic mis-segments; the stored split wins.
# Each entry's syllables must concatenate back to the key.
[special_cases]
"krtka" = ["krt", "ka"]
"mrkev" = ["mr", "kev"]
# Add more entries as needed:
# "ucho" = ["u", "cho"]
"#,
            code = self.language_code
        )
    }
}
