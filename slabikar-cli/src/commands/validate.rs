//! Validate command implementation

use anyhow::Result;
use clap::Args;
use slabikar_core::SyllableRules;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule profile file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule profile: {}", self.rules.display());

        match SyllableRules::from_file(&self.rules, None) {
            Ok(rules) => {
                println!("✓ Rule profile is valid!");
                println!("  Language code: {}", rules.language_code());
                println!("  Language name: {}", rules.language_name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
