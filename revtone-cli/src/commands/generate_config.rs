//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code for the new lexicon
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon template...");
        println!("  Lexicon code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add words, idioms and emoticons for your review domain");
        println!("2. Validate your lexicon:");
        println!("   revtone validate -c {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   revtone analyze -i reviews.txt --lexicon-file {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon for {}
#
# Valences range from -4.0 (extremely negative) to +4.0 (extremely positive).
# Keys are matched against lowercased tokens.

[metadata]
code = "{}"
name = "Custom lexicon"
version = "0.1.0"

# Scoring constants; every field is optional
[rules]
window = 3
booster_increment = 0.293
booster_decay = [1.0, 0.95, 0.9]
negation_scalar = -0.74
caps_increment = 0.733
exclamation_increment = 0.292
max_exclamations = 4
question_increment = 0.18
max_questions = 3
question_cap = 0.96
contrast_before = 0.5
contrast_after = 1.5

# Single tokens
[words]
good = 1.9
great = 3.1
bad = -2.5
terrible = -2.5
average = 0.0

# Multi-token phrases, matched longest first
[idioms]
"waste of money" = -2.5
"worth every penny" = 2.8

# Whole whitespace-separated chunks
[emoticons]
":)" = 2.0
":(" = -1.9

[modifiers]
negations = ["not", "never", "no", "don't", "isn't"]
intensifiers = ["very", "really", "extremely"]
dampeners = ["slightly", "somewhat", "barely"]
contrasts = ["but"]
"#,
            self.code, self.code
        )
    }
}
