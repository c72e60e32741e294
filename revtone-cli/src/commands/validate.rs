//! Validate command implementation

use anyhow::Result;
use clap::Args;
use revtone_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon_file.display());

        match Lexicon::from_file(&self.lexicon_file) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Version: {}", lexicon.version());
                println!("  Words: {}", lexicon.word_count());
                println!("  Idioms: {}", lexicon.idiom_count());
                println!("  Emoticons: {}", lexicon.emoticon_count());
                println!("  Modifiers: {}", lexicon.modifier_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_lexicon() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "test"
name = "Test Lexicon"
version = "0.1.0"

[words]
sturdy = 1.8
flimsy = -1.6

[modifiers]
negations = ["not"]
"#
        )
        .unwrap();

        let args = ValidateArgs {
            lexicon_file: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_valence() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "test"
name = "Test Lexicon"
version = "0.1.0"

[words]
ecstatic = 7.5
"#
        )
        .unwrap();

        let args = ValidateArgs {
            lexicon_file: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            lexicon_file: PathBuf::from("/nonexistent/lexicon.toml"),
        };
        assert!(args.execute().is_err());
    }
}
