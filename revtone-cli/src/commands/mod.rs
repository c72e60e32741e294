//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use revtone_core::{list_available_lexicons, Lexicon};

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score the sentiment of one or more reviews
    Analyze(analyze::AnalyzeArgs),

    /// Validate an external lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a starter lexicon file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in lexicons
    Lexicons,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Lexicons => {
                println!("Available lexicons:");
                for code in list_available_lexicons() {
                    let lexicon = Lexicon::from_code(code)?;
                    println!(
                        "  {:<4} {} (v{}, {} words, {} idioms)",
                        code,
                        lexicon.name(),
                        lexicon.version(),
                        lexicon.word_count(),
                        lexicon.idiom_count()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      One line per review with label and compound score");
                println!("  json      JSON array with sums and intensity counts");
                println!("  markdown  Markdown table with totals");
            }
        }
        Ok(())
    }
}
