//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{Review, ReviewCollector};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::store::{JsonlStore, ReviewRecord, ReviewStore};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use revtone_core::{AnalysisResult, Config, SentimentAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Review text to analyze (repeatable)
    #[arg(short, long, value_name = "REVIEW")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Treat each non-empty line of an input file as a separate review
    #[arg(long)]
    pub per_line: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in lexicon code
    #[arg(short, long, value_name = "CODE", conflicts_with = "lexicon_file")]
    pub lexicon: Option<String>,

    /// Path to an external lexicon file (TOML format)
    #[arg(long, value_name = "FILE")]
    pub lexicon_file: Option<PathBuf>,

    /// Compound score above which a review is Positive
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub positive_threshold: Option<f64>,

    /// Compound score below which a review is Negative
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub negative_threshold: Option<f64>,

    /// Append analyzed reviews to a JSON Lines history file
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per review with label and compound score
    Text,
    /// JSON array of reviews with full scores
    Json,
    /// Markdown table with totals
    Markdown,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting review analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let config = self.analyzer_config(&file_config)?;
        let analyzer = SentimentAnalyzer::with_config(config)
            .context("Failed to initialize the sentiment analyzer")?;
        log::info!(
            "Using lexicon {} ('{}' v{}, {} words)",
            analyzer.config().lexicon().display_name(),
            analyzer.lexicon().code(),
            analyzer.lexicon().version(),
            analyzer.lexicon().word_count()
        );

        let reviews = ReviewCollector::new()
            .texts(&self.text)
            .patterns(&self.input)
            .per_line(self.per_line)
            .collect(io::stdin().lock())?;

        let results = self.analyze_all(&analyzer, &reviews)?;

        if let Some(path) = self.store.clone().or(file_config.store.path.clone()) {
            let records: Vec<ReviewRecord> = reviews
                .iter()
                .zip(&results)
                .map(|(review, result)| ReviewRecord::now(review.text.clone(), result.label))
                .collect();
            JsonlStore::new(path).save(&records)?;
        }

        let format = self.output_format(&file_config)?;
        let mut formatter = self.create_formatter(format, file_config.output.pretty_json)?;
        for (review, result) in reviews.iter().zip(&results) {
            formatter.format_review(review, result)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} review(s)", reviews.len());
        Ok(())
    }

    /// Merge flags over the config file over library defaults
    fn analyzer_config(&self, file: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder();

        if let Some(path) = &self.lexicon_file {
            builder = builder.lexicon_file(path);
        } else if let Some(code) = &self.lexicon {
            builder = builder.lexicon(code.as_str());
        } else if let Some(path) = &file.analysis.lexicon_file {
            builder = builder.lexicon_file(path);
        } else if let Some(code) = &file.analysis.lexicon {
            builder = builder.lexicon(code.as_str());
        }

        if let Some(positive) = self
            .positive_threshold
            .or(file.analysis.positive_threshold)
        {
            builder = builder.positive_threshold(positive);
        }
        if let Some(negative) = self
            .negative_threshold
            .or(file.analysis.negative_threshold)
        {
            builder = builder.negative_threshold(negative);
        }

        Ok(builder.build()?)
    }

    fn output_format(&self, file: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&file.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text, json or markdown)",
                file.output.default_format
            ))
            .into()
        })
    }

    /// Score every review on a worker pool, keeping input order
    fn analyze_all(
        &self,
        analyzer: &SentimentAnalyzer,
        reviews: &[Review],
    ) -> Result<Vec<AnalysisResult>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        if threads == 0 {
            return Err(
                CliError::ConfigError("threads must be greater than 0".to_string()).into(),
            );
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;
        log::debug!("Analyzing {} review(s) on {threads} thread(s)", reviews.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_reviews(reviews.len() as u64);

        let results: Vec<AnalysisResult> = pool.install(|| {
            reviews
                .par_iter()
                .map(|review| {
                    let result = analyzer.analyze(&review.text);
                    log::debug!(
                        "{}: {} ({:+.4})",
                        review.source,
                        result.label,
                        result.compound
                    );
                    progress.review_completed();
                    result
                })
                .collect()
        });

        progress.finish();
        Ok(results)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let initialized =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                    .try_init();
            if initialized.is_err() {
                log::debug!("Logger already initialized");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revtone_core::LexiconSource;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: vec![],
            input: vec![],
            per_line: false,
            output: None,
            format: None,
            lexicon: None,
            lexicon_file: None,
            positive_threshold: None,
            negative_threshold: None,
            store: None,
            config: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let config = args().analyzer_config(&CliConfig::default()).unwrap();
        assert_eq!(config.lexicon(), &LexiconSource::BuiltIn("en".to_string()));
        assert_eq!(config.thresholds().positive, 0.1);
        assert_eq!(config.thresholds().negative, -0.1);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = CliConfig::default();
        file.analysis.positive_threshold = Some(0.3);
        file.analysis.negative_threshold = Some(-0.3);
        file.analysis.lexicon_file = Some(PathBuf::from("from-file.toml"));

        let mut cli = args();
        cli.positive_threshold = Some(0.5);
        cli.lexicon = Some("en".to_string());

        let config = cli.analyzer_config(&file).unwrap();
        assert_eq!(config.thresholds().positive, 0.5);
        assert_eq!(config.thresholds().negative, -0.3);
        assert_eq!(config.lexicon(), &LexiconSource::BuiltIn("en".to_string()));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let mut cli = args();
        cli.positive_threshold = Some(-0.5);
        assert!(cli.analyzer_config(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_output_format_resolution() {
        let mut file = CliConfig::default();
        assert_eq!(args().output_format(&file).unwrap(), OutputFormat::Text);

        file.output.default_format = "Markdown".to_string();
        assert_eq!(args().output_format(&file).unwrap(), OutputFormat::Markdown);

        let mut cli = args();
        cli.format = Some(OutputFormat::Json);
        assert_eq!(cli.output_format(&file).unwrap(), OutputFormat::Json);

        file.output.default_format = "yaml".to_string();
        assert!(args().output_format(&file).is_err());
    }

    #[test]
    fn test_analyze_all_keeps_order() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let reviews: Vec<Review> = ["great", "awful", "the box", "good", "bad"]
            .iter()
            .cycle()
            .take(50)
            .enumerate()
            .map(|(i, text)| Review::new(format!("arg {i}"), *text))
            .collect();

        let mut cli = args();
        cli.threads = Some(4);
        let results = cli.analyze_all(&analyzer, &reviews).unwrap();

        assert_eq!(results.len(), reviews.len());
        for (review, result) in reviews.iter().zip(&results) {
            assert_eq!(*result, analyzer.analyze(&review.text));
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let mut cli = args();
        cli.threads = Some(0);

        let err = cli
            .analyze_all(&analyzer, &[Review::new("arg 1", "good")])
            .unwrap_err();
        assert!(err.to_string().contains("threads must be greater than 0"));
    }
}
