//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON dump of the final game state
    Json,
}

impl From<OutputFormat> for twentyq_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => twentyq_domain::OutputFormat::Text,
            OutputFormat::Json => twentyq_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for twenty-questions
#[derive(Parser, Debug)]
#[command(name = "twenty-questions")]
#[command(author, version, about = "Think of a word - the model asks yes/no questions and tries to guess it")]
#[command(long_about = r#"
Think of an English word. The model asks yes/no questions, and you answer
with Yes, No, Sometimes or Unknown (y / n / s / u). It tries to guess the
word within 20 questions, and may take up to 25 if it needs them.

Configuration files are loaded from (in priority order):
1. TWENTYQ_* environment variables (e.g. TWENTYQ_MODEL__NAME=gpt-4o)
2. --config <path>     Explicit config file
3. ./twentyq.toml      Project-level config
4. ~/.config/twenty-questions/config.toml   Global config

The API key is read from OPENAI_API_KEY unless configured otherwise.

Example:
  twenty-questions
  twenty-questions -m gpt-4o --output json
  twenty-questions --base-url http://localhost:11434 -m llama3.1
"#)]
pub struct Cli {
    /// Model to play against (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// How finished games are reported
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write a JSONL transcript of each game into this directory
    #[arg(long, value_name = "DIR")]
    pub transcript_dir: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the thinking spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["twenty-questions"]).unwrap();
        assert!(cli.model.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_model_and_output() {
        let cli =
            Cli::try_parse_from(["twenty-questions", "-m", "gpt-4o", "--output", "json"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["twenty-questions", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["twenty-questions", "--output", "xml"]).is_err());
    }

    #[test]
    fn test_output_format_into_domain() {
        let format: twentyq_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, twentyq_domain::OutputFormat::Json);
    }
}
