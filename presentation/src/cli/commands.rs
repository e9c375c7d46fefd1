//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use textnext_domain::OutputFormat;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for textnext
#[derive(Parser, Debug)]
#[command(name = "textnext")]
#[command(author, version, about = "TextNext - AI next-word prediction")]
#[command(long_about = r#"
TextNext predicts the word that most naturally follows a sentence.

How to use:
1. Type your sentence (up to 100 characters)
2. The model predicts the next word that should follow
3. Try different sentence structures to see how predictions change
4. For best results, use complete phrases that naturally lead to a next word

The Gemini API key is read from the GEMINI_API_KEY environment variable.
A .env file in the working directory is loaded first if present.

Configuration files are loaded from (in priority order):
1. TEXTNEXT_* environment variables
2. --config <path>     Explicit config file
3. ./textnext.toml     Project-level config
4. ~/.config/textnext/config.toml   Global config

Example:
  textnext "The quick brown fox jumps over the"
  textnext -m gemini-1.5-flash Once upon a
  textnext -i
"#)]
pub struct Cli {
    /// The sentence to complete (interactive mode when omitted)
    pub text: Vec<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Candidate model names, tried in order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Skip probing candidate models at startup
    #[arg(long)]
    pub no_verify: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

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

impl Cli {
    /// The sentence given on the command line, if any
    pub fn sentence(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }

    /// Whether to run the interactive prompt
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_words_joined_into_sentence() {
        let cli = Cli::parse_from(["textnext", "The", "quick", "brown", "fox"]);
        assert_eq!(cli.sentence().as_deref(), Some("The quick brown fox"));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_no_text_means_interactive() {
        let cli = Cli::parse_from(["textnext"]);
        assert_eq!(cli.sentence(), None);
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "textnext",
            "-m",
            "gemini-1.5-flash",
            "-m",
            "gemini-pro",
            "-o",
            "json",
            "-vv",
            "-q",
            "--no-verify",
            "hello there",
        ]);
        assert_eq!(cli.model, vec!["gemini-1.5-flash", "gemini-pro"]);
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_verify);
        assert_eq!(cli.sentence().as_deref(), Some("hello there"));
    }
}
