//! Console output formatter for prediction results

use colored::Colorize;
use textnext_application::PredictNextWordOutput;
use textnext_domain::core::string::truncate_display;
use textnext_domain::{OutputFormat, PredictionOutcome};

const ALERT_MAX_CHARS: usize = 300;

/// Formats prediction results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render an output in the requested format
    pub fn render(output: &PredictNextWordOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(output),
            OutputFormat::Json => Self::format_json(output),
        }
    }

    /// Format a single pipeline result
    pub fn format(output: &PredictNextWordOutput) -> String {
        match output {
            PredictNextWordOutput::Rejected { error, .. } => {
                format!("{} {}", "⚠".yellow().bold(), error.to_string().yellow())
            }
            PredictNextWordOutput::Predicted { input, outcome, .. } => {
                let mut text = format!(
                    "{} {}",
                    "🔮 Predicted Next Word:".cyan().bold(),
                    Self::outcome_text(outcome)
                );
                if let Some(phrase) = outcome.completed_phrase(input.as_str()) {
                    text.push_str(&format!("\n{} {}", "Complete phrase:".bold(), phrase));
                }
                text
            }
        }
    }

    /// Format as pretty-printed JSON
    pub fn format_json(output: &PredictNextWordOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn outcome_text(outcome: &PredictionOutcome) -> String {
        match outcome {
            PredictionOutcome::Word { word } => word.green().bold().to_string(),
            PredictionOutcome::Warning { message, .. } => message.yellow().to_string(),
        }
    }

    /// Banner shown when no API key could be found
    pub fn missing_api_key_banner(env: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Gemini API key not found"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} is not set. Predictions are disabled until it is configured.\n",
            "Warning:".yellow().bold(),
            env
        ));
        output.push_str(&Self::section_header("To set up your API key"));
        output.push_str(&Self::indent(
            &format!(
                "1. Create a .env file in the working directory\n\
                 2. Add: {}=your_api_key_here\n\
                 3. Restart textnext",
                env
            ),
            "  ",
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Notice shown when the key is present but no model could be initialized
    pub fn model_unavailable_notice(reason: &str) -> String {
        format!(
            "{} Model not available: {}",
            "Warning:".yellow().bold(),
            reason
        )
    }

    /// Operator-facing line for an unclassified provider error
    pub fn operator_alert(detail: &str) -> String {
        format!(
            "{} {}",
            "Error:".red().bold(),
            truncate_display(detail, ALERT_MAX_CHARS)
        )
    }

    /// Usage notes shown by the interactive prompt
    pub fn usage() -> String {
        let mut output = Self::section_header("How to use");
        output.push_str(&Self::indent(
            "1. Type your sentence (up to 100 characters)\n\
             2. The model predicts the next word that should follow\n\
             3. Try different sentence structures to see how predictions change\n\
             4. For best results, use complete phrases that naturally lead to a next word",
            "  ",
        ));
        output.push('\n');
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.yellow(), title.bold(), line.yellow())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).yellow())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
