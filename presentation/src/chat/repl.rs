//! REPL (Read-Eval-Print Loop) for interactive prediction

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SpinnerProgress;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use textnext_application::{ModelClient, PredictNextWordUseCase};
use textnext_domain::OutputFormat;

/// Slash commands understood by the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Model,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; anything else is a sentence
    pub fn parse(line: &str) -> Option<Self> {
        let cmd = line.strip_prefix('/')?;
        Some(match cmd.trim() {
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "help" | "h" | "?" => ReplCommand::Help,
            "model" => ReplCommand::Model,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive next-word prompt
pub struct PredictRepl<C: ModelClient + ?Sized + 'static> {
    use_case: PredictNextWordUseCase<C>,
    output: OutputConfig,
    repl: ReplConfig,
}

impl<C: ModelClient + ?Sized + 'static> PredictRepl<C> {
    pub fn new(use_case: PredictNextWordUseCase<C>) -> Self {
        Self {
            use_case,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(cmd) = ReplCommand::parse(line) {
                        if self.handle_command(cmd) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.predict(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       TextNext - AI Word Prediction         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a sentence and the model will predict the next word.");
        println!("Model: {}", self.model_status());
        println!();
        println!("Commands:");
        println!("  /help     - Show usage");
        println!("  /model    - Show model status");
        println!("  /quit     - Exit");
        println!();
    }

    fn model_status(&self) -> String {
        match self.use_case.handle().client() {
            Some(client) => client.model().to_string(),
            None => format!(
                "unavailable ({})",
                self.use_case
                    .handle()
                    .unavailable_reason()
                    .unwrap_or("not initialized")
            ),
        }
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: ReplCommand) -> bool {
        match cmd {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!("{}", ConsoleFormatter::usage());
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show model status");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            ReplCommand::Model => {
                println!("Model: {}", self.model_status());
                false
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: /{}", name);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn predict(&self, text: &str) {
        let show_spinner = self.repl.show_progress && self.output.format == OutputFormat::Text;
        let progress = if show_spinner {
            SpinnerProgress::new()
        } else {
            SpinnerProgress::quiet()
        };

        let output = self.use_case.execute_with_progress(text, &progress).await;
        println!("{}", ConsoleFormatter::render(&output, self.output.format));
        println!();
    }
}
