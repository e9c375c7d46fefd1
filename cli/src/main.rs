//! CLI entrypoint for TextNext
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use textnext_application::{ModelHandle, PredictNextWordUseCase};
use textnext_domain::OutputFormat;
use textnext_infrastructure::{
    ConfigLoader, FileConfig, GeminiError, GeminiModelClient, GeminiSettings, Severity,
};
use textnext_presentation::{
    Cli, ConsoleFormatter, OutputConfig, PredictRepl, ReplConfig, SpinnerProgress,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting TextNext");

    // .env must be loaded before the API key is resolved
    ConfigLoader::load_dotenv();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags take precedence over every config layer
    if !cli.model.is_empty() {
        config.gemini.models = cli.model.clone();
    }
    if cli.no_verify {
        config.gemini.verify_model = false;
    }

    report_config_issues(&config);

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or_else(|| config.output.parse_format().ok().flatten())
            .unwrap_or_default(),
        color: config.output.color,
    };
    output.apply_color();

    let repl = ReplConfig {
        show_progress: !cli.quiet && config.repl.show_progress,
    };

    // === Dependency Injection ===
    let handle = initialize_model(&config).await;
    let use_case = PredictNextWordUseCase::new(handle);

    if cli.is_interactive() {
        PredictRepl::new(use_case)
            .with_output(output)
            .with_repl_config(repl)
            .run()
            .await?;
        return Ok(());
    }

    let text = cli.sentence().unwrap_or_default();
    let progress = if repl.show_progress && output.format == OutputFormat::Text {
        SpinnerProgress::new()
    } else {
        SpinnerProgress::quiet()
    };

    let result = use_case.execute_with_progress(&text, &progress).await;
    println!("{}", ConsoleFormatter::render(&result, output.format));

    Ok(())
}

/// Build the model handle once at startup. Never fails: any problem leaves
/// the handle unavailable and is reported on stderr.
async fn initialize_model(config: &FileConfig) -> ModelHandle<GeminiModelClient> {
    let settings = match GeminiSettings::from_config(&config.gemini) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}", e);
            if let GeminiError::MissingApiKey { env } = &e {
                eprintln!("{}", ConsoleFormatter::missing_api_key_banner(env));
            }
            return ModelHandle::unavailable(e.to_string());
        }
    };

    let handle = ModelHandle::from_init(GeminiModelClient::connect(&settings).await);
    if let Some(reason) = handle.unavailable_reason() {
        eprintln!("{}", ConsoleFormatter::model_unavailable_notice(reason));
    }
    handle
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => eprintln!("Config error: {}", issue.message),
            Severity::Warning => eprintln!("Config warning: {}", issue.message),
        }
    }
}
