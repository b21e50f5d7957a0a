//! CLI entrypoint for twenty-questions
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use twentyq_application::PlayGameUseCase;
use twentyq_domain::Severity;
use twentyq_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiLlmGateway};
use twentyq_presentation::{Cli, ConsoleFormatter, GameRepl, OutputConfig, ReplConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let mut has_errors = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => eprintln!("Warning: {}", issue.message),
            Severity::Error => {
                eprintln!("Error: {}", issue.message);
                has_errors = true;
            }
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone(),
    };
    ConsoleFormatter::set_color(output.color);

    // === Dependency Injection ===
    let (params, _) = config.model.to_model_params();
    let model = params.model.clone();
    let gateway = Arc::new(OpenAiLlmGateway::new(
        config.providers.openai.to_settings(),
        params,
    )?);

    let mut use_case = PlayGameUseCase::new(gateway);
    if config.logging.transcripts {
        match config
            .logging
            .resolve_transcript_dir()
            .and_then(JsonlConversationLogger::in_dir)
        {
            Some(logger) => {
                info!("Writing game transcript to {}", logger.path().display());
                use_case = use_case.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Transcript logging requested but no transcript file could be created"),
        }
    }

    info!("Starting twenty-questions with model {}", model);

    let mut repl = GameRepl::new(use_case, model)
        .with_progress(repl_config.show_progress)
        .with_output_format(output.format)
        .with_history_path(repl_config.history_path());

    repl.run().await?;

    Ok(())
}

/// Initialize tracing based on verbosity, optionally writing to a file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Command-line flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.providers.openai.base_url = base_url.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(dir) = &cli.transcript_dir {
        config.logging.transcripts = true;
        config.logging.transcript_dir = Some(dir.display().to_string());
    }
}
