//! CLI entrypoint for chartroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chartroom_application::{AgentRuntime, Orchestrator};
use chartroom_domain::{ConfigIssue, Severity};
use chartroom_infrastructure::{
    ConfigLoader, FileConfig, FileOutputSink, GeminiInvoker, JsonlConversationLogger,
    LocalPromptLoader,
};
use chartroom_presentation::{AppState, Cli, Command, router, serve};
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.verbose, config.logging.dir.as_deref())?;

    info!("Starting chartroom");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("config: {}", issue.message),
            Severity::Warning => warn!("config: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration; see the errors above");
    }

    match cli.command() {
        Command::Serve { bind } => run_server(&config, bind.as_deref()).await,
    }
}

/// Console logging from `-v` (or `RUST_LOG`), plus a daily file when
/// `logging.dir` is set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("chartroom")
                .filename_suffix("log")
                .build(dir)
                .with_context(|| format!("Failed to open log directory {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run_server(config: &FileConfig, bind: Option<&str>) -> Result<()> {
    // === Dependency Injection ===
    let invoker = Arc::new(
        GeminiInvoker::from_config(&config.gemini, &config.models)
            .context("Gemini client is not configured")?,
    );

    let (models, model_issues) = config.models.to_model_config();
    if ConfigIssue::has_errors(&model_issues) {
        bail!("Invalid [models] configuration");
    }
    let prompts = LocalPromptLoader::new(&config.prompts.dir).load();
    let mut runtime = AgentRuntime::new(invoker)
        .with_models(models)
        .with_prompts(prompts)
        .with_behavior(config.behavior.to_behavior_config());

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation log: {}", logger.path().display());
        runtime = runtime.with_conversation_logger(Arc::new(logger));
    }

    let sink = Arc::new(FileOutputSink::new(&config.output.dir));
    info!("Writing artifacts to {}", sink.dir().display());

    let orchestrator = Arc::new(Orchestrator::new(runtime, sink));
    let state = AppState::new(orchestrator, config.server.public_base_url());

    let addr: SocketAddr = match bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("Invalid --bind address: {}", bind))?,
        None => config.server.bind_addr()?,
    };
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
        }
        on_signal.cancel();
    });

    serve(listener, router(state), shutdown).await?;
    Ok(())
}
