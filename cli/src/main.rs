//! CLI entrypoint for Cognify
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP API.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use cognify_application::GenerateStudyAidUseCase;
use cognify_domain::RequestKind;
use cognify_infrastructure::config::FileLoggingConfig;
use cognify_infrastructure::{
    ConfigLoader, FileConfig, InMemoryResultCache, JsonlUsageLogger, Severity,
    build_provider_chain,
};
use cognify_presentation::{AppState, Cli, create_router};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli, &config.logging);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue),
            Severity::Error => error!("Config: {}", issue),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration; see errors above");
    }

    info!("Starting Cognify");

    // === Dependency Injection ===
    let chain = build_provider_chain(&config.providers, |name| std::env::var(name).ok())
        .context("Failed to build provider chain")?;
    info!("Provider chain: {}", chain.provider_names().join(" -> "));

    let mut use_case = GenerateStudyAidUseCase::new(chain).with_behavior(config.behavior());

    if config.cache.enabled {
        use_case = use_case.with_cache(Arc::new(InMemoryResultCache::new()));
    }

    if config.usage.enabled {
        match JsonlUsageLogger::new(&config.usage.log_path) {
            Some(logger) => {
                info!("Usage audit log: {}", logger.path().display());
                use_case = use_case.with_usage_recorder(Arc::new(logger));
            }
            None => warn!("Usage audit log disabled; could not open {}", config.usage.log_path.display()),
        }
    }

    let state = AppState::new(use_case)
        .with_max_upload_bytes(config.server.max_upload_bytes)
        .with_cors_allow_any(config.server.cors_allow_any);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;

    info!(
        "Cognify listening on http://{} ({})",
        listener.local_addr()?,
        RequestKind::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Cognify stopped");
    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
///
/// Returns the file writer guard when `[logging] dir` is configured.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    match &logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "cognify.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
