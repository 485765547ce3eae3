//! Shopify MCP - product search tool server.
//!
//! Serves the Model Context Protocol over stdio. Stdout carries protocol
//! frames only, so every log line goes to stderr.
//!
//! # Startup
//!
//! 1. Load configuration from the environment (`.env` honored)
//! 2. Initialize Sentry (optional) and tracing
//! 3. Build the Shopify Admin API client
//! 4. Register `fetch-products` and serve until the client disconnects
//!
//! Missing or invalid configuration aborts before the tool is registered.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use rmcp::ServiceExt as _;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopify_mcp::config::{LogFormat, ServerConfig};
use shopify_mcp::error::StartupError;
use shopify_mcp::server::ShopifyMcpServer;
use shopify_mcp::shopify::AdminClient;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let sentry_config = config.sentry.as_ref()?;

    let guard = sentry::init((
        sentry_config.dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: sentry_config
                .environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: sentry_config.sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Initialize tracing on stderr with `EnvFilter` and Sentry integration.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopify_mcp=info".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Text).then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let client = AdminClient::new(&config.shopify)?;

    tracing::info!(
        store = %config.shopify.store,
        api_version = %config.shopify.api_version,
        "Starting Shopify MCP server on stdio"
    );

    let service = ShopifyMcpServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| StartupError::Serve(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| StartupError::Serve(e.to_string()))?;

    tracing::info!(?reason, "MCP session ended");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Shopify MCP server failed");
            ExitCode::FAILURE
        }
    }
}
