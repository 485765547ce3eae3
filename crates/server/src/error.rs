//! Startup errors for the MCP server binary.
//!
//! Per-request failures never surface here: they are formatted into the
//! tool's result envelope. Only problems that prevent the server from
//! starting (or end the session abnormally) become a `StartupError`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shopify::AdminShopifyError;

/// Fatal error while starting or running the server.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The Shopify client could not be built from the configuration.
    #[error("Shopify client error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// The MCP transport failed to initialize or terminated abnormally.
    #[error("MCP server error: {0}")]
    Serve(String),
}
