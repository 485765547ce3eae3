//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the Shopify Admin API access token.** The token is
//! read once at startup, kept in a `SecretString`, and sent only as the
//! `X-Shopify-Access-Token` header (marked sensitive so it never shows up in
//! request debug output).
//!
//! # Architecture
//!
//! - [`queries`] - statically-known GraphQL documents implementing
//!   `graphql_client::GraphQLQuery`; search input is always bound as a variable
//! - [`AdminClient`] - sends a query and decodes the GraphQL response
//! - [`conversions`] - flattens connection-shaped responses into core types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_mcp::shopify::{AdminClient, SearchOutcome};
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! match client.search_products("linen shirt").await {
//!     SearchOutcome::Success(response) => { /* may still carry GraphQL errors */ }
//!     SearchOutcome::TransportFailure { message } => { /* network, status, or decode failure */ }
//! }
//! ```

mod client;
pub mod conversions;
pub mod queries;

pub use client::AdminClient;

use thiserror::Error;

/// Errors that can occur when talking to the Shopify Admin API.
///
/// These are transport-level failures. GraphQL errors inside a decoded
/// response body are data, see [`SearchOutcome::Success`].
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed (DNS, TLS, connection, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: reqwest::StatusCode,
        /// Response body (truncated).
        body: String,
    },

    /// Response body was not a GraphQL JSON response.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured store does not form a valid endpoint URL.
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The access token cannot be sent as an HTTP header.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Result of one product search call.
///
/// Transport failures and successfully-decoded responses are unified here so
/// callers never deal with a raised error.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The platform answered with a GraphQL response. It may carry `errors`.
    Success(graphql_client::Response<queries::search_products::ResponseData>),
    /// The call failed before a GraphQL response could be decoded.
    TransportFailure {
        /// Description of the underlying error.
        message: String,
    },
}

/// Render an error and its sources as one line.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
