//! Shopify Admin API GraphQL client.
//!
//! This module sends statically-known GraphQL documents to the Admin API
//! with the configured access token. There is no retry, pagination, or
//! timeout override; one call is made per request.

use std::sync::Arc;

use graphql_client::{GraphQLQuery, Response};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::ShopifyConfig;

use super::{
    AdminShopifyError, SearchOutcome, error_chain,
    queries::{SearchProducts, search_products},
};

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Longest error body kept from a non-success response.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; all clones share one connection pool. Holds no mutable
/// state, so concurrent requests are independent.
///
/// # Security
///
/// The access token has HIGH PRIVILEGE access to the store. It is stored
/// as a sensitive default header and never logged.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new Admin API client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not form a valid endpoint URL, the
    /// token is not a valid header value, or the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, AdminShopifyError> {
        let endpoint = config.graphql_endpoint()?;
        Self::with_endpoint(config, endpoint)
    }

    /// Create a client that posts to an explicit GraphQL endpoint.
    ///
    /// Used to point the client at a mock server in tests.
    ///
    /// # Errors
    ///
    /// Same as [`AdminClient::new`].
    pub fn with_endpoint(config: &ShopifyConfig, endpoint: Url) -> Result<Self, AdminShopifyError> {
        let mut token = HeaderValue::from_str(config.access_token.expose_secret())?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner { client, endpoint }),
        })
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL query and decode the response.
    ///
    /// GraphQL `errors` in the body are returned as part of the response, not
    /// as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Http` if the request fails,
    /// `AdminShopifyError::Status` on a non-success status, and
    /// `AdminShopifyError::Parse` if the body is not a GraphQL response.
    #[instrument(skip_all, fields(endpoint = %self.inner.endpoint))]
    pub async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Response<Q::ResponseData>, AdminShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AdminShopifyError::Status {
                status,
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Product search
    // =========================================================================

    /// Search products by free text, first page only.
    ///
    /// Never fails: transport errors are folded into
    /// [`SearchOutcome::TransportFailure`], GraphQL errors stay inside
    /// [`SearchOutcome::Success`].
    #[instrument(skip(self))]
    pub async fn search_products(&self, search_query: &str) -> SearchOutcome {
        let variables = search_products::Variables {
            search_query: search_query.to_string(),
        };

        match self.execute::<SearchProducts>(variables).await {
            Ok(response) => {
                log_response(&response);
                SearchOutcome::Success(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Product search request failed");
                SearchOutcome::TransportFailure {
                    message: error_chain(&e),
                }
            }
        }
    }
}

fn log_response(response: &Response<search_products::ResponseData>) {
    if let Some(errors) = response.errors.as_ref().filter(|e| !e.is_empty()) {
        tracing::warn!(
            error_count = errors.len(),
            first_error = %errors.first().map_or("", |e| e.message.as_str()),
            "Shopify returned GraphQL errors"
        );
        return;
    }

    let products = response.data.as_ref().and_then(|d| d.products.as_ref());
    let edge_count = products
        .and_then(|p| p.edges.as_ref())
        .map_or(0, Vec::len);
    let has_next_page = products
        .and_then(|p| p.page_info.as_ref())
        .is_some_and(|p| p.has_next_page);

    tracing::debug!(edge_count, has_next_page, "Product search completed");
}
