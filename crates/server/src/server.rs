//! MCP server exposing the `fetch-products` tool.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Deserialize;

use crate::shopify::AdminClient;
use crate::tools::fetch_products::format_outcome;

/// Name reported to MCP clients during initialization.
pub const SERVER_NAME: &str = "shopify-mcp";

/// Arguments of the `fetch-products` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FetchProductsParams {
    #[schemars(description = "the product to fetch")]
    pub product: String,
}

/// MCP server handler backed by a Shopify Admin API client.
///
/// Holds only the shared, immutable client; every invocation is independent.
#[derive(Clone)]
pub struct ShopifyMcpServer {
    client: AdminClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ShopifyMcpServer {
    /// Create a server that answers tool calls with `client`.
    #[must_use]
    pub fn new(client: AdminClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "fetch-products",
        description = "Fetch products from a given shopify store",
        annotations(read_only_hint = true)
    )]
    async fn fetch_products(
        &self,
        Parameters(FetchProductsParams { product }): Parameters<FetchProductsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(search_term = %product, "fetch-products invoked");

        let outcome = self.client.search_products(&product).await;
        Ok(format_outcome(&product, outcome).into())
    }
}

#[tool_handler]
impl ServerHandler for ShopifyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Search the connected Shopify store's product catalog. Call `fetch-products` \
                 with a free-text search term; the first 10 matches are returned as JSON."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
