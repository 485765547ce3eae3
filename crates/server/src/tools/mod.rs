//! MCP tool implementations.
//!
//! Each tool formats its result as a [`ResultEnvelope`]: an ordered list of
//! text blocks plus an error flag, converted into an MCP `CallToolResult` at
//! the protocol boundary.

pub mod fetch_products;

use rmcp::model::{CallToolResult, Content};

/// Text output of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope {
    /// Text blocks, in display order. Never empty.
    pub blocks: Vec<String>,
    /// Whether the invocation failed.
    pub is_error: bool,
}

impl ResultEnvelope {
    /// A single successful text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![text.into()],
            is_error: false,
        }
    }

    /// A single error text block.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![text.into()],
            is_error: true,
        }
    }
}

impl From<ResultEnvelope> for CallToolResult {
    fn from(envelope: ResultEnvelope) -> Self {
        let content = envelope.blocks.into_iter().map(Content::text).collect();
        if envelope.is_error {
            Self::error(content)
        } else {
            Self::success(content)
        }
    }
}
