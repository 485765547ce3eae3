//! Core types for the Shopify MCP server.
//!
//! This module provides type-safe wrappers for catalog concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::Money;
pub use product::{Image, Product, ProductVariant};
