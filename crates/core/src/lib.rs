//! Shopify MCP Core - Shared catalog types.
//!
//! This crate provides the flat, caller-facing catalog types produced by the
//! `shopify-mcp` server when it normalizes Shopify Admin API responses.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no MCP
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for Shopify GIDs and prices, plus the
//!   normalized `Product` and `ProductVariant` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
