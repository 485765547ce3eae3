//! Shopify MCP server library.
//!
//! Exposes one Model Context Protocol tool, `fetch-products`, which searches
//! a Shopify store's catalog through the Admin GraphQL API and returns the
//! matches as flat JSON.
//!
//! # Pipeline
//!
//! 1. [`shopify::queries`] binds the search term to a fixed GraphQL document
//! 2. [`shopify::AdminClient`] posts it and folds every transport failure
//!    into a [`shopify::SearchOutcome`]
//! 3. [`shopify::conversions`] flattens `edges { node }` into core products
//! 4. [`tools::fetch_products`] formats the text envelope for the caller
//!
//! # Security
//!
//! This crate holds a HIGH PRIVILEGE Shopify Admin API token. It only ever
//! issues read queries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod server;
pub mod shopify;
pub mod tools;
