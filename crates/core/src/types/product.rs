//! Normalized product types returned to MCP callers.
//!
//! These are the flat counterparts of Shopify's connection-shaped product
//! nodes: the `edges { node }` wrappers are gone, every other field keeps the
//! platform's name (camelCase on the wire) and value.

use serde::{Deserialize, Serialize};

use super::id::{ProductId, VariantId};
use super::price::Money;

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// A product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Variant title (combination of option values).
    pub title: String,
    /// SKU code.
    pub sku: Option<String>,
    /// Current price.
    pub price: Money,
    /// Inventory quantity across all locations.
    pub inventory_quantity: Option<i64>,
}

/// A product with its variants flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// HTML description.
    pub description_html: Option<String>,
    /// Product type/category.
    pub product_type: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Product tags.
    pub tags: Option<Vec<String>>,
    /// Product status (`ACTIVE`, `DRAFT`, `ARCHIVED`, ...), as reported.
    pub status: Option<String>,
    /// Featured image.
    pub featured_image: Option<Image>,
    /// Product variants, in platform order.
    pub variants: Vec<ProductVariant>,
}
