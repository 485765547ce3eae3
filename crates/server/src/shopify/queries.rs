//! GraphQL query definitions for the Shopify Admin API.
//!
//! Queries implement `graphql_client::GraphQLQuery` by hand: the documents are
//! small and fixed, and the response types mirror only the fields requested.
//! Each query gets a snake_case module holding its `Variables` and
//! `ResponseData`, matching the layout `graphql_client` codegen produces.

use graphql_client::{GraphQLQuery, QueryBody};

// =============================================================================
// Product search
// =============================================================================

/// Number of products requested. Only the first page is ever fetched.
pub const PRODUCT_PAGE_SIZE: usize = 10;

/// Number of variants requested per product.
pub const VARIANTS_PER_PRODUCT: usize = 3;

/// Free-text product search. The search term is bound to `$searchQuery` and
/// never spliced into the document.
pub const SEARCH_PRODUCTS_QUERY: &str = r"query SearchProducts($searchQuery: String!) {
  products(first: 10, query: $searchQuery) {
    edges {
      node {
        id
        title
        handle
        descriptionHtml
        productType
        vendor
        tags
        status
        featuredImage {
          url
          altText
        }
        variants(first: 3) {
          edges {
            node {
              id
              title
              sku
              price
              inventoryQuantity
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}
";

pub struct SearchProducts;

impl GraphQLQuery for SearchProducts {
    type Variables = search_products::Variables;
    type ResponseData = search_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: SEARCH_PRODUCTS_QUERY,
            operation_name: search_products::OPERATION_NAME,
        }
    }
}

pub mod search_products {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "SearchProducts";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub search_query: String,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub products: Option<Connection<SearchProductsNode>>,
    }

    /// Relay-style connection. Every level may be absent or null.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Connection<T> {
        #[serde(default = "Option::default")]
        pub edges: Option<Vec<Edge<T>>>,
        #[serde(default)]
        pub page_info: Option<PageInfo>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Edge<T> {
        #[serde(default = "Option::default")]
        pub node: Option<T>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PageInfo {
        pub has_next_page: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchProductsNode {
        pub id: String,
        pub title: String,
        pub handle: String,
        #[serde(default)]
        pub description_html: Option<String>,
        #[serde(default)]
        pub product_type: Option<String>,
        #[serde(default)]
        pub vendor: Option<String>,
        #[serde(default)]
        pub tags: Option<Vec<String>>,
        #[serde(default)]
        pub status: Option<String>,
        #[serde(default)]
        pub featured_image: Option<SearchProductsNodeFeaturedImage>,
        #[serde(default = "Option::default")]
        pub variants: Option<Connection<SearchProductsNodeVariantsNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchProductsNodeFeaturedImage {
        pub url: String,
        #[serde(default)]
        pub alt_text: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchProductsNodeVariantsNode {
        pub id: String,
        pub title: String,
        #[serde(default)]
        pub sku: Option<String>,
        pub price: String,
        #[serde(default)]
        pub inventory_quantity: Option<i64>,
    }
}
