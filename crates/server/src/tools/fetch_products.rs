//! `fetch-products` result formatting.
//!
//! Turns a [`SearchOutcome`] into the text envelope returned to the MCP
//! caller. Exactly one of four outcomes is produced per invocation:
//! transport failure, GraphQL errors, no results, or N results.

use crate::shopify::{SearchOutcome, conversions::normalize_response};

use super::ResultEnvelope;

/// Prefix shared by both error outcomes.
const ERROR_PREFIX: &str = "Error fetching products";

/// Format the outcome of a product search for `search_term`.
#[must_use]
pub fn format_outcome(search_term: &str, outcome: SearchOutcome) -> ResultEnvelope {
    let response = match outcome {
        SearchOutcome::TransportFailure { message } => {
            return ResultEnvelope::error(format!("{ERROR_PREFIX}: {message}"));
        }
        SearchOutcome::Success(response) => response,
    };

    if let Some(errors) = response.errors.as_ref().filter(|e| !e.is_empty()) {
        let serialized = serde_json::to_string(errors)
            .unwrap_or_else(|e| format!("unserializable GraphQL errors ({e})"));
        return ResultEnvelope::error(format!("{ERROR_PREFIX}: {serialized}"));
    }

    let products = normalize_response(response);
    if products.is_empty() {
        return ResultEnvelope::text(format!("No products found matching \"{search_term}\""));
    }

    match serde_json::to_string_pretty(&products) {
        Ok(json) => ResultEnvelope {
            blocks: vec![
                format!(
                    "Found {} products matching \"{search_term}\":",
                    products.len()
                ),
                json,
            ],
            is_error: false,
        },
        Err(e) => ResultEnvelope::error(format!("{ERROR_PREFIX}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use graphql_client::Response;
    use serde_json::{Value, json};

    use super::*;
    use crate::shopify::queries::search_products::ResponseData;

    fn success(body: Value) -> SearchOutcome {
        let response: Response<ResponseData> = serde_json::from_value(body).unwrap();
        SearchOutcome::Success(response)
    }

    fn variant(id: u32, price: &str) -> Value {
        json!({
            "node": {
                "id": format!("gid://shopify/ProductVariant/{id}"),
                "title": "Default Title",
                "sku": null,
                "price": price,
                "inventoryQuantity": 5
            }
        })
    }

    #[test]
    fn test_empty_edges_reports_no_products() {
        let envelope = format_outcome("shoes", success(json!({"data": {"products": {"edges": []}}})));

        assert!(!envelope.is_error);
        assert_eq!(envelope.blocks, ["No products found matching \"shoes\""]);
    }

    #[test]
    fn test_missing_data_reports_no_products() {
        let envelope = format_outcome("hats", success(json!({"data": null})));
        assert_eq!(envelope.blocks, ["No products found matching \"hats\""]);
    }

    #[test]
    fn test_graphql_errors_are_serialized() {
        let envelope = format_outcome(
            "(",
            success(json!({"errors": [{"message": "Invalid search syntax"}]})),
        );

        assert!(envelope.is_error);
        assert_eq!(envelope.blocks.len(), 1);
        let text = &envelope.blocks[0];
        assert!(text.starts_with("Error fetching products: "), "{text}");

        let serialized = text.trim_start_matches("Error fetching products: ");
        let errors: Value = serde_json::from_str(serialized).unwrap();
        assert_eq!(errors[0]["message"], "Invalid search syntax");
    }

    #[test]
    fn test_graphql_errors_take_precedence_over_data() {
        let envelope = format_outcome(
            "shoes",
            success(json!({
                "data": {"products": {"edges": [{"node": {
                    "id": "gid://shopify/Product/1", "title": "Shoe", "handle": "shoe"
                }}]}},
                "errors": [{"message": "Throttled"}]
            })),
        );

        assert!(envelope.is_error);
        assert!(envelope.blocks[0].contains("Throttled"));
    }

    #[test]
    fn test_empty_errors_list_is_ignored() {
        let envelope = format_outcome(
            "shoes",
            success(json!({"data": {"products": {"edges": []}}, "errors": []})),
        );
        assert!(!envelope.is_error);
        assert_eq!(envelope.blocks, ["No products found matching \"shoes\""]);
    }

    #[test]
    fn test_transport_failure_message() {
        let envelope = format_outcome(
            "shoes",
            SearchOutcome::TransportFailure {
                message: "ECONNRESET".to_string(),
            },
        );

        assert!(envelope.is_error);
        assert_eq!(envelope.blocks, ["Error fetching products: ECONNRESET"]);
    }

    #[test]
    fn test_two_products_are_listed_as_json() {
        let envelope = format_outcome(
            "runner",
            success(json!({"data": {"products": {"edges": [
                {"node": {
                    "id": "gid://shopify/Product/1",
                    "title": "Runner",
                    "handle": "runner",
                    "variants": {"edges": [variant(11, "89.00"), variant(12, "91.50")]}
                }},
                {"node": {
                    "id": "gid://shopify/Product/2",
                    "title": "Runner Socks",
                    "handle": "runner-socks",
                    "variants": {"edges": []}
                }}
            ]}}})),
        );

        assert!(!envelope.is_error);
        assert_eq!(envelope.blocks.len(), 2);
        assert_eq!(envelope.blocks[0], "Found 2 products matching \"runner\":");

        let products: Value = serde_json::from_str(&envelope.blocks[1]).unwrap();
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["variants"].as_array().unwrap().len(), 2);
        assert_eq!(products[0]["variants"][1]["price"], "91.50");
        assert_eq!(products[1]["variants"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_product_json_is_pretty_printed_with_two_spaces() {
        let envelope = format_outcome(
            "runner",
            success(json!({"data": {"products": {"edges": [{"node": {
                "id": "gid://shopify/Product/1", "title": "Runner", "handle": "runner"
            }}]}}})),
        );

        assert!(envelope.blocks[1].starts_with("[\n  {\n    \"id\": \"gid://shopify/Product/1\""));
    }

    #[test]
    fn test_every_outcome_produces_text() {
        let outcomes = [
            SearchOutcome::TransportFailure {
                message: String::new(),
            },
            success(json!({"errors": [{"message": "boom"}]})),
            success(json!({})),
            success(json!({"data": {"products": {"edges": [{"node": {
                "id": "gid://shopify/Product/1", "title": "Runner", "handle": "runner"
            }}]}}})),
        ];

        for outcome in outcomes {
            let envelope = format_outcome("q", outcome);
            assert!(!envelope.blocks.is_empty());
            assert!(envelope.blocks.iter().all(|b| !b.is_empty()));
        }
    }
}
