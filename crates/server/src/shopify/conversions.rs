//! Product type conversion functions.
//!
//! Flattens the connection-shaped `SearchProducts` response into core
//! [`Product`] records. Missing or null levels (`data`, `products`, `edges`,
//! `node`, `variants`) degrade to empty; order is kept as returned, since
//! Shopify ranks free-text results by relevance.

use graphql_client::Response;
use shopify_mcp_core::{Image, Money, Product, ProductId, ProductVariant, VariantId};

use super::queries::search_products::{
    Connection, ResponseData, SearchProductsNode, SearchProductsNodeVariantsNode,
};

/// Normalize a full GraphQL response. Callers check `errors` first.
pub fn normalize_response(response: Response<ResponseData>) -> Vec<Product> {
    response.data.map(normalize_products).unwrap_or_default()
}

/// Normalize the `data` object of a `SearchProducts` response.
pub fn normalize_products(data: ResponseData) -> Vec<Product> {
    flatten_connection(data.products)
        .map(convert_product)
        .collect()
}

fn flatten_connection<T>(connection: Option<Connection<T>>) -> impl Iterator<Item = T> {
    connection
        .and_then(|c| c.edges)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|edge| edge.node)
}

fn convert_product(product: SearchProductsNode) -> Product {
    Product {
        id: ProductId::new(product.id),
        title: product.title,
        handle: product.handle,
        description_html: product.description_html,
        product_type: product.product_type,
        vendor: product.vendor,
        tags: product.tags,
        status: product.status,
        featured_image: product.featured_image.map(|i| Image {
            url: i.url,
            alt_text: i.alt_text,
        }),
        variants: flatten_connection(product.variants)
            .map(convert_variant)
            .collect(),
    }
}

fn convert_variant(variant: SearchProductsNodeVariantsNode) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(variant.id),
        title: variant.title,
        sku: variant.sku,
        price: Money::new(variant.price),
        inventory_quantity: variant.inventory_quantity,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: serde_json::Value) -> Response<ResponseData> {
        serde_json::from_value(body).unwrap()
    }

    fn product_node(n: u32, variants: &[(&str, &str)]) -> serde_json::Value {
        let edges: Vec<_> = variants
            .iter()
            .enumerate()
            .map(|(i, (title, price))| {
                json!({
                    "node": {
                        "id": format!("gid://shopify/ProductVariant/{n}{i}"),
                        "title": title,
                        "sku": format!("SKU-{n}-{i}"),
                        "price": price,
                        "inventoryQuantity": i
                    }
                })
            })
            .collect();

        json!({
            "node": {
                "id": format!("gid://shopify/Product/{n}"),
                "title": format!("Product {n}"),
                "handle": format!("product-{n}"),
                "descriptionHtml": "<p>Soft.</p>",
                "productType": "Apparel",
                "vendor": "Acme",
                "tags": ["linen", "summer"],
                "status": "ACTIVE",
                "featuredImage": {"url": "https://cdn.shopify.com/p.png", "altText": "front"},
                "variants": {"edges": edges}
            }
        })
    }

    #[test]
    fn test_missing_data_is_empty() {
        assert!(normalize_response(parse(json!({}))).is_empty());
        assert!(normalize_response(parse(json!({"data": null}))).is_empty());
    }

    #[test]
    fn test_missing_products_is_empty() {
        assert!(normalize_response(parse(json!({"data": {}}))).is_empty());
        assert!(normalize_response(parse(json!({"data": {"products": null}}))).is_empty());
    }

    #[test]
    fn test_missing_edges_is_empty() {
        assert!(normalize_response(parse(json!({"data": {"products": {}}}))).is_empty());
        assert!(
            normalize_response(parse(json!({"data": {"products": {"edges": null}}}))).is_empty()
        );
        assert!(normalize_response(parse(json!({"data": {"products": {"edges": []}}}))).is_empty());
    }

    #[test]
    fn test_null_nodes_are_skipped() {
        let response = parse(json!({
            "data": {"products": {"edges": [{"node": null}, product_node(1, &[])]}}
        }));
        let products = normalize_response(response);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "gid://shopify/Product/1");
    }

    #[test]
    fn test_variants_are_flattened_with_fields_intact() {
        let response = parse(json!({
            "data": {"products": {"edges": [
                product_node(7, &[("Small", "19.90"), ("Medium", "21.00"), ("Large", "23.10")])
            ]}}
        }));
        let products = normalize_response(response);
        let product = &products[0];

        assert_eq!(product.variants.len(), 3);
        assert_eq!(product.title, "Product 7");
        assert_eq!(product.handle, "product-7");
        assert_eq!(product.description_html.as_deref(), Some("<p>Soft.</p>"));
        assert_eq!(product.product_type.as_deref(), Some("Apparel"));
        assert_eq!(product.vendor.as_deref(), Some("Acme"));
        assert_eq!(
            product.tags.as_deref(),
            Some(&["linen".to_string(), "summer".to_string()][..])
        );
        assert_eq!(product.status.as_deref(), Some("ACTIVE"));
        assert_eq!(
            product.featured_image,
            Some(Image {
                url: "https://cdn.shopify.com/p.png".to_string(),
                alt_text: Some("front".to_string()),
            })
        );

        let medium = &product.variants[1];
        assert_eq!(medium.id.as_str(), "gid://shopify/ProductVariant/71");
        assert_eq!(medium.title, "Medium");
        assert_eq!(medium.sku.as_deref(), Some("SKU-7-1"));
        assert_eq!(medium.price.as_str(), "21.00");
        assert_eq!(medium.inventory_quantity, Some(1));
    }

    #[test]
    fn test_missing_variants_is_empty() {
        let response = parse(json!({
            "data": {"products": {"edges": [
                {"node": {"id": "gid://shopify/Product/1", "title": "Bare", "handle": "bare"}},
                {"node": {"id": "gid://shopify/Product/2", "title": "Null", "handle": "null", "variants": null}},
                {"node": {"id": "gid://shopify/Product/3", "title": "Empty", "handle": "empty", "variants": {}}}
            ]}}
        }));
        let products = normalize_response(response);

        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.variants.is_empty()));
        assert!(products[0].description_html.is_none());
        assert!(products[0].featured_image.is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let response = parse(json!({
            "data": {"products": {"edges": [
                product_node(3, &[("C", "1.00"), ("A", "2.00")]),
                product_node(1, &[]),
                product_node(2, &[("B", "3.00")])
            ]}}
        }));
        let products = normalize_response(response);

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "gid://shopify/Product/3",
                "gid://shopify/Product/1",
                "gid://shopify/Product/2"
            ]
        );
        let titles: Vec<_> = products[0].variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["C", "A"]);
    }
}
