//! Product listing over the Admin GraphQL API.
//!
//! Product listings moved off the REST API; the query is built here and the
//! response flattened back into one JSON object per product so the output
//! layer can treat them like any other record.

use serde_json::{Map, Value};
use thiserror::Error;

const DEFAULT_FIELDS: &str = "id title handle status vendor productType createdAt updatedAt";
const DEFAULT_LIMIT: i64 = 10;

/// Errors raised while interpreting a product listing response.
#[derive(Debug, Error)]
pub enum ProductResponseError {
    /// The response carried a top-level `errors` array.
    #[error("GraphQL errors: {0}")]
    Errors(String),

    /// The response is missing part of the expected structure.
    #[error("invalid response structure: missing {0}")]
    Missing(&'static str),
}

/// Options controlling the product listing query.
#[derive(Clone, Debug, Default)]
pub struct ListProductsOptions {
    /// GraphQL field names to request; empty means the default set.
    pub fields: Vec<String>,
    /// Product ids to fetch. When set, filters are ignored.
    pub ids: Vec<i64>,
    /// Page size for filtered listings; `0` means the default of 10.
    pub limit: i64,
    /// Product status filter: `active`, `draft`, or `archived`.
    pub status: Option<String>,
}

impl ListProductsOptions {
    /// Returns `true` when this is an id lookup rather than a filtered
    /// listing.
    #[must_use]
    pub fn by_ids(&self) -> bool {
        !self.ids.is_empty()
    }
}

/// Builds the GraphQL query for the given options.
///
/// Id lookups use the `nodes` shape; filtered listings use `edges`/`node`.
#[must_use]
pub fn build_query(options: &ListProductsOptions) -> String {
    let fields = if options.fields.is_empty() {
        DEFAULT_FIELDS.to_string()
    } else {
        options.fields.join(" ")
    };

    if options.by_ids() {
        let ids: Vec<String> = options
            .ids
            .iter()
            .map(|id| format!(r#""gid://shopify/Product/{id}""#))
            .collect();

        format!(
            "{{ products(ids: [{}]) {{ nodes {{ {fields} }} }} }}",
            ids.join(", ")
        )
    } else {
        let mut args = vec![format!(
            "first: {}",
            if options.limit > 0 {
                options.limit
            } else {
                DEFAULT_LIMIT
            }
        )];

        if let Some(status) = &options.status {
            match status.to_uppercase().as_str() {
                "ACTIVE" => args.push(r#"query: "status:active""#.to_string()),
                "DRAFT" => args.push(r#"query: "status:draft""#.to_string()),
                "ARCHIVED" => args.push(r#"query: "status:archived""#.to_string()),
                // Unknown statuses fall through unfiltered
                _ => {}
            }
        }

        format!(
            "{{ products({}) {{ edges {{ node {{ {fields} }} }} }} }}",
            args.join(", ")
        )
    }
}

/// Flattens a product listing response into one object per product.
///
/// Global ids of the form `gid://shopify/Product/N` are rewritten to the
/// bare numeric `N`.
///
/// # Errors
///
/// Returns [`ProductResponseError`] when the response reports GraphQL errors
/// or does not have the shape the query asked for.
pub fn parse_response(
    response: &Value,
    by_ids: bool,
) -> Result<Vec<Map<String, Value>>, ProductResponseError> {
    if let Some(errors) = response.get("errors") {
        return Err(ProductResponseError::Errors(errors.to_string()));
    }

    let products = response
        .get("data")
        .ok_or(ProductResponseError::Missing("data"))?
        .get("products")
        .ok_or(ProductResponseError::Missing("products"))?;

    let nodes: Vec<&Value> = if by_ids {
        products
            .get("nodes")
            .and_then(Value::as_array)
            .ok_or(ProductResponseError::Missing("nodes"))?
            .iter()
            .collect()
    } else {
        products
            .get("edges")
            .and_then(Value::as_array)
            .ok_or(ProductResponseError::Missing("edges"))?
            .iter()
            .filter_map(|edge| edge.get("node"))
            .collect()
    };

    Ok(nodes
        .into_iter()
        .filter_map(Value::as_object)
        .map(|product| {
            let mut product = product.clone();
            if let Some(Value::String(gid)) = product.get("id") {
                product.insert("id".to_string(), Value::String(extract_numeric_id(gid)));
            }
            product
        })
        .collect())
}

/// Extracts the numeric id from a `gid://shopify/Product/N` global id.
/// Anything else is returned unchanged.
fn extract_numeric_id(gid: &str) -> String {
    let parts: Vec<&str> = gid.split('/').collect();
    if parts.len() >= 4 && parts[0] == "gid:" && parts[1].is_empty() && parts[2] == "shopify" {
        (*parts.last().unwrap_or(&gid)).to_string()
    } else {
        gid.to_string()
    }
}
