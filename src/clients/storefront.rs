//! Storefront metafield visibility operations.

use crate::clients::errors::GraphqlError;
use crate::clients::graphql::GraphqlClient;
use crate::config::ShopContext;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// No pagination; the Admin API caps a page at 250
const LIST_QUERY: &str = r#"
{
  metafieldStorefrontVisibilities(first: 250) {
    pageInfo {
      hasNextPage
    }
    edges {
      cursor
      node {
        id
        key
        namespace
        createdAt
        updatedAt
        legacyResourceId
        ownerType
      }
    }
  }
}
"#;

const CREATE_MUTATION: &str = r#"
mutation visibilityCreate($input: MetafieldStorefrontVisibilityInput!) {
  metafieldStorefrontVisibilityCreate(input: $input) {
    metafieldStorefrontVisibility {
      id
      key
      namespace
      createdAt
      updatedAt
      legacyResourceId
      ownerType
    }
    userErrors {
      field
      message
    }
  }
}
"#;

/// A metafield definition exposed to the Storefront API.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontVisibility {
    /// GraphQL global id.
    pub id: String,
    /// Numeric id as used by the REST API.
    #[serde(default)]
    pub legacy_resource_id: Option<String>,
    pub namespace: String,
    pub key: String,
    /// Resource type the metafield is attached to, e.g. `PRODUCT`.
    pub owner_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Input for creating a storefront visibility record.
#[derive(Clone, Debug)]
pub struct VisibilityInput {
    pub namespace: String,
    pub key: String,
    /// Owner type in GraphQL enum form, e.g. `PRODUCT` or `CUSTOMER`.
    pub owner_type: String,
}

/// Client for the storefront metafield visibility API.
#[derive(Debug)]
pub struct StorefrontClient {
    client: GraphqlClient,
}

impl StorefrontClient {
    /// Creates a new storefront client from a shop context and a resolved
    /// token.
    #[must_use]
    pub fn new(context: &ShopContext, access_token: &str) -> Self {
        Self {
            client: GraphqlClient::new(context, access_token),
        }
    }

    /// Lists storefront metafield visibilities (first page only).
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on a transport failure or when the response
    /// does not contain the expected edge list.
    pub async fn list(&self) -> Result<Vec<StorefrontVisibility>, GraphqlError> {
        let response = self.client.query(LIST_QUERY).await?;

        let edges = response
            .pointer("/data/metafieldStorefrontVisibilities/edges")
            .and_then(Value::as_array)
            .ok_or_else(|| GraphqlError::Shape {
                reason: "missing data.metafieldStorefrontVisibilities.edges".to_string(),
            })?;

        edges
            .iter()
            .map(|edge| {
                let node = edge.get("node").cloned().ok_or_else(|| GraphqlError::Shape {
                    reason: "edge without a node".to_string(),
                })?;
                serde_json::from_value(node).map_err(GraphqlError::Unmarshal)
            })
            .collect()
    }

    /// Exposes a metafield to the Storefront API.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on a transport failure, when the mutation
    /// reports user errors, or when the response shape is unexpected.
    pub async fn create(
        &self,
        input: &VisibilityInput,
    ) -> Result<StorefrontVisibility, GraphqlError> {
        let variables = json!({
            "input": {
                "namespace": input.namespace,
                "key": input.key,
                "ownerType": input.owner_type,
            }
        });

        let response = self.client.mutate(CREATE_MUTATION, &variables).await?;
        let payload = response
            .pointer("/data/metafieldStorefrontVisibilityCreate")
            .ok_or_else(|| GraphqlError::Shape {
                reason: "missing data.metafieldStorefrontVisibilityCreate".to_string(),
            })?;

        let user_errors = payload
            .get("userErrors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty());
        if let Some(errors) = user_errors {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            return Err(GraphqlError::Shape {
                reason: format!("visibility create failed: {}", messages.join("; ")),
            });
        }

        let visibility = payload
            .get("metafieldStorefrontVisibility")
            .cloned()
            .ok_or_else(|| GraphqlError::Shape {
                reason: "missing metafieldStorefrontVisibility in payload".to_string(),
            })?;

        serde_json::from_value(visibility).map_err(GraphqlError::Unmarshal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_deserializes_from_graphql_node() {
        let node = json!({
            "id": "gid://shopify/MetafieldStorefrontVisibility/1",
            "legacyResourceId": "1",
            "namespace": "inventory",
            "key": "warehouse",
            "ownerType": "PRODUCT",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        });

        let visibility: StorefrontVisibility = serde_json::from_value(node).unwrap();
        assert_eq!(visibility.namespace, "inventory");
        assert_eq!(visibility.owner_type, "PRODUCT");
        assert_eq!(visibility.legacy_resource_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_list_query_requests_full_page() {
        assert!(LIST_QUERY.contains("metafieldStorefrontVisibilities(first: 250)"));
    }
}
