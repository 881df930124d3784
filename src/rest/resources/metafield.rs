//! The Metafield resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, push_param, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A metafield attached to the shop or one of its resources.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Metafield {
    pub id: i64,
    pub namespace: String,
    pub key: String,
    /// Metafield values can be strings, numbers, or JSON documents.
    pub value: Value,
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<i64>,
    pub owner_resource: Option<String>,
    pub admin_graphql_api_id: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Resource types whose metafields can be listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetafieldOwner {
    Customer,
    Product,
    Variant,
}

impl MetafieldOwner {
    /// The path segment for the owner's metafield collection.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Customer => "customers",
            Self::Product => "products",
            Self::Variant => "variants",
        }
    }

    /// Lower-case singular name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Product => "product",
            Self::Variant => "variant",
        }
    }
}

/// Filters for metafield listings.
#[derive(Clone, Debug, Default)]
pub struct MetafieldParams {
    pub namespace: Option<String>,
    pub key: Option<String>,
}

impl MetafieldParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "namespace", self.namespace.as_deref());
        push_param(&mut query, "key", self.key.as_deref());
        query
    }
}

impl Metafield {
    /// Lists shop-level metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn list_for_shop(
        client: &RestClient,
        params: &MetafieldParams,
    ) -> Result<Vec<Self>, ResourceError> {
        let response = client
            .get("metafields", Some(&params.to_query()))
            .await
            .map_err(ResourceError::http("Cannot list metafields for shop"))?;
        decode_list(&response, "metafields")
    }

    /// Lists metafields for a specific owner resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn list_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        id: i64,
        params: &MetafieldParams,
    ) -> Result<Vec<Self>, ResourceError> {
        let path = format!("{}/{id}/metafields", owner.path_segment());
        let response = client
            .get(&path, Some(&params.to_query()))
            .await
            .map_err(ResourceError::http(format!(
                "Cannot list metafields for {} {id}",
                owner.name()
            )))?;
        decode_list(&response, "metafields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metafield_deserializes_typed_value() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 1,
            "namespace": "inventory",
            "key": "warehouse",
            "value": {"location": "east"},
            "type": "json",
            "admin_graphql_api_id": "gid://shopify/Metafield/1",
            "created_at": "2024-01-01T00:00:00-05:00",
            "updated_at": "2024-06-01T00:00:00-05:00"
        }))
        .unwrap();

        assert_eq!(metafield.namespace, "inventory");
        assert_eq!(metafield.value_type.as_deref(), Some("json"));
        assert!(metafield.value.is_object());
        assert!(metafield.created_at.is_some());
    }

    #[test]
    fn test_owner_path_segments() {
        assert_eq!(MetafieldOwner::Customer.path_segment(), "customers");
        assert_eq!(MetafieldOwner::Product.path_segment(), "products");
        assert_eq!(MetafieldOwner::Variant.path_segment(), "variants");
    }

    #[test]
    fn test_params_serialize_to_query() {
        let params = MetafieldParams {
            namespace: Some("inventory".to_string()),
            key: None,
        };
        assert_eq!(
            params.to_query(),
            vec![("namespace".to_string(), "inventory".to_string())]
        );
    }
}
