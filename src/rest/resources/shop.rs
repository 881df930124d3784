//! The Shop resource.

use crate::clients::RestClient;
use crate::rest::{decode_one, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The shop record behind the configured domain.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Shop {
    pub id: i64,
    pub name: Option<String>,
    pub shop_owner: Option<String>,
    pub email: Option<String>,
    pub customer_email: Option<String>,
    pub domain: Option<String>,
    pub myshopify_domain: Option<String>,
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
    pub country_name: Option<String>,
    pub currency: Option<String>,
    pub money_format: Option<String>,
    pub iana_timezone: Option<String>,
    pub primary_locale: Option<String>,
    pub plan_name: Option<String>,
    pub plan_display_name: Option<String>,
    pub password_enabled: Option<bool>,
    pub has_storefront: Option<bool>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Shop {
    /// Fetches the current shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn current(client: &RestClient) -> Result<Self, ResourceError> {
        let response = client
            .get("shop", None)
            .await
            .map_err(ResourceError::http("Cannot get info for shop"))?;
        decode_one(&response, "shop")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_deserializes_subset() {
        let shop: Shop = serde_json::from_value(json!({
            "id": 123,
            "name": "Test Shop",
            "myshopify_domain": "test-shop.myshopify.com",
            "currency": "USD",
            "plan_name": "basic",
            "password_enabled": false
        }))
        .unwrap();

        assert_eq!(shop.id, 123);
        assert_eq!(shop.currency.as_deref(), Some("USD"));
        assert_eq!(shop.password_enabled, Some(false));
    }
}
