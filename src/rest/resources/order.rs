//! The Order resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, decode_one, push_param, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Browser and session details recorded when an order was placed.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ClientDetails {
    pub accept_language: Option<String>,
    pub browser_height: Option<i64>,
    pub browser_width: Option<i64>,
    pub session_hash: Option<String>,
    pub user_agent: Option<String>,
}

/// An order, limited to the fields the CLI displays.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Order {
    pub id: i64,
    /// Order name as shown in the admin, e.g. `#1001`.
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_price: Option<String>,
    pub currency: Option<String>,
    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub browser_ip: Option<String>,
    pub client_details: Option<ClientDetails>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Filters for order listings.
#[derive(Clone, Debug, Default)]
pub struct OrderParams {
    /// Order status filter: `open`, `closed`, `cancelled`, or `any`.
    pub status: Option<String>,
    pub limit: Option<i64>,
}

impl Order {
    /// Lists the shop's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient, params: &OrderParams) -> Result<Vec<Self>, ResourceError> {
        let mut query = Vec::new();
        push_param(&mut query, "status", params.status.as_deref());
        push_param(&mut query, "limit", params.limit);

        let response = client
            .get("orders", Some(&query))
            .await
            .map_err(ResourceError::http("Cannot list orders"))?;
        decode_list(&response, "orders")
    }

    /// Fetches a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn find(client: &RestClient, id: i64) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("orders/{id}"), None)
            .await
            .map_err(ResourceError::http(format!("Cannot find order {id}")))?;
        decode_one(&response, "order")
    }

    /// Returns the browser display dimensions as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn display(&self) -> String {
        let details = self.client_details.clone().unwrap_or_default();
        format!(
            "{}x{}",
            details.browser_width.unwrap_or_default(),
            details.browser_height.unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_deserializes_client_details() {
        let order: Order = serde_json::from_value(json!({
            "id": 42,
            "browser_ip": "203.0.113.7",
            "client_details": {
                "accept_language": "en-US",
                "browser_height": 900,
                "browser_width": 1440,
                "session_hash": "abc123",
                "user_agent": "Mozilla/5.0"
            }
        }))
        .unwrap();

        assert_eq!(order.id, 42);
        assert_eq!(order.display(), "1440x900");
        assert_eq!(order.browser_ip.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_display_handles_missing_details() {
        let order: Order = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(order.display(), "0x0");
    }
}
