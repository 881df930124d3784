//! The Webhook resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, decode_one, push_param, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A webhook subscription.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Webhook {
    pub id: i64,
    pub address: Option<String>,
    pub topic: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    pub format: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Fields for creating a webhook subscription.
#[derive(Clone, Debug, Default)]
pub struct NewWebhook {
    pub address: String,
    /// Topic name, e.g. `orders/create`.
    pub topic: String,
    pub fields: Vec<String>,
    /// Payload format, `json` or `xml`.
    pub format: String,
}

impl Webhook {
    /// Lists webhooks, optionally filtered by topic.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient, topic: Option<&str>) -> Result<Vec<Self>, ResourceError> {
        let mut query = Vec::new();
        push_param(&mut query, "topic", topic);

        let operation = topic.map_or_else(
            || "Cannot list webhooks".to_string(),
            |topic| format!("Cannot list webhooks for topic {topic}"),
        );

        let response = client
            .get("webhooks", Some(&query))
            .await
            .map_err(ResourceError::http(operation))?;
        decode_list(&response, "webhooks")
    }

    /// Creates a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn create(client: &RestClient, webhook: &NewWebhook) -> Result<Self, ResourceError> {
        let mut body = json!({
            "address": webhook.address,
            "topic": webhook.topic,
            "format": webhook.format,
        });
        if !webhook.fields.is_empty() {
            body["fields"] = json!(webhook.fields);
        }

        let response = client
            .post("webhooks", &json!({ "webhook": body }))
            .await
            .map_err(ResourceError::http("Cannot create webhook"))?;
        decode_one(&response, "webhook")
    }

    /// Deletes a webhook by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(client: &RestClient, id: i64) -> Result<(), ResourceError> {
        client
            .delete(&format!("webhooks/{id}"))
            .await
            .map_err(ResourceError::http(format!("Cannot delete webhook {id}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_deserializes_with_defaults() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": 7,
            "address": "https://example.com/hooks",
            "topic": "orders/create"
        }))
        .unwrap();

        assert_eq!(webhook.id, 7);
        assert!(webhook.fields.is_empty());
        assert!(webhook.format.is_none());
    }
}
