//! Application charge resources.
//!
//! Shopify bills apps through one-time application charges and recurring
//! application charges. Prices come back as decimal strings and stay that
//! way here; the CLI only displays them.

use crate::clients::RestClient;
use crate::rest::{decode_list, decode_one, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A one-time application charge.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApplicationCharge {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
    pub test: Option<bool>,
    pub return_url: Option<String>,
    pub confirmation_url: Option<String>,
    pub decorated_return_url: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Fields for creating a one-time charge.
#[derive(Clone, Debug, Default)]
pub struct NewCharge {
    pub name: String,
    /// Decimal price, e.g. `9.99`.
    pub price: String,
    pub test: bool,
    pub return_url: Option<String>,
}

impl NewCharge {
    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "name": self.name,
            "price": self.price,
            "test": self.test,
        });
        if let Some(return_url) = &self.return_url {
            body["return_url"] = json!(return_url);
        }
        body
    }
}

impl ApplicationCharge {
    /// Lists the shop's one-time charges.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let response = client
            .get("application_charges", None)
            .await
            .map_err(ResourceError::http("Cannot list one-time charges"))?;
        decode_list(&response, "application_charges")
    }

    /// Fetches a single one-time charge by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn find(client: &RestClient, id: i64) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("application_charges/{id}"), None)
            .await
            .map_err(ResourceError::http(format!(
                "Cannot get one-time charge {id}"
            )))?;
        decode_one(&response, "application_charge")
    }

    /// Creates a one-time charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn create(client: &RestClient, charge: &NewCharge) -> Result<Self, ResourceError> {
        let response = client
            .post(
                "application_charges",
                &json!({ "application_charge": charge.body() }),
            )
            .await
            .map_err(ResourceError::http("Cannot create charge"))?;
        decode_one(&response, "application_charge")
    }
}

/// A recurring application charge.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecurringApplicationCharge {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
    pub test: Option<bool>,
    pub activated_on: Option<String>,
    pub return_url: Option<String>,
    pub confirmation_url: Option<String>,
    pub decorated_return_url: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl RecurringApplicationCharge {
    /// Lists the shop's recurring charges.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let response = client
            .get("recurring_application_charges", None)
            .await
            .map_err(ResourceError::http("Cannot list recurring charges"))?;
        decode_list(&response, "recurring_application_charges")
    }

    /// Fetches a single recurring charge by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn find(client: &RestClient, id: i64) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("recurring_application_charges/{id}"), None)
            .await
            .map_err(ResourceError::http(format!(
                "Cannot get recurring charge {id}"
            )))?;
        decode_one(&response, "recurring_application_charge")
    }
}
