//! Typed Admin REST resources.
//!
//! Each resource is a serde struct mirroring the fields the CLI cares about,
//! with inherent async operations that take a [`RestClient`]. The Admin REST
//! API wraps every payload in a resource-named key (`{"order": {...}}`,
//! `{"webhooks": [...]}`); the helpers here unwrap that envelope.

pub mod resources;

pub use resources::{
    AccessScope, ApplicationCharge, Asset, ClientDetails, Metafield, MetafieldOwner,
    MetafieldParams, NewCharge, NewWebhook, Order, OrderParams, RecurringApplicationCharge,
    ScriptTag, Shop, Theme, Webhook,
};

use crate::clients::{HttpError, HttpResponse};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced by REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The underlying HTTP request failed.
    #[error("{operation}: {source}")]
    Http {
        /// What the resource was doing, e.g. "Cannot list webhooks".
        operation: String,
        /// The transport-level error.
        #[source]
        source: HttpError,
    },

    /// The response body did not contain the expected resource key.
    #[error("Response missing expected key '{key}'")]
    MissingKey {
        /// The resource key that was expected.
        key: &'static str,
    },

    /// The resource payload could not be deserialized.
    #[error("Failed to decode '{key}': {source}")]
    Decode {
        /// The resource key being decoded.
        key: &'static str,
        /// The deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    pub(crate) fn http(operation: impl Into<String>) -> impl FnOnce(HttpError) -> Self {
        let operation = operation.into();
        move |source| Self::Http { operation, source }
    }
}

/// Unwraps a list payload from under `key` in a response body.
pub(crate) fn decode_list<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &'static str,
) -> Result<Vec<T>, ResourceError> {
    match response.body.get(key) {
        // A null or absent list is an empty list
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|source| ResourceError::Decode { key, source }),
    }
}

/// Unwraps a single payload from under `key` in a response body.
pub(crate) fn decode_one<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &'static str,
) -> Result<T, ResourceError> {
    let value = response
        .body
        .get(key)
        .ok_or(ResourceError::MissingKey { key })?;
    serde_json::from_value(value.clone()).map_err(|source| ResourceError::Decode { key, source })
}

/// Appends a query parameter when the value is present.
pub(crate) fn push_param(
    query: &mut Vec<(String, String)>,
    name: &str,
    value: Option<impl ToString>,
) {
    if let Some(value) = value {
        query.push((name.to_string(), value.to_string()));
    }
}
