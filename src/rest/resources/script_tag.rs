//! The ScriptTag resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, push_param, ResourceError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A script tag injected into the storefront.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScriptTag {
    pub id: i64,
    pub src: Option<String>,
    pub event: Option<String>,
    pub display_scope: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl ScriptTag {
    /// Lists script tags, optionally filtered by source URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient, src: Option<&str>) -> Result<Vec<Self>, ResourceError> {
        let mut query = Vec::new();
        push_param(&mut query, "src", src);

        let operation = src.map_or_else(
            || "Cannot list ScriptTags".to_string(),
            |src| format!("Cannot list script tag with URL {src}"),
        );

        let response = client
            .get("script_tags", Some(&query))
            .await
            .map_err(ResourceError::http(operation))?;
        decode_list(&response, "script_tags")
    }

    /// Deletes a script tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(client: &RestClient, id: i64) -> Result<(), ResourceError> {
        client
            .delete(&format!("script_tags/{id}"))
            .await
            .map_err(ResourceError::http("Cannot delete script tag"))?;
        Ok(())
    }
}
