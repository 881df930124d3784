//! The theme Asset resource.

use crate::clients::RestClient;
use crate::rest::{decode_one, ResourceError};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A file within a theme.
///
/// Exactly one of `value`, `attachment`, or `src` should be set when
/// uploading: UTF-8 text goes in `value`, binary content goes base64-encoded
/// in `attachment`, and remote sources are fetched by Shopify from `src`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Asset {
    /// Path of the asset within the theme, e.g. `assets/logo.png`.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl Asset {
    /// Creates or replaces an asset in the given theme.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn update(&self, client: &RestClient, theme_id: i64) -> Result<Self, ResourceError> {
        let response = client
            .put(&format!("themes/{theme_id}/assets"), &json!({ "asset": self }))
            .await
            .map_err(ResourceError::http(format!(
                "Cannot upload asset {} to theme {theme_id}",
                self.key
            )))?;
        decode_one(&response, "asset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_serializes_only_set_fields() {
        let asset = Asset {
            key: "assets/app.js".to_string(),
            value: Some("console.log(1)".to_string()),
            ..Asset::default()
        };

        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["key"], "assets/app.js");
        assert_eq!(json["value"], "console.log(1)");
        assert!(json.get("attachment").is_none());
        assert!(json.get("src").is_none());
    }
}
