//! The Theme resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, push_param, ResourceError};
use serde::{Deserialize, Serialize};

/// A theme installed on the shop.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Theme {
    pub id: i64,
    pub name: Option<String>,
    /// `main` for the published theme, `unpublished` or `demo` otherwise.
    pub role: Option<String>,
    pub previewable: Option<bool>,
    pub processing: Option<bool>,
}

impl Theme {
    /// Lists the shop's themes, optionally limited to the given fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient, fields: Option<&str>) -> Result<Vec<Self>, ResourceError> {
        let mut query = Vec::new();
        push_param(&mut query, "fields", fields);

        let response = client
            .get("themes", Some(&query))
            .await
            .map_err(ResourceError::http("Cannot list themes"))?;
        decode_list(&response, "themes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_deserializes_fields_subset() {
        let theme: Theme = serde_json::from_value(json!({
            "id": 828155753,
            "role": "main"
        }))
        .unwrap();

        assert_eq!(theme.id, 828_155_753);
        assert_eq!(theme.role.as_deref(), Some("main"));
        assert!(theme.name.is_none());
    }
}
