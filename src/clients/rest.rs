//! Admin REST API client.

use crate::clients::errors::HttpError;
use crate::clients::http_client::{HttpClient, HttpMethod, HttpResponse};
use crate::config::{ApiVersion, ShopContext};
use serde_json::Value;

/// Client for the Shopify Admin REST API.
///
/// Wraps [`HttpClient`] with Admin REST path construction: requests go to
/// `/admin/api/{version}/{path}` where the version defaults to the latest
/// stable release. Paths under `oauth/` are not versioned and go to
/// `/admin/{path}` instead.
///
/// # Example
///
/// ```rust,no_run
/// use sdt::clients::RestClient;
/// use sdt::config::ShopContext;
///
/// # async fn example() -> Result<(), sdt::clients::HttpError> {
/// let context = ShopContext::builder()
///     .shop("my-store")
///     .access_token("shpat_abc123")
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&context, "shpat_abc123");
/// let response = client.get("shop.json", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RestClient {
    http: HttpClient,
    api_version: ApiVersion,
}

impl RestClient {
    /// Creates a new REST client from a shop context and a resolved token.
    #[must_use]
    pub fn new(context: &ShopContext, access_token: &str) -> Self {
        let api_version = context
            .api_version()
            .cloned()
            .unwrap_or_else(ApiVersion::latest);

        Self {
            http: HttpClient::new(context, access_token),
            api_version,
        }
    }

    /// Returns the API version this client addresses.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path, a transport failure, or a
    /// non-2xx response.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path, a transport failure, or a
    /// non-2xx response.
    pub async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Post, path, None, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path, a transport failure, or a
    /// non-2xx response.
    pub async fn put(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Put, path, None, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path, a transport failure, or a
    /// non-2xx response.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Delete, path, None, None).await
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let path = normalize_path(path)?;
        let full_path = if path.starts_with("oauth/") {
            // OAuth endpoints live outside the versioned API
            format!("/admin/{path}")
        } else {
            format!("/admin/api/{}/{path}", self.api_version)
        };

        self.http.request(method, &full_path, query, body).await
    }
}

/// Normalizes a resource path: strips a leading slash and guarantees exactly
/// one `.json` suffix.
fn normalize_path(path: &str) -> Result<String, HttpError> {
    let path = path.trim().trim_start_matches('/');

    if path.is_empty() {
        return Err(HttpError::InvalidPath {
            reason: "path is empty".to_string(),
        });
    }

    if path.ends_with(".json") {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_appends_json_suffix() {
        assert_eq!(normalize_path("shop").unwrap(), "shop.json");
        assert_eq!(normalize_path("orders/42").unwrap(), "orders/42.json");
    }

    #[test]
    fn test_normalize_path_keeps_existing_suffix() {
        assert_eq!(normalize_path("shop.json").unwrap(), "shop.json");
    }

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/webhooks").unwrap(), "webhooks.json");
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        assert!(normalize_path("").is_err());
        assert!(normalize_path("/").is_err());
    }

    #[test]
    fn test_client_defaults_to_latest_version() {
        let context = ShopContext::builder().shop("test-shop").build().unwrap();
        let client = RestClient::new(&context, "token");
        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_client_uses_configured_version() {
        let context = ShopContext::builder()
            .shop("test-shop")
            .api_version("2024-01")
            .build()
            .unwrap();
        let client = RestClient::new(&context, "token");
        assert_eq!(client.api_version().as_ref(), "2024-01");
    }
}
