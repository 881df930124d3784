//! HTTP transport for the Shopify Admin API.
//!
//! This module provides the [`HttpClient`] type used by the REST client to
//! make authenticated requests.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::config::ShopContext;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

/// CLI version from Cargo.toml, sent in the User-Agent header.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP method for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

/// A decoded HTTP response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body, decoded as JSON. Empty bodies decode to `{}`.
    pub body: Value,
}

impl HttpResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

/// HTTP client carrying the credentials and base URI for one shop.
///
/// The client handles:
/// - Base URI construction from the shop domain or the `api_host` override
/// - Default headers including User-Agent and credentials: the access token
///   when one is set, otherwise the private-app API key and password as HTTP
///   basic auth
/// - JSON response decoding
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given shop context.
    ///
    /// `access_token` must already be resolved; settings of the `< command`
    /// form are handled by [`crate::auth::resolve_token`] before a client is
    /// built.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(context: &ShopContext, access_token: &str) -> Self {
        let base_uri = context.base_url();

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), format!("sdt/{CLI_VERSION}"));
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !access_token.is_empty() {
            default_headers.insert(
                "X-Shopify-Access-Token".to_string(),
                access_token.to_string(),
            );
        } else if let (Some(api_key), Some(api_password)) =
            (context.api_key(), context.api_password())
        {
            // Private app key/password pairs authenticate as basic auth
            let credentials = BASE64.encode(format!("{api_key}:{api_password}"));
            default_headers.insert("Authorization".to_string(), format!("Basic {credentials}"));
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(context.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to `{base_uri}{path}` and decodes the JSON response.
    ///
    /// `path` must start with `/`. Query parameters are appended as-is; the
    /// body, when present, is sent as `application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The response body is not valid JSON (`Decode`)
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, path);
        debug!(method = ?method, %url, "sending request");

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            return Err(HttpError::Response {
                code,
                message: body_text,
            });
        }

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(HttpError::Decode)?
        };

        Ok(HttpResponse { code, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context(token: &str) -> (ShopContext, String) {
        let context = ShopContext::builder().shop("test-shop").build().unwrap();
        (context, token.to_string())
    }

    #[test]
    fn test_base_uri_from_shop_domain() {
        let (context, token) = test_context("test-access-token");
        let client = HttpClient::new(&context, &token);
        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
    }

    #[test]
    fn test_base_uri_from_api_host_override() {
        let context = ShopContext::builder()
            .shop("test-shop")
            .api_host("http://127.0.0.1:9999")
            .build()
            .unwrap();
        let client = HttpClient::new(&context, "token");
        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_access_token_header_injection() {
        let (context, token) = test_context("test-access-token");
        let client = HttpClient::new(&context, &token);
        assert_eq!(
            client.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_no_access_token_header_when_empty() {
        let (context, token) = test_context("");
        let client = HttpClient::new(&context, &token);
        assert!(client
            .default_headers()
            .get("X-Shopify-Access-Token")
            .is_none());
    }

    #[test]
    fn test_key_and_password_become_basic_auth() {
        let context = ShopContext::builder()
            .shop("test-shop")
            .api_key("test-key")
            .api_password("test-pass")
            .build()
            .unwrap();
        let client = HttpClient::new(&context, "");

        // base64("test-key:test-pass")
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic dGVzdC1rZXk6dGVzdC1wYXNz".to_string())
        );
        assert!(client
            .default_headers()
            .get("X-Shopify-Access-Token")
            .is_none());
    }

    #[test]
    fn test_access_token_wins_over_key_and_password() {
        let context = ShopContext::builder()
            .shop("test-shop")
            .api_key("test-key")
            .api_password("test-pass")
            .build()
            .unwrap();
        let client = HttpClient::new(&context, "test-access-token");

        assert!(client.default_headers().get("Authorization").is_none());
        assert_eq!(
            client.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let (context, token) = test_context("test-access-token");
        let client = HttpClient::new(&context, &token);
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let (context, token) = test_context("test-access-token");
        let client = HttpClient::new(&context, &token);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("sdt/"));
    }

    #[test]
    fn test_response_is_ok_range() {
        let ok = HttpResponse {
            code: 201,
            body: serde_json::json!({}),
        };
        let not_ok = HttpResponse {
            code: 404,
            body: serde_json::json!({}),
        };
        assert!(ok.is_ok());
        assert!(!not_ok.is_ok());
    }
}
