//! Admin GraphQL API client.

use crate::clients::errors::GraphqlError;
use crate::clients::http_client::CLI_VERSION;
use crate::config::ShopContext;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Client for the Shopify Admin GraphQL API.
///
/// The endpoint is `{base}/admin/api/{version}/graphql.json`; when no API
/// version is configured the version segment is omitted entirely and Shopify
/// serves its current default (`{base}/admin/api/graphql.json`).
///
/// The client decodes the full response body and returns it as a
/// [`serde_json::Value`]; interpreting the GraphQL `errors` envelope is left
/// to callers, which know what shape they asked for.
#[derive(Debug)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from a shop context and a resolved token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(context: &ShopContext, access_token: &str) -> Self {
        let version_segment = context
            .api_version()
            .map_or_else(String::new, |v| format!("/{v}"));
        let endpoint = format!("{}/admin/api{version_segment}/graphql.json", context.base_url());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(context.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            access_token: access_token.to_string(),
        }
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a query with no variables.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request cannot be built, sent, or the
    /// response decoded, or if the server responds with a non-2xx status.
    pub async fn query(&self, query: &str) -> Result<Value, GraphqlError> {
        self.execute(query, None).await
    }

    /// Executes a query or mutation with variables.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request cannot be built, sent, or the
    /// response decoded, or if the server responds with a non-2xx status.
    pub async fn mutate(&self, query: &str, variables: &Value) -> Result<Value, GraphqlError> {
        self.execute(query, Some(variables)).await
    }

    async fn execute(&self, query: &str, variables: Option<&Value>) -> Result<Value, GraphqlError> {
        let request = GraphqlRequest { query, variables };
        let body = serde_json::to_vec(&request).map_err(GraphqlError::Marshal)?;

        debug!(endpoint = %self.endpoint, "sending GraphQL request");

        let res = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", format!("sdt/{CLI_VERSION}"))
            .header("X-Shopify-Access-Token", &self.access_token)
            .body(body)
            .send()
            .await
            .map_err(GraphqlError::Request)?;

        let code = res.status().as_u16();
        let body_text = res.text().await.map_err(GraphqlError::Request)?;

        if !(200..=299).contains(&code) {
            return Err(GraphqlError::Status {
                code,
                message: body_text,
            });
        }

        serde_json::from_str(&body_text).map_err(GraphqlError::Unmarshal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopContext;

    #[test]
    fn test_endpoint_with_version() {
        let context = ShopContext::builder()
            .shop("test-shop")
            .api_version("2025-01")
            .build()
            .unwrap();
        let client = GraphqlClient::new(&context, "token");
        assert_eq!(
            client.endpoint(),
            "https://test-shop.myshopify.com/admin/api/2025-01/graphql.json"
        );
    }

    #[test]
    fn test_endpoint_without_version_omits_segment() {
        let context = ShopContext::builder().shop("test-shop").build().unwrap();
        let client = GraphqlClient::new(&context, "token");
        assert_eq!(
            client.endpoint(),
            "https://test-shop.myshopify.com/admin/api/graphql.json"
        );
    }

    #[test]
    fn test_request_body_omits_empty_variables() {
        let request = GraphqlRequest {
            query: "{ shop { name } }",
            variables: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"query":"{ shop { name } }"}"#);
    }

    #[test]
    fn test_request_body_includes_variables() {
        let variables = serde_json::json!({"id": 1});
        let request = GraphqlRequest {
            query: "query($id: ID!) { node(id: $id) { id } }",
            variables: Some(&variables),
        };
        let json: Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(json["variables"]["id"], 1);
    }
}
