//! Client error types.

use thiserror::Error;

/// Errors produced by the HTTP transport layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server returned a non-success status code.
    #[error("HTTP request failed with status {code}: {message}")]
    Response {
        /// The HTTP status code.
        code: u16,
        /// The response body, as returned by the server.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request path is invalid.
    #[error("Invalid request path: {reason}")]
    InvalidPath {
        /// Why the path was rejected.
        reason: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors produced by the GraphQL client.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request body could not be serialized.
    #[error("Failed to marshal GraphQL request body: {0}")]
    Marshal(#[source] serde_json::Error),

    /// The request could not be sent.
    #[error("Failed to make GraphQL request: {0}")]
    Request(#[source] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("GraphQL request failed with status {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, as returned by the server.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to unmarshal GraphQL response body: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// The response decoded, but a field the caller relies on is missing.
    #[error("Unexpected GraphQL response shape: {reason}")]
    Shape {
        /// Which part of the response was missing or malformed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message() {
        let error = HttpError::Response {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_graphql_status_error_message() {
        let error = GraphqlError::Status {
            code: 401,
            message: "unauthorized".to_string(),
        };
        assert!(error.to_string().contains("GraphQL request failed"));
    }
}
