//! Error types for configuration and credential handling.
//!
//! Transport- and resource-level errors live next to the code that produces
//! them (see [`crate::clients`] and [`crate::rest`]); this module holds the
//! errors raised while turning CLI input into a usable
//! [`ShopContext`](crate::config::ShopContext).

use thiserror::Error;

/// Errors that can occur while validating configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g. '2025-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Errors raised while resolving the configured access token.
///
/// When the token setting names an external command (`< get-token.sh`), any
/// failure to run that command is reported here. The CLI maps these to its
/// own distinguished exit code.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token command could not be spawned or did not run to completion.
    #[error("access token command '{command}' failed: {source}")]
    CommandFailed {
        /// The command that was executed.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The token command ran but exited with a non-zero status.
    #[error("access token command '{command}' exited with status {status}: {stderr}")]
    CommandExited {
        /// The command that was executed.
        command: String,
        /// The command's exit status.
        status: std::process::ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// The token command produced output that is not valid UTF-8.
    #[error("access token command '{command}' produced non-UTF-8 output")]
    InvalidOutput {
        /// The command that was executed.
        command: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "nope".to_string(),
        };
        assert!(error.to_string().contains("nope"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        let _: &dyn std::error::Error = &error;
    }
}
