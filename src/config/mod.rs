//! Per-invocation shop configuration.
//!
//! A [`ShopContext`] is built once from the parsed command line and passed by
//! reference into everything that talks to the API. It carries the validated
//! shop domain, credentials, the optional API version, and transport knobs.
//!
//! # Example
//!
//! ```rust
//! use sdt::config::ShopContext;
//!
//! let context = ShopContext::builder()
//!     .shop("my-store")
//!     .access_token("shpat_abc123")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(context.shop().shop_name(), "my-store");
//! ```

mod newtypes;
mod version;

pub use newtypes::ShopDomain;
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration for a single CLI invocation.
#[derive(Clone, Debug)]
pub struct ShopContext {
    shop: ShopDomain,
    api_key: Option<String>,
    api_password: Option<String>,
    access_token: Option<String>,
    api_version: Option<ApiVersion>,
    api_host: Option<String>,
    timeout: Duration,
}

impl ShopContext {
    /// Creates a new builder for constructing a context.
    #[must_use]
    pub fn builder() -> ShopContextBuilder {
        ShopContextBuilder::default()
    }

    /// Returns the validated shop domain.
    #[must_use]
    pub fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the API password, if configured.
    #[must_use]
    pub fn api_password(&self) -> Option<&str> {
        self.api_password.as_deref()
    }

    /// Returns the raw access token setting, if configured.
    ///
    /// This value may name an external command (`< get-token.sh`); resolve it
    /// with [`crate::auth::resolve_token`] before sending it on the wire.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the configured API version, if any.
    #[must_use]
    pub fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the API host override, if configured.
    ///
    /// When set, clients send requests to this base URL instead of
    /// `https://{shop}.myshopify.com`. Used for tests and local proxies.
    #[must_use]
    pub fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the base URL requests are sent to.
    ///
    /// The API host override wins when present; otherwise this is the shop's
    /// `https://{shop}.myshopify.com` origin.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |host| host.trim_end_matches('/').to_string(),
        )
    }
}

/// Builder for [`ShopContext`].
#[derive(Clone, Debug, Default)]
pub struct ShopContextBuilder {
    shop: Option<String>,
    api_key: Option<String>,
    api_password: Option<String>,
    access_token: Option<String>,
    api_version: Option<String>,
    api_host: Option<String>,
    timeout: Option<Duration>,
}

impl ShopContextBuilder {
    /// Sets the shop domain (short or full form).
    #[must_use]
    pub fn shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = Some(shop.into());
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API password.
    #[must_use]
    pub fn api_password(mut self, api_password: impl Into<String>) -> Self {
        self.api_password = Some(api_password.into());
        self
    }

    /// Sets the raw access token setting.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Sets the API host override.
    #[must_use]
    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the context, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no shop was set, or a
    /// validation error for a malformed shop domain or API version.
    pub fn build(self) -> Result<ShopContext, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let shop = ShopDomain::new(shop)?;

        let api_version = self.api_version.map(ApiVersion::new).transpose()?;

        Ok(ShopContext {
            shop,
            api_key: self.api_key,
            api_password: self.api_password,
            access_token: self.access_token,
            api_version,
            api_host: self.api_host,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

// ShopContext is shared by reference across async command handlers.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopContext>();
};
