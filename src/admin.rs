//! Admin deep-link URLs.
//!
//! Builds `https://{shop}.myshopify.com/admin` URLs for the pages the CLI
//! can open, and resolves the currently published theme.

use crate::clients::RestClient;
use crate::config::ShopDomain;
use crate::rest::{ResourceError, Theme};
use thiserror::Error;

/// Errors raised while resolving an admin URL target.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The shop has no theme with role `main`.
    #[error("No published theme")]
    NoPublishedTheme,

    /// Listing themes failed.
    #[error("Error finding published theme: {0}")]
    ThemeLookup(#[from] ResourceError),
}

/// Builder for admin page URLs.
#[derive(Clone, Debug)]
pub struct AdminUrl {
    endpoint: String,
}

impl AdminUrl {
    /// Creates a URL builder for the given shop.
    #[must_use]
    pub fn new(shop: &ShopDomain) -> Self {
        Self {
            endpoint: format!("https://{}/admin", shop.as_ref()),
        }
    }

    /// The orders listing page.
    #[must_use]
    pub fn orders(&self, query: &[(&str, &str)]) -> String {
        self.build("/orders", query)
    }

    /// A single order's page.
    #[must_use]
    pub fn order(&self, id: i64, query: &[(&str, &str)]) -> String {
        self.build(&format!("/orders/{id}"), query)
    }

    /// The products listing page.
    #[must_use]
    pub fn products(&self, query: &[(&str, &str)]) -> String {
        self.build("/products", query)
    }

    /// A single product's page.
    #[must_use]
    pub fn product(&self, id: i64, query: &[(&str, &str)]) -> String {
        self.build(&format!("/products/{id}"), query)
    }

    /// The themes section of the admin.
    #[must_use]
    pub fn themes(&self, query: &[(&str, &str)]) -> String {
        self.build("/themes", query)
    }

    /// A single theme's editing page.
    #[must_use]
    pub fn theme(&self, id: i64, query: &[(&str, &str)]) -> String {
        self.build(&format!("/themes/{id}"), query)
    }

    fn build(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{path}", self.endpoint);

        if !query.is_empty() {
            let qs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&qs.join("&"));
        }

        url
    }
}

/// Finds the id of the published theme (role `main`).
///
/// # Errors
///
/// Returns [`AdminError::NoPublishedTheme`] when no theme is published, or
/// [`AdminError::ThemeLookup`] when the listing request fails.
pub async fn find_published_theme(client: &RestClient) -> Result<i64, AdminError> {
    let themes = Theme::all(client, Some("id,role")).await?;

    themes
        .iter()
        .find(|theme| theme.role.as_deref() == Some("main"))
        .map(|theme| theme.id)
        .ok_or(AdminError::NoPublishedTheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUrl {
        AdminUrl::new(&ShopDomain::new("my-store").unwrap())
    }

    #[test]
    fn test_listing_urls() {
        let admin = admin();
        assert_eq!(
            admin.orders(&[]),
            "https://my-store.myshopify.com/admin/orders"
        );
        assert_eq!(
            admin.products(&[]),
            "https://my-store.myshopify.com/admin/products"
        );
        assert_eq!(
            admin.themes(&[]),
            "https://my-store.myshopify.com/admin/themes"
        );
    }

    #[test]
    fn test_single_resource_urls() {
        let admin = admin();
        assert_eq!(
            admin.order(42, &[]),
            "https://my-store.myshopify.com/admin/orders/42"
        );
        assert_eq!(
            admin.product(7, &[]),
            "https://my-store.myshopify.com/admin/products/7"
        );
        assert_eq!(
            admin.theme(9, &[]),
            "https://my-store.myshopify.com/admin/themes/9"
        );
    }

    #[test]
    fn test_query_params_are_encoded() {
        let admin = admin();
        let url = admin.orders(&[("status", "open & paid")]);
        assert_eq!(
            url,
            "https://my-store.myshopify.com/admin/orders?status=open%20%26%20paid"
        );
    }
}
