//! HTTP, REST, and GraphQL clients.
//!
//! [`HttpClient`] owns the reqwest client, default headers, and response
//! decoding. [`RestClient`] layers Admin REST path handling on top of it,
//! and [`GraphqlClient`] posts to the Admin GraphQL endpoint.
//! [`StorefrontClient`] wraps the GraphQL client with the storefront
//! metafield visibility operations.

mod errors;
mod graphql;
mod http_client;
mod rest;
mod storefront;

pub use errors::{GraphqlError, HttpError};
pub use graphql::GraphqlClient;
pub use http_client::{HttpClient, HttpMethod, HttpResponse};
pub use rest::RestClient;
pub use storefront::{StorefrontClient, StorefrontVisibility, VisibilityInput};
