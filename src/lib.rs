//! Command-line tools for Shopify app and theme development.
//!
//! `sdt` wraps the chores that come up while building Shopify apps and
//! themes: inspecting shops, orders, charges, metafields, webhooks, and
//! script tags; listing products over the Admin GraphQL API; copying files
//! into themes; and opening admin pages in the browser.
//!
//! The library is organized in layers:
//!
//! - [`config`] holds the per-invocation [`config::ShopContext`] with the
//!   validated shop domain, credentials, and API version.
//! - [`auth`] resolves access tokens, including the `< command` indirection
//!   for reading tokens from password managers or scripts.
//! - [`clients`] is the transport layer: HTTP, Admin REST, Admin GraphQL,
//!   and the storefront visibility client.
//! - [`rest`] defines the typed REST resources and their operations.
//! - [`admin`], [`products`], [`metafields`], and [`themes`] implement the
//!   command-specific logic on top of the clients.
//! - [`output`] renders records as labeled rows or JSONL.
//! - [`cli`] defines the command line and dispatches to all of the above.
//!
//! # Example
//!
//! ```rust,no_run
//! use sdt::clients::RestClient;
//! use sdt::config::ShopContext;
//! use sdt::rest::Shop;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ShopContext::builder()
//!     .shop("my-store")
//!     .access_token("shpat_abc123")
//!     .build()?;
//!
//! let client = RestClient::new(&context, "shpat_abc123");
//! let shop = Shop::current(&client).await?;
//! println!("{}", shop.name.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod auth;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod metafields;
pub mod output;
pub mod products;
pub mod rest;
pub mod themes;
