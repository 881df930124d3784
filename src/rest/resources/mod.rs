//! Resource definitions and their operations.

mod access_scope;
mod asset;
mod charge;
mod metafield;
mod order;
mod script_tag;
mod shop;
mod theme;
mod webhook;

pub use access_scope::AccessScope;
pub use asset::Asset;
pub use charge::{ApplicationCharge, NewCharge, RecurringApplicationCharge};
pub use metafield::{Metafield, MetafieldOwner, MetafieldParams};
pub use order::{ClientDetails, Order, OrderParams};
pub use script_tag::ScriptTag;
pub use shop::Shop;
pub use theme::Theme;
pub use webhook::{NewWebhook, Webhook};
