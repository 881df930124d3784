//! Access-token resolution.

mod token;

pub use token::resolve_token;
