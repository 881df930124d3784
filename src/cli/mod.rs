//! Command definitions and dispatch.

pub mod admin;
pub mod charges;
pub mod gql;
pub mod metafields;
pub mod orders;
pub mod products;
pub mod scripttags;
pub mod shop;
pub mod themes;
pub mod webhooks;

use crate::admin::AdminError;
use crate::auth::resolve_token;
use crate::clients::{GraphqlClient, GraphqlError, HttpError, RestClient};
use crate::config::ShopContext;
use crate::error::{ConfigError, TokenError};
use crate::metafields::InvalidOrderError;
use crate::products::ProductResponseError;
use crate::rest::ResourceError;
use crate::themes::ThemeError;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "sdt",
    version,
    about = "Command-line tools for Shopify app and theme development"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open admin pages
    #[command(visible_alias = "a")]
    Admin(admin::AdminCommand),
    /// Do things with charges
    #[command(visible_alias = "c")]
    Charges(charges::ChargesCommand),
    /// Execute a GraphQL query against the Admin API
    #[command(visible_alias = "gql")]
    Graphql(gql::GraphqlCommand),
    /// Metafield utilities
    #[command(visible_aliases = ["m", "meta"])]
    Metafield(metafields::MetafieldCommand),
    /// Information about orders
    #[command(visible_alias = "o")]
    Orders(orders::OrdersCommand),
    /// Do things with products
    #[command(visible_alias = "p")]
    Products(products::ProductsCommand),
    /// ScriptTag utilities
    Scripttags(scripttags::ScriptTagsCommand),
    /// Information about the given shop
    #[command(visible_alias = "s")]
    Shop(shop::ShopCommand),
    /// Theme utilities
    #[command(visible_alias = "t")]
    Themes(themes::ThemesCommand),
    /// Webhook utilities
    #[command(visible_aliases = ["w", "hooks"])]
    Webhook(webhooks::WebhookCommand),
}

/// Credential flags shared by every command.
#[derive(Args, Clone, Debug)]
pub struct ShopOpts {
    /// Shop to run the command against, short or full domain form
    #[arg(long, short = 's', env = "SHOPIFY_SHOP")]
    pub shop: String,

    /// API key for private app authentication
    #[arg(long, env = "SHOPIFY_API_KEY")]
    pub api_key: Option<String>,

    /// API password for private app authentication
    #[arg(long, env = "SHOPIFY_API_PASSWORD")]
    pub api_password: Option<String>,

    /// Access token, or "< command" to read the token from a command's output
    #[arg(long, short = 't', env = "SHOPIFY_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    /// API version, e.g. 2025-01
    #[arg(long, env = "SHOPIFY_API_VERSION")]
    pub api_version: Option<String>,
}

impl ShopOpts {
    /// Builds the immutable shop context from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a flag fails validation.
    pub fn context(&self) -> Result<ShopContext, CliError> {
        let mut builder = ShopContext::builder().shop(&self.shop);

        if let Some(api_key) = &self.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(api_password) = &self.api_password {
            builder = builder.api_password(api_password);
        }
        if let Some(access_token) = &self.access_token {
            builder = builder.access_token(access_token);
        }
        if let Some(api_version) = &self.api_version {
            builder = builder.api_version(api_version);
        }

        Ok(builder.build()?)
    }
}

/// Resolves the configured token setting for the context.
///
/// An API key and password together authenticate as basic auth at the
/// transport layer, so they resolve to no token; a password on its own
/// doubles as an access token.
///
/// # Errors
///
/// Returns [`CliError::Token`] when the token command fails.
pub(crate) async fn resolved_token(context: &ShopContext) -> Result<String, CliError> {
    let setting = match context.access_token() {
        Some(token) if !token.is_empty() => token,
        _ => match (context.api_key(), context.api_password()) {
            (None, Some(password)) => password,
            _ => return Ok(String::new()),
        },
    };

    Ok(resolve_token(context.shop(), setting).await?)
}

/// Builds a REST client with the resolved token.
pub(crate) async fn rest_client(opts: &ShopOpts) -> Result<RestClient, CliError> {
    let context = opts.context()?;
    let token = resolved_token(&context).await?;
    Ok(RestClient::new(&context, &token))
}

/// Builds a GraphQL client with the resolved token.
pub(crate) async fn graphql_client(opts: &ShopOpts) -> Result<GraphqlClient, CliError> {
    let context = opts.context()?;
    let token = resolved_token(&context).await?;
    Ok(GraphqlClient::new(&context, &token))
}

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Products(#[from] ProductResponseError),

    #[error(transparent)]
    Order(#[from] InvalidOrderError),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// The process exit code for this error. Token resolution failures get a
    /// distinguished code so wrappers can tell them apart.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Token(_) => 2,
            _ => 1,
        }
    }
}

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns [`CliError`] when the command fails; the caller maps it to an
/// exit code.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Admin(cmd) => cmd.run().await,
        Command::Charges(cmd) => cmd.run().await,
        Command::Graphql(cmd) => cmd.run().await,
        Command::Metafield(cmd) => cmd.run().await,
        Command::Orders(cmd) => cmd.run().await,
        Command::Products(cmd) => cmd.run().await,
        Command::Scripttags(cmd) => cmd.run().await,
        Command::Shop(cmd) => cmd.run().await,
        Command::Themes(cmd) => cmd.run().await,
        Command::Webhook(cmd) => cmd.run().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_token_errors_exit_with_code_two() {
        let error = CliError::Token(TokenError::InvalidOutput {
            command: "get-token".to_string(),
        });
        assert_eq!(error.exit_code(), 2);

        let error = CliError::Usage("bad arguments".to_string());
        assert_eq!(error.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_key_and_password_resolve_to_no_token() {
        let context = ShopContext::builder()
            .shop("my-store")
            .api_key("key")
            .api_password("pass")
            .build()
            .unwrap();
        assert_eq!(resolved_token(&context).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_password_alone_doubles_as_token() {
        let context = ShopContext::builder()
            .shop("my-store")
            .api_password("shppa_secret")
            .build()
            .unwrap();
        assert_eq!(resolved_token(&context).await.unwrap(), "shppa_secret");
    }

    #[test]
    fn test_shop_opts_build_context() {
        let opts = ShopOpts {
            shop: "my-store".to_string(),
            api_key: None,
            api_password: None,
            access_token: Some("shpat_abc".to_string()),
            api_version: Some("2025-01".to_string()),
        };

        let context = opts.context().unwrap();
        assert_eq!(context.shop().shop_name(), "my-store");
        assert_eq!(context.api_version().unwrap().as_ref(), "2025-01");
    }
}
