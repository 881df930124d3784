//! `sdt admin` opens admin pages in the default browser.

use crate::admin::{find_published_theme, AdminUrl};
use crate::cli::{rest_client, CliError, ShopOpts};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Open the given order for editing; with no id, open the orders page
    #[command(visible_aliases = ["orders", "o"])]
    Order {
        #[command(flatten)]
        opts: ShopOpts,
        /// Order id
        id: Option<i64>,
    },
    /// Open the given product for editing; with no id, open the products page
    #[command(visible_aliases = ["products", "p"])]
    Product {
        #[command(flatten)]
        opts: ShopOpts,
        /// Product id
        id: Option<i64>,
    },
    /// Open the published theme, or the given theme id, for editing
    Theme {
        #[command(flatten)]
        opts: ShopOpts,
        /// Theme id; defaults to the published theme
        id: Option<i64>,
    },
    /// Open the themes section of the admin
    Themes {
        #[command(flatten)]
        opts: ShopOpts,
    },
}

impl AdminCommand {
    pub async fn run(self) -> Result<(), CliError> {
        let url = match &self.command {
            AdminSubcommand::Order { opts, id } => {
                let admin = AdminUrl::new(opts.context()?.shop());
                id.map_or_else(|| admin.orders(&[]), |id| admin.order(id, &[]))
            }
            AdminSubcommand::Product { opts, id } => {
                let admin = AdminUrl::new(opts.context()?.shop());
                id.map_or_else(|| admin.products(&[]), |id| admin.product(id, &[]))
            }
            AdminSubcommand::Theme { opts, id } => {
                let admin = AdminUrl::new(opts.context()?.shop());
                let id = match id {
                    Some(id) => *id,
                    None => {
                        let client = rest_client(opts).await?;
                        find_published_theme(&client).await?
                    }
                };
                admin.theme(id, &[])
            }
            AdminSubcommand::Themes { opts } => {
                let admin = AdminUrl::new(opts.context()?.shop());
                admin.themes(&[])
            }
        };

        open::that(url)?;
        Ok(())
    }
}
