//! `sdt shop` shows shop details and granted scopes.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::output::{display_opt, print_record, Tabular};
use crate::rest::{AccessScope, Shop};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ShopCommand {
    #[command(subcommand)]
    command: ShopSubcommand,
}

#[derive(Debug, Subcommand)]
enum ShopSubcommand {
    /// List access scopes granted to the shop's token
    #[command(visible_alias = "a")]
    Access {
        #[command(flatten)]
        opts: ShopOpts,
    },
    /// Information about the shop
    #[command(visible_alias = "i")]
    Info {
        #[command(flatten)]
        opts: ShopOpts,
    },
}

impl Tabular for Shop {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Name", display_opt(self.name.as_ref())),
            ("Shop Owner", display_opt(self.shop_owner.as_ref())),
            ("Email", display_opt(self.email.as_ref())),
            ("Customer Email", display_opt(self.customer_email.as_ref())),
            ("Domain", display_opt(self.domain.as_ref())),
            (
                "Myshopify Domain",
                display_opt(self.myshopify_domain.as_ref()),
            ),
            ("Phone", display_opt(self.phone.as_ref())),
            ("Address1", display_opt(self.address1.as_ref())),
            ("Address2", display_opt(self.address2.as_ref())),
            ("City", display_opt(self.city.as_ref())),
            ("Province", display_opt(self.province.as_ref())),
            ("Zip", display_opt(self.zip.as_ref())),
            ("Country", display_opt(self.country_name.as_ref())),
            ("Currency", display_opt(self.currency.as_ref())),
            ("Money Format", display_opt(self.money_format.as_ref())),
            ("Timezone", display_opt(self.iana_timezone.as_ref())),
            ("Locale", display_opt(self.primary_locale.as_ref())),
            ("Plan", display_opt(self.plan_name.as_ref())),
            (
                "Plan Display Name",
                display_opt(self.plan_display_name.as_ref()),
            ),
            (
                "Password Enabled",
                display_opt(self.password_enabled.as_ref()),
            ),
            ("Has Storefront", display_opt(self.has_storefront.as_ref())),
            ("Created", display_opt(self.created_at.as_ref())),
            ("Updated", display_opt(self.updated_at.as_ref())),
        ]
    }
}

impl ShopCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            ShopSubcommand::Access { opts } => {
                let client = rest_client(&opts).await?;
                let mut scopes = AccessScope::all(&client).await?;

                if scopes.is_empty() {
                    println!("No scopes defined");
                    return Ok(());
                }

                scopes.sort_by(|a, b| a.handle.cmp(&b.handle));

                println!("Scope");
                for scope in scopes {
                    println!("{}", scope.handle);
                }

                Ok(())
            }
            ShopSubcommand::Info { opts } => {
                let client = rest_client(&opts).await?;
                let shop = Shop::current(&client).await?;
                print_record(&shop);
                Ok(())
            }
        }
    }
}
