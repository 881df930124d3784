//! `sdt metafield` lists metafields and manages storefront visibility.

use crate::cli::{rest_client, resolved_token, CliError, ShopOpts};
use crate::clients::{StorefrontClient, StorefrontVisibility, VisibilityInput};
use crate::metafields::{sort_metafields, OrderBy};
use crate::output::{display_opt, print_record, print_records, Tabular};
use crate::rest::{Metafield, MetafieldOwner, MetafieldParams};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct MetafieldCommand {
    #[command(subcommand)]
    command: MetafieldSubcommand,
}

/// Filter and output flags shared by the listing subcommands.
#[derive(Args, Clone, Debug)]
struct MetafieldFlags {
    /// Find metafields with the given namespace
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Find metafields with the given key
    #[arg(long, short = 'k')]
    key: Option<String>,

    /// Order metafields by the given properties, e.g. key or update:desc
    #[arg(long, short = 'o')]
    order: Vec<String>,

    /// Output the metafields in JSONL format
    #[arg(long, short = 'j')]
    jsonl: bool,
}

impl MetafieldFlags {
    fn params(&self) -> MetafieldParams {
        MetafieldParams {
            namespace: self.namespace.clone(),
            key: self.key.clone(),
        }
    }

    fn order_by(&self) -> Result<Vec<OrderBy>, CliError> {
        self.order
            .iter()
            .map(|order| order.parse().map_err(CliError::from))
            .collect()
    }
}

#[derive(Debug, Subcommand)]
enum MetafieldSubcommand {
    /// List metafields for the given customer
    #[command(visible_alias = "c")]
    Customer {
        #[command(flatten)]
        opts: ShopOpts,
        #[command(flatten)]
        flags: MetafieldFlags,
        /// Customer id
        id: i64,
    },
    /// List metafields for the given product
    #[command(visible_aliases = ["products", "prod", "p"])]
    Product {
        #[command(flatten)]
        opts: ShopOpts,
        #[command(flatten)]
        flags: MetafieldFlags,
        /// Product id
        id: i64,
    },
    /// List metafields for the given shop
    #[command(visible_alias = "s")]
    Shop {
        #[command(flatten)]
        opts: ShopOpts,
        #[command(flatten)]
        flags: MetafieldFlags,
    },
    /// Storefront API utilities
    #[command(visible_alias = "sf")]
    Storefront {
        #[command(subcommand)]
        command: StorefrontSubcommand,
    },
    /// List metafields for the given variant
    #[command(visible_aliases = ["var", "v"])]
    Variant {
        #[command(flatten)]
        opts: ShopOpts,
        #[command(flatten)]
        flags: MetafieldFlags,
        /// Variant id
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum StorefrontSubcommand {
    /// List metafields visible to the Storefront API
    Ls {
        #[command(flatten)]
        opts: ShopOpts,
        /// Output the metafields in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
    },
    /// Expose a metafield to the Storefront API
    Create {
        #[command(flatten)]
        opts: ShopOpts,
        /// Metafield namespace
        #[arg(long, short = 'n')]
        namespace: String,
        /// Metafield key
        #[arg(long, short = 'k')]
        key: String,
        /// Owner type, e.g. PRODUCT or CUSTOMER
        #[arg(long, short = 'o')]
        owner: String,
    },
}

impl Tabular for Metafield {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Gid", display_opt(self.admin_graphql_api_id.as_ref())),
            ("Namespace", self.namespace.clone()),
            ("Key", self.key.clone()),
            ("Description", display_opt(self.description.as_ref())),
            ("Value", display_value(&self.value)),
            ("Type", display_opt(self.value_type.as_ref())),
            ("Created", display_opt(self.created_at.as_ref())),
            ("Updated", display_opt(self.updated_at.as_ref())),
        ]
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Tabular for StorefrontVisibility {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", display_opt(self.legacy_resource_id.as_ref())),
            ("Gid", self.id.clone()),
            ("Namespace", self.namespace.clone()),
            ("Key", self.key.clone()),
            ("Owner Type", self.owner_type.clone()),
            ("Created", display_opt(self.created_at.as_ref())),
            ("Updated", display_opt(self.updated_at.as_ref())),
        ]
    }
}

async fn list_for_owner(
    opts: &ShopOpts,
    flags: &MetafieldFlags,
    owner: MetafieldOwner,
    id: i64,
) -> Result<(), CliError> {
    let client = rest_client(opts).await?;
    let metafields = Metafield::list_for_owner(&client, owner, id, &flags.params()).await?;
    print_metafields(metafields, flags)
}

fn print_metafields(mut metafields: Vec<Metafield>, flags: &MetafieldFlags) -> Result<(), CliError> {
    if flags.jsonl {
        crate::output::print_jsonl(&metafields)?;
    } else {
        sort_metafields(&mut metafields, &flags.order_by()?, &flags.params());
        print_records(&metafields);
    }
    Ok(())
}

impl MetafieldCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            MetafieldSubcommand::Customer { opts, flags, id } => {
                list_for_owner(&opts, &flags, MetafieldOwner::Customer, id).await
            }
            MetafieldSubcommand::Product { opts, flags, id } => {
                list_for_owner(&opts, &flags, MetafieldOwner::Product, id).await
            }
            MetafieldSubcommand::Variant { opts, flags, id } => {
                list_for_owner(&opts, &flags, MetafieldOwner::Variant, id).await
            }
            MetafieldSubcommand::Shop { opts, flags } => {
                let client = rest_client(&opts).await?;
                let metafields = Metafield::list_for_shop(&client, &flags.params()).await?;
                print_metafields(metafields, &flags)
            }
            MetafieldSubcommand::Storefront { command } => match command {
                StorefrontSubcommand::Ls { opts, jsonl } => {
                    let context = opts.context()?;
                    let token = resolved_token(&context).await?;
                    let metafields = StorefrontClient::new(&context, &token).list().await?;

                    if jsonl {
                        crate::output::print_jsonl(&metafields)?;
                    } else {
                        print_records(&metafields);
                    }
                    Ok(())
                }
                StorefrontSubcommand::Create {
                    opts,
                    namespace,
                    key,
                    owner,
                } => {
                    let context = opts.context()?;
                    let token = resolved_token(&context).await?;
                    let visibility = StorefrontClient::new(&context, &token)
                        .create(&VisibilityInput {
                            namespace,
                            key,
                            owner_type: owner.to_uppercase(),
                        })
                        .await?;

                    print_record(&visibility);
                    Ok(())
                }
            },
        }
    }
}
