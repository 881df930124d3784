//! `sdt products` lists products via the Admin GraphQL API.

use crate::cli::{graphql_client, CliError, ShopOpts};
use crate::output::print_separator;
use crate::products::{build_query, parse_response, ListProductsOptions};
use clap::{Args, Subcommand};
use serde_json::{Map, Value};

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List some of a shop's products, or the products given by the
    /// specified ids
    #[command(visible_alias = "l")]
    Ls {
        #[command(flatten)]
        opts: ShopOpts,
        /// Comma separated list of fields to output
        #[arg(long, short = 'f', env = "SHOPIFY_PRODUCT_FIELDS")]
        fields: Option<String>,
        /// Number of products to list
        #[arg(long, short = 'l', default_value_t = 10)]
        limit: i64,
        /// Only list products with the given status: active, draft, archived
        #[arg(long)]
        status: Option<String>,
        /// Output the products in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
        /// Product ids
        ids: Vec<i64>,
    },
}

fn normalize_field(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn print_formatted(products: &[Map<String, Value>], fields: &[String]) {
    let wanted: Vec<String> = fields.iter().map(|f| normalize_field(f)).collect();

    for product in products {
        for (key, value) in product {
            if wanted.is_empty() || wanted.contains(&normalize_field(key)) {
                println!("{key}: {}", display_value(value));
            }
        }
        print_separator();
    }
}

impl ProductsCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            ProductsSubcommand::Ls {
                opts,
                fields,
                limit,
                status,
                jsonl,
                ids,
            } => {
                let fields: Vec<String> = fields
                    .map(|f| f.split(',').map(str::to_string).collect())
                    .unwrap_or_default();

                let options = ListProductsOptions {
                    fields: fields.clone(),
                    ids,
                    limit,
                    status,
                };

                let client = graphql_client(&opts).await?;
                let response = client.query(&build_query(&options)).await?;
                let products = parse_response(&response, options.by_ids())?;

                if jsonl {
                    crate::output::print_jsonl(&products)?;
                } else {
                    print_formatted(&products, &fields);
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_field_lowers_and_strips_spaces() {
        assert_eq!(normalize_field("Product Type"), "producttype");
    }

    #[test]
    fn test_display_value_renders_strings_bare() {
        assert_eq!(display_value(&json!("Widget")), "Widget");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
