//! `sdt webhook` lists, creates, and deletes webhook subscriptions.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::clients::RestClient;
use crate::output::{display_opt, print_records, Tabular};
use crate::rest::{NewWebhook, Webhook};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct WebhookCommand {
    #[command(subcommand)]
    command: WebhookSubcommand,
}

#[derive(Debug, Subcommand)]
enum WebhookSubcommand {
    /// Create a webhook for the given shop
    #[command(visible_alias = "c")]
    Create {
        #[command(flatten)]
        opts: ShopOpts,
        /// URL the webhook payload is delivered to
        #[arg(long, short = 'a')]
        address: String,
        /// Topic name, e.g. orders/create
        #[arg(long)]
        topic: String,
        /// Payload fields to include
        #[arg(long, short = 'f')]
        fields: Vec<String>,
        /// Deliver payloads as XML instead of JSON
        #[arg(long)]
        xml: bool,
    },
    /// Delete the given webhooks
    #[command(visible_aliases = ["del", "rm", "d"])]
    Delete {
        #[command(flatten)]
        opts: ShopOpts,
        /// Delete every webhook
        #[arg(long, short = 'a')]
        all: bool,
        /// Webhook ids or topic names
        targets: Vec<String>,
    },
    /// List the shop's webhooks
    Ls {
        #[command(flatten)]
        opts: ShopOpts,
        /// Output the webhooks in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
    },
}

impl Tabular for Webhook {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Address", display_opt(self.address.as_ref())),
            ("Topic", display_opt(self.topic.as_ref())),
            ("Fields", self.fields.join(", ")),
            ("Created", display_opt(self.created_at.as_ref())),
            ("Updated", display_opt(self.updated_at.as_ref())),
        ]
    }
}

/// Matches topic names of the `resource/event` form.
fn is_topic_name(value: &str) -> bool {
    let Some((resource, event)) = value.split_once('/') else {
        return false;
    };

    let valid = |part: &str| {
        !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
    };

    valid(resource) && valid(event)
}

/// Resolves delete targets to webhook ids.
///
/// Topic names are expanded through a topic-filtered listing, which may
/// contribute zero ids; any other target must parse as a numeric id.
///
/// # Errors
///
/// Returns [`CliError`] when a listing fails or a target is neither a topic
/// name nor an integer.
pub async fn collect_target_ids(
    client: &RestClient,
    targets: &[String],
) -> Result<Vec<i64>, CliError> {
    let mut ids = Vec::new();

    for target in targets {
        if is_topic_name(target) {
            let webhooks = Webhook::all(client, Some(target)).await?;
            ids.extend(webhooks.iter().map(|webhook| webhook.id));
        } else {
            let id: i64 = target.parse().map_err(|_| {
                CliError::Usage(format!("Webhook id '{target}' is invalid: must be an int"))
            })?;
            ids.push(id);
        }
    }

    Ok(ids)
}

impl WebhookCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            WebhookSubcommand::Create {
                opts,
                address,
                topic,
                fields,
                xml,
            } => {
                let client = rest_client(&opts).await?;
                let webhook = Webhook::create(
                    &client,
                    &NewWebhook {
                        address,
                        topic,
                        fields,
                        format: if xml { "xml" } else { "json" }.to_string(),
                    },
                )
                .await?;

                println!("Webhook created: {}", webhook.id);
                Ok(())
            }
            WebhookSubcommand::Delete { opts, all, targets } => {
                let client = rest_client(&opts).await?;

                let ids = if all {
                    let webhooks = Webhook::all(&client, None).await?;
                    webhooks.iter().map(|webhook| webhook.id).collect()
                } else {
                    if targets.is_empty() {
                        return Err(CliError::Usage(
                            "You must supply a webhook id or topic".to_string(),
                        ));
                    }
                    collect_target_ids(&client, &targets).await?
                };

                if ids.is_empty() {
                    return Err(CliError::Usage("No webhooks found".to_string()));
                }

                let count = ids.len();
                for id in ids {
                    Webhook::delete(&client, id).await?;
                }

                println!("{count} webhook(s) deleted");
                Ok(())
            }
            WebhookSubcommand::Ls { opts, jsonl } => {
                let client = rest_client(&opts).await?;
                let webhooks = Webhook::all(&client, None).await?;

                if jsonl {
                    crate::output::print_jsonl(&webhooks)?;
                } else {
                    print_records(&webhooks);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_name_detection() {
        assert!(is_topic_name("orders/create"));
        assert!(is_topic_name("app_subscriptions/update"));
        assert!(!is_topic_name("orders"));
        assert!(!is_topic_name("orders/create/extra"));
        assert!(!is_topic_name("12345"));
        assert!(!is_topic_name("orders/123"));
    }
}
