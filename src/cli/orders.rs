//! `sdt orders` inspects and lists orders.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::output::{display_opt, print_record, print_records, Tabular};
use crate::rest::{Order, OrderParams};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List the shop's orders
    #[command(visible_alias = "l")]
    Ls {
        #[command(flatten)]
        opts: ShopOpts,
        /// Only list orders with the given status: open, closed, cancelled,
        /// any
        #[arg(long)]
        status: Option<String>,
        /// Number of orders to list
        #[arg(long, short = 'l')]
        limit: Option<i64>,
        /// Output the orders in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
    },
    /// Info about the web browser used to place the order
    #[command(visible_alias = "ua")]
    Useragent {
        #[command(flatten)]
        opts: ShopOpts,
        /// Order id
        id: i64,
    },
}

impl Tabular for Order {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Name", display_opt(self.name.as_ref())),
            ("Email", display_opt(self.email.as_ref())),
            ("Total", display_opt(self.total_price.as_ref())),
            ("Currency", display_opt(self.currency.as_ref())),
            (
                "Financial Status",
                display_opt(self.financial_status.as_ref()),
            ),
            (
                "Fulfillment Status",
                display_opt(self.fulfillment_status.as_ref()),
            ),
            ("Created", display_opt(self.created_at.as_ref())),
        ]
    }
}

/// The `useragent` view of an order.
struct UserAgentView<'a>(&'a Order);

impl Tabular for UserAgentView<'_> {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let order = self.0;
        let details = order.client_details.clone().unwrap_or_default();
        vec![
            ("Id", order.id.to_string()),
            ("User Agent", display_opt(details.user_agent.as_ref())),
            ("Display", order.display()),
            (
                "Accept Language",
                display_opt(details.accept_language.as_ref()),
            ),
            ("IP", display_opt(order.browser_ip.as_ref())),
            ("Session", display_opt(details.session_hash.as_ref())),
        ]
    }
}

impl OrdersCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            OrdersSubcommand::Ls {
                opts,
                status,
                limit,
                jsonl,
            } => {
                let client = rest_client(&opts).await?;
                let orders = Order::all(&client, &OrderParams { status, limit }).await?;

                if jsonl {
                    crate::output::print_jsonl(&orders)?;
                } else {
                    print_records(&orders);
                }
                Ok(())
            }
            OrdersSubcommand::Useragent { opts, id } => {
                let client = rest_client(&opts).await?;
                let order = Order::find(&client, id).await?;
                print_record(&UserAgentView(&order));
                Ok(())
            }
        }
    }
}
