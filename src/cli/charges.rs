//! `sdt charges` lists and creates application charges.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::output::{display_opt, print_record, print_records, Tabular};
use crate::rest::{ApplicationCharge, NewCharge, RecurringApplicationCharge};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ChargesCommand {
    #[command(subcommand)]
    command: ChargesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ChargesSubcommand {
    /// List the shop's charges, or the charges given by the specified ids
    #[command(visible_alias = "l")]
    Ls {
        #[command(flatten)]
        opts: ShopOpts,
        /// List one-time charges (default is recurring)
        #[arg(long = "one-time", short = '1')]
        one_time: bool,
        /// Output the charges in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
        /// Charge ids
        ids: Vec<i64>,
    },
    /// Create a one-time charge (Application Charge)
    #[command(visible_alias = "c")]
    Create {
        #[command(flatten)]
        opts: ShopOpts,
        /// Make the charge a test charge
        #[arg(long)]
        test: bool,
        /// URL to redirect the user to after the charge is accepted
        #[arg(long = "return-to", short = 'r')]
        return_to: Option<String>,
        /// Output the charge in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
        /// Charge name
        name: String,
        /// Charge price, e.g. 9.99
        price: String,
    },
}

impl Tabular for ApplicationCharge {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Name", display_opt(self.name.as_ref())),
            ("Price", display_opt(self.price.as_ref())),
            ("Status", display_opt(self.status.as_ref())),
            ("Confirmation URL", display_opt(self.confirmation_url.as_ref())),
            ("Return URL", display_opt(self.decorated_return_url.as_ref())),
            ("Test", display_opt(self.test.as_ref())),
            ("Created At", display_opt(self.created_at.as_ref())),
            ("Updated At", display_opt(self.updated_at.as_ref())),
        ]
    }
}

impl Tabular for RecurringApplicationCharge {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Name", display_opt(self.name.as_ref())),
            ("Price", display_opt(self.price.as_ref())),
            ("Status", display_opt(self.status.as_ref())),
            ("Activated On", display_opt(self.activated_on.as_ref())),
            ("Confirmation URL", display_opt(self.confirmation_url.as_ref())),
            ("Return URL", display_opt(self.decorated_return_url.as_ref())),
            ("Test", display_opt(self.test.as_ref())),
            ("Created At", display_opt(self.created_at.as_ref())),
            ("Updated At", display_opt(self.updated_at.as_ref())),
        ]
    }
}

impl ChargesCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            ChargesSubcommand::Ls {
                opts,
                one_time,
                jsonl,
                ids,
            } => {
                let client = rest_client(&opts).await?;

                if one_time {
                    let charges = if ids.is_empty() {
                        ApplicationCharge::all(&client).await?
                    } else {
                        let mut charges = Vec::with_capacity(ids.len());
                        for id in ids {
                            charges.push(ApplicationCharge::find(&client, id).await?);
                        }
                        charges
                    };

                    if jsonl {
                        crate::output::print_jsonl(&charges)?;
                    } else {
                        print_records(&charges);
                    }
                } else {
                    let charges = if ids.is_empty() {
                        RecurringApplicationCharge::all(&client).await?
                    } else {
                        let mut charges = Vec::with_capacity(ids.len());
                        for id in ids {
                            charges.push(RecurringApplicationCharge::find(&client, id).await?);
                        }
                        charges
                    };

                    if jsonl {
                        crate::output::print_jsonl(&charges)?;
                    } else {
                        print_records(&charges);
                    }
                }

                Ok(())
            }
            ChargesSubcommand::Create {
                opts,
                test,
                return_to,
                jsonl,
                name,
                price,
            } => {
                if price.parse::<f64>().is_err() {
                    return Err(CliError::Usage(format!(
                        "Cannot create charge: invalid price '{price}'"
                    )));
                }

                let client = rest_client(&opts).await?;
                let charge = ApplicationCharge::create(
                    &client,
                    &NewCharge {
                        name,
                        price,
                        test,
                        return_url: return_to,
                    },
                )
                .await?;

                if jsonl {
                    crate::output::print_jsonl(std::slice::from_ref(&charge))?;
                } else {
                    print_record(&charge);
                }

                Ok(())
            }
        }
    }
}
