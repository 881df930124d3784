//! `sdt graphql` runs an ad hoc query against the Admin GraphQL API.

use crate::cli::{graphql_client, CliError, ShopOpts};
use clap::Args;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Args, Debug)]
pub struct GraphqlCommand {
    #[command(flatten)]
    opts: ShopOpts,

    /// File containing the query; reads standard input when omitted
    file: Option<PathBuf>,
}

impl GraphqlCommand {
    pub async fn run(self) -> Result<(), CliError> {
        let query = match &self.file {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => {
                let mut query = String::new();
                tokio::io::stdin().read_to_string(&mut query).await?;
                query
            }
        };

        if query.trim().is_empty() {
            return Err(CliError::Usage("You must supply a query".to_string()));
        }

        let client = graphql_client(&self.opts).await?;
        let response = client.query(&query).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
