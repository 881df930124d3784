//! `sdt scripttags` lists and deletes script tags.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::output::{display_opt, print_records, Tabular};
use crate::rest::ScriptTag;
use crate::themes::is_remote_source;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ScriptTagsCommand {
    #[command(subcommand)]
    command: ScriptTagsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ScriptTagsSubcommand {
    /// List script tags for the given shop
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        opts: ShopOpts,
        /// Output the script tags in JSONL format
        #[arg(long, short = 'j')]
        jsonl: bool,
    },
    /// Delete the script tag with the given id, or every tag with the given
    /// source URL
    #[command(visible_aliases = ["del", "rm", "d"])]
    Delete {
        #[command(flatten)]
        opts: ShopOpts,
        /// Script tag id or source URL
        target: String,
    },
}

impl Tabular for ScriptTag {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.to_string()),
            ("Src", display_opt(self.src.as_ref())),
            ("Event", display_opt(self.event.as_ref())),
            ("Display Scope", display_opt(self.display_scope.as_ref())),
            ("Created", display_opt(self.created_at.as_ref())),
            ("Updated", display_opt(self.updated_at.as_ref())),
        ]
    }
}

impl ScriptTagsCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            ScriptTagsSubcommand::List { opts, jsonl } => {
                let client = rest_client(&opts).await?;
                let tags = ScriptTag::all(&client, None).await?;

                if jsonl {
                    crate::output::print_jsonl(&tags)?;
                } else {
                    print_records(&tags);
                }
                Ok(())
            }
            ScriptTagsSubcommand::Delete { opts, target } => {
                let client = rest_client(&opts).await?;

                let ids = if is_remote_source(&target) {
                    let tags = ScriptTag::all(&client, Some(&target)).await?;
                    if tags.is_empty() {
                        return Err(CliError::Usage(format!(
                            "Cannot find script tag with URL {target}"
                        )));
                    }
                    tags.iter().map(|tag| tag.id).collect()
                } else {
                    let id: i64 = target.parse().map_err(|_| {
                        CliError::Usage(format!(
                            "Script tag id '{target}' is invalid: must be an int"
                        ))
                    })?;
                    vec![id]
                };

                for id in ids {
                    ScriptTag::delete(&client, id).await?;
                    println!("Script tag {id} deleted");
                }

                Ok(())
            }
        }
    }
}
