//! `sdt themes` copies files into a theme.

use crate::cli::{rest_client, CliError, ShopOpts};
use crate::themes::upload;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ThemesCommand {
    #[command(subcommand)]
    command: ThemesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ThemesSubcommand {
    /// Copy files, directories, or URLs to a theme
    #[command(visible_alias = "copy")]
    Cp {
        #[command(flatten)]
        opts: ShopOpts,
        /// Theme id
        theme_id: i64,
        /// Source files, directories, or URLs, followed by the theme
        /// destination
        #[arg(required = true, num_args = 2..)]
        paths: Vec<String>,
    },
}

impl ThemesCommand {
    pub async fn run(self) -> Result<(), CliError> {
        match self.command {
            ThemesSubcommand::Cp {
                opts,
                theme_id,
                paths,
            } => {
                let Some((destination, sources)) = paths.split_last() else {
                    return Err(CliError::Usage(
                        "You must supply a source and destination".to_string(),
                    ));
                };
                if sources.is_empty() {
                    return Err(CliError::Usage(
                        "You must supply a source and destination".to_string(),
                    ));
                }

                let client = rest_client(&opts).await?;
                for source in sources {
                    upload(&client, theme_id, source, destination).await?;
                }

                Ok(())
            }
        }
    }
}
