use std::collections::BTreeMap;
use std::env;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use datasource::{AppError, Dependencies};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datasource")]
#[command(about = "Load and enumerate indexable items of the content entity datasource", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load items by id and print them as JSON
    Load {
        /// Item ids (`<entityId>:<languageCode>`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print every eligible item id
    Ids,
    /// Print the bundles the current configuration indexes
    Bundles,
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(command: Commands) -> Result<(), AppError> {
    let dependencies = Dependencies::new().await?;
    let datasource = &dependencies.datasource;

    match command {
        Commands::Load { ids } => {
            let items = datasource.load_multiple(&ids).await?;
            info!(requested = ids.len(), loaded = items.len(), "Loaded items");

            let items: BTreeMap<_, _> = items.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Ids => {
            let mut page = 0;
            while let Some(item_ids) = datasource.partial_item_ids(page).await? {
                for item_id in item_ids {
                    println!("{}", item_id);
                }
                page += 1;
            }
            info!(pages = page, "Enumerated item ids");
        }
        Commands::Bundles => {
            let bundles = datasource.bundles().await?;
            println!("{}", serde_json::to_string_pretty(&bundles)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenv().ok();
    init_tracing();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Datasource command failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_load_ids() {
        let cli = Cli::try_parse_from(["datasource", "load", "1:l0", "2:l1"]).unwrap();
        match cli.command {
            Commands::Load { ids } => assert_eq!(ids, vec!["1:l0", "2:l1"]),
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn test_load_requires_ids() {
        assert!(Cli::try_parse_from(["datasource", "load"]).is_err());
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let err = Cli::try_parse_from(["datasource", "reindex"]).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_ids_and_bundles() {
        assert!(matches!(
            Cli::try_parse_from(["datasource", "ids"]).unwrap().command,
            Commands::Ids
        ));
        assert!(matches!(
            Cli::try_parse_from(["datasource", "bundles"]).unwrap().command,
            Commands::Bundles
        ));
    }
}
