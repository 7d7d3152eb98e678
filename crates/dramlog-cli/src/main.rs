use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dramlog_store::{Config, Store};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dramlog", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing the data/ tree (default: current directory)
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List every bottle with its aggregate statistics
    ///
    /// Walks the tasting corpus, resolves each record to a bottle
    /// identity, and prints one line per bottle: tasting count, rated
    /// count, average score, star distribution, and slug. Bottles from
    /// the static catalogue appear even with no tastings yet.
    ///
    /// Listing order is rated count, then tasting count, then name.
    Bottles,
    /// Show one bottle with its full tasting list
    Bottle {
        /// The bottle's URL slug (e.g. chivas-regal-12-year-old)
        slug: String,
    },
    /// List expert tasting files
    Tastings {
        /// Only rows for this contributor id
        #[arg(long)]
        contributor: Option<String>,
    },
    /// Show the reviewer roster in index order
    Reviewers,
    /// Walk the corpus and report files that fail to parse
    ///
    /// The loaders skip malformed files with a warning so one bad
    /// hand-edit never takes a listing down; this command makes those
    /// skips visible and exits non-zero if any are found.
    Validate,
    /// Run the HTTP server
    Serve {
        /// Listen address (default: 127.0.0.1:5850)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.data_root {
        Some(root) => Config::load_with_data_root(root)?,
        None => Config::load()?,
    };
    let store = Store::open(&config.data_root);

    match cli.command {
        Commands::Bottles => {
            commands::list_bottles(&store)?;
        }
        Commands::Bottle { slug } => {
            commands::show_bottle(&store, &slug)?;
        }
        Commands::Tastings { contributor } => {
            commands::list_tastings(&store, contributor.as_deref())?;
        }
        Commands::Reviewers => {
            commands::list_reviewers(&store)?;
        }
        Commands::Validate => {
            let clean = commands::run_validate(&store)?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Serve { bind } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            dramlog_server::serve(config).await?;
        }
        Commands::Config { command } => {
            commands::config::run(command)?;
        }
    }

    Ok(())
}
