//! Tagweave CLI — the main entry point.
//!
//! Commands:
//! - `parse`    — Show the weighted tags a prompt expands to
//! - `format`   — Normalize a prompt to flat, de-duplicated form
//! - `edit`     — Edit a prompt file through a selection session
//! - `catalog`  — Browse and search the tag catalog
//! - `config`   — Configuration management

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::edit::EditArgs;

#[derive(Parser)]
#[command(
    name = "tagweave",
    about = "Tagweave — weighted prompt tag builder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Override the catalog data directory
    #[arg(long, global = true, value_name = "DIR", env = "TAGWEAVE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a prompt and list its tags with effective weights
    Parse {
        /// Prompt text (read from stdin when omitted)
        text: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a prompt in flat `tag:weight` form
    Format {
        /// Prompt text (read from stdin when omitted)
        text: Option<String>,
    },

    /// Edit the prompt stored in a file
    Edit(EditArgs),

    /// Browse the tag catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Show the catalog folder tree
    Tree {
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tags of one catalog file
    Tags {
        /// Catalog-relative file path, e.g. `appearance/eyes.yaml`
        file: String,

        /// Only show tags whose name or alias contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search every catalog file
    Search {
        /// Text to look for in names and aliases
        term: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let data_dir = cli.data_dir;
    match cli.command {
        Commands::Parse { text, json } => commands::prompt::parse(text, json)?,
        Commands::Format { text } => commands::prompt::format(text)?,
        Commands::Edit(args) => commands::edit::run(args, data_dir)?,
        Commands::Catalog { command } => match command {
            CatalogCommands::Tree { json } => commands::catalog::tree(data_dir, json)?,
            CatalogCommands::Tags { file, search } => {
                commands::catalog::tags(data_dir, &file, search.as_deref())?
            }
            CatalogCommands::Search { term } => commands::catalog::search(data_dir, &term)?,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config_cmd::show()?,
            ConfigCommands::Path => commands::config_cmd::path()?,
            ConfigCommands::Validate => commands::config_cmd::validate()?,
        },
    }

    Ok(())
}
