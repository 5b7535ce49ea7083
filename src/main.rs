use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use popcorn::commands::{
    BrowseOptions, cmd_browse, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show,
};
use popcorn::logging::init_logging;

#[derive(Parser)]
#[command(name = "popcorn")]
#[command(about = "Search movies and keep a watched list from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// OMDb API key (overrides OMDB_API_KEY and the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of the default location
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the movie browser (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Key: api_key, api_url, request_timeout, max_rating, default_rating, rating_messages
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Key: api_key, api_url, request_timeout, max_rating, default_rating, rating_messages
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging goes to a file so it never corrupts the TUI
    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse(BrowseOptions {
            api_key: cli.api_key,
        }),

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            ConfigAction::Path { json } => cmd_config_path(json),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
