use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod config;
mod core;
mod error;
mod services;
mod signal_handler;
mod ui;
mod utils;

use cli::{browse, duplicates, lookup, search};
use config::Config;
use error::Result;
use services::SimpleServices;
use utils::logging::LogSink;

#[derive(Parser)]
#[command(name = "plsearch")]
#[command(about = "Browse and search a local music library and its playlists")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Music library database, overriding every other source
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse(browse::BrowseArgs),

    /// Search artists, playlists, albums, tracks or starred playlists by name
    Search(search::SearchArgs),

    /// Follow a relationship from one artist, playlist, album or track
    Lookup(lookup::LookupArgs),

    /// List tracks found in more than one "Starred" playlist
    Duplicates(duplicates::DuplicatesArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse(browse::BrowseArgs::default()));

    // Load configuration
    let config = Config::load(cli.config.as_deref(), cli.database.as_deref())?;

    // The browser owns stdout, so it only logs to a file
    let sink = match (&command, &config.log_file) {
        (Commands::Browse(_), Some(path)) => LogSink::File(path.clone()),
        (Commands::Browse(_), None) => LogSink::Suppressed,
        _ => LogSink::Stderr,
    };
    utils::logging::init_logging(cli.verbose, sink).map_err(error::PlaylistSearchError::Internal)?;

    // Initialize services
    let services = SimpleServices::new(config);

    match command {
        Commands::Browse(args) => browse::execute(args, &services).await,
        Commands::Search(args) => search::execute(args, &services).await,
        Commands::Lookup(args) => lookup::execute(args, &services).await,
        Commands::Duplicates(args) => duplicates::execute(args, &services).await,
        Commands::Config(args) => {
            cli::config::execute(args, &services, cli.config.as_deref()).await
        }
    }
}
