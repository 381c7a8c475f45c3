use clap::Args;
use std::io::{self, Write};
use tracing::info;

use super::output::{print_results, OutputFormat};
use crate::error::Result;
use crate::services::{LibraryService, SimpleServices};

#[derive(Args)]
pub struct DuplicatesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// Report tracks that sit in more than one "Starred" playlist.
pub async fn execute(args: DuplicatesArgs, services: &SimpleServices) -> Result<()> {
    let library = services.open_library()?;
    let mut out = io::stdout().lock();
    print_duplicates(&mut out, &library, args.format)
}

fn print_duplicates<W: Write>(
    out: &mut W,
    library: &dyn LibraryService,
    format: OutputFormat,
) -> Result<()> {
    let duplicates = library.duplicate_starred_tracks()?;
    info!("Found {} duplicate tracks", duplicates.len());
    print_results(
        out,
        &duplicates,
        format,
        "No track appears in more than one Starred playlist",
    )
}
