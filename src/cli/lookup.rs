use clap::{Args, Subcommand};
use std::io::{self, Write};
use tracing::info;

use super::output::{print_results, OutputFormat};
use crate::error::Result;
use crate::services::{LibraryService, SimpleServices};

#[derive(Args)]
pub struct LookupArgs {
    #[command(subcommand)]
    command: LookupCommands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum LookupCommands {
    /// Albums credited to an artist directly or through one of its tracks
    ArtistAlbums { id: String },

    /// Playlists containing a track by an artist
    ArtistPlaylists { id: String },

    /// Tracks credited to an artist
    ArtistTracks { id: String },

    /// Entries of a playlist in the order they were added
    PlaylistTracks { id: String },

    /// Tracks of an album
    AlbumTracks { id: String },

    /// Playlists containing a track
    TrackPlaylists { id: String },
}

pub async fn execute(args: LookupArgs, services: &SimpleServices) -> Result<()> {
    let library = services.open_library()?;
    info!("Lookup {:?}", args.command);
    let mut out = io::stdout().lock();
    print_lookup(&mut out, &library, &args.command, args.format)
}

fn print_lookup<W: Write>(
    out: &mut W,
    library: &dyn LibraryService,
    command: &LookupCommands,
    format: OutputFormat,
) -> Result<()> {
    match command {
        LookupCommands::ArtistAlbums { id } => print_results(
            out,
            &library.albums_by_artist(id)?,
            format,
            &format!("There are no Albums for artist Id = {}", id),
        ),
        LookupCommands::ArtistPlaylists { id } => print_results(
            out,
            &library.playlists_by_artist(id)?,
            format,
            &format!("There are no Playlists for artist Id = {}", id),
        ),
        LookupCommands::ArtistTracks { id } => print_results(
            out,
            &library.tracks_by_artist(id)?,
            format,
            &format!("There are no Tracks for artist Id = {}", id),
        ),
        LookupCommands::PlaylistTracks { id } => print_results(
            out,
            &library.playlist_tracks(id)?,
            format,
            &format!("Playlist Id = {} has no tracks", id),
        ),
        LookupCommands::AlbumTracks { id } => print_results(
            out,
            &library.album_tracks(id)?,
            format,
            &format!("Album Id = {} has no tracks", id),
        ),
        LookupCommands::TrackPlaylists { id } => print_results(
            out,
            &library.playlists_by_track(id)?,
            format,
            &format!("Track Id = {} is in no playlists", id),
        ),
    }
}
