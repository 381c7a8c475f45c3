use clap::{Args, ValueEnum};
use std::io::{self, Write};
use tracing::info;

use super::output::{print_results, OutputFormat};
use crate::error::{PlaylistSearchError, Result};
use crate::services::{LibraryService, SimpleServices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTarget {
    /// Artist names
    Artists,
    /// Playlist names
    Playlists,
    /// Album names
    Albums,
    /// Track names
    Tracks,
    /// Tracks, albums and artists inside "Starred" playlists
    Starred,
}

#[derive(Args)]
pub struct SearchArgs {
    /// What to search
    #[arg(value_enum)]
    target: SearchTarget,

    /// Substring to look for
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

pub async fn execute(args: SearchArgs, services: &SimpleServices) -> Result<()> {
    check_query_length(&args.query, services.config().min_query_length)?;

    let library = services.open_library()?;
    info!("Searching {:?} for {:?}", args.target, args.query);
    let mut out = io::stdout().lock();
    print_search(&mut out, &library, args.target, &args.query, args.format)
}

fn check_query_length(query: &str, min_query_length: usize) -> Result<()> {
    if query.chars().count() < min_query_length {
        return Err(PlaylistSearchError::Validation(format!(
            "Query must be at least {} characters",
            min_query_length
        )));
    }
    Ok(())
}

fn print_search<W: Write>(
    out: &mut W,
    library: &dyn LibraryService,
    target: SearchTarget,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let empty = format!("There are no matches for the query {}", query);
    match target {
        SearchTarget::Artists => {
            print_results(out, &library.search_artists(query)?, format, &empty)
        }
        SearchTarget::Playlists => {
            print_results(out, &library.search_playlists(query)?, format, &empty)
        }
        SearchTarget::Albums => print_results(out, &library.search_albums(query)?, format, &empty),
        SearchTarget::Tracks => print_results(out, &library.search_tracks(query)?, format, &empty),
        SearchTarget::Starred => {
            print_results(out, &library.search_starred_playlists(query)?, format, &empty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::fixtures::fixture_library;
    use crate::services::library::FailingLibrary;

    #[test]
    fn test_query_length_check() {
        assert!(check_query_length("", 0).is_ok());
        assert!(check_query_length("Be", 2).is_ok());
        assert!(matches!(
            check_query_length("B", 2),
            Err(PlaylistSearchError::Validation(_))
        ));
    }

    fn search_output(
        library: &dyn LibraryService,
        target: SearchTarget,
        query: &str,
        format: OutputFormat,
    ) -> String {
        let mut out = Vec::new();
        print_search(&mut out, library, target, query, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_artist_search_table() {
        let library = fixture_library();
        let text = search_output(&library, SearchTarget::Artists, "Beatles", OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Id"));
        assert!(lines[2].ends_with("Beatles Tribute Band"));
        assert!(lines[3].ends_with("The Beatles"));
        assert_eq!(lines.last(), Some(&"2 result(s)"));
    }

    #[test]
    fn test_every_target_writes_json_array() {
        let library = fixture_library();
        for target in SearchTarget::value_variants() {
            let text = search_output(&library, *target, "e", OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert!(parsed.is_array(), "target {:?}", target);
        }
    }

    #[test]
    fn test_no_matches_prints_message() {
        let library = fixture_library();
        let text = search_output(&library, SearchTarget::Artists, "zzz", OutputFormat::Table);
        assert_eq!(text, "There are no matches for the query zzz\n");
    }

    #[test]
    fn test_query_failure_propagates() {
        let mut out = Vec::new();
        let result = print_search(
            &mut out,
            &FailingLibrary,
            SearchTarget::Tracks,
            "x",
            OutputFormat::Table,
        );
        assert!(matches!(result, Err(PlaylistSearchError::Database(_))));
        assert!(out.is_empty());
    }
}
