//! Plain records mapped from library rows
//!
//! Every record is a read-only projection of the external library database.
//! Multi-valued columns (artists, playlists) arrive already joined with "; ".

use serde::Serialize;

/// Playlists whose name starts with this literal prefix are "starred".
pub const STARRED_PREFIX: &str = "Starred";

/// A generic (id, name) pair, used for artists and playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleIdentifier {
    pub id: String,
    pub name: String,
}

impl SimpleIdentifier {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub total_tracks: i64,
    /// ISO-like date text as stored; compared as a plain string.
    pub release_date: String,
    pub album_type: String,
}

/// A track that appears in more than one starred playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateTrack {
    pub track_name: String,
    pub artists: String,
    pub album_name: String,
    pub playlists: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarredPlaylistMatch {
    pub playlist_name: String,
    pub track_name: String,
    pub album_name: String,
    pub artists: String,
}

/// A track with its album and credited artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackMatch {
    pub id: String,
    pub name: String,
    pub album_name: String,
    pub artists: String,
}

/// One row of a playlist's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub track_id: String,
    pub track_name: String,
    pub album_name: String,
    pub artists: String,
    pub track_number: i64,
    pub added_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumTrack {
    pub track_id: String,
    pub track_name: String,
    pub track_number: i64,
    pub artists: String,
}

/// Shape of a search result set, deciding how the browser reacts to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// Nothing matched; shown as a message, never an error.
    Empty,
    /// Exactly one match; the browser skips the list and opens it directly.
    Single(T),
    /// Two or more matches to choose from.
    Multiple(Vec<T>),
}

impl<T> SearchOutcome<T> {
    pub fn from_results(mut results: Vec<T>) -> Self {
        match results.len() {
            0 => SearchOutcome::Empty,
            1 => match results.pop() {
                Some(only) => SearchOutcome::Single(only),
                None => SearchOutcome::Empty,
            },
            _ => SearchOutcome::Multiple(results),
        }
    }
}
