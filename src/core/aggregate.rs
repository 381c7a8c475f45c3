//! Merging of album result sets
//!
//! An artist reaches an album either through a direct album-artist credit or
//! through a track-artist credit on one of the album's tracks. Both row sets
//! are folded into one list here.

use std::collections::HashSet;

use crate::core::models::Album;

/// Merge album rows, keeping the first row seen for each album id, then sort by
/// release date.
///
/// Release dates are compared as plain strings, so "2020-3-1" sorts after
/// "2020-03-01". The sort is stable: albums sharing a date keep the order in
/// which they were first seen.
pub fn merge_albums<I>(sources: I) -> Vec<Album>
where
    I: IntoIterator<Item = Vec<Album>>,
{
    let mut seen = HashSet::new();
    let mut albums = Vec::new();

    for rows in sources {
        for album in rows {
            if seen.insert(album.id.clone()) {
                albums.push(album);
            }
        }
    }

    albums.sort_by(|a, b| a.release_date.cmp(&b.release_date));
    albums
}
