use crate::core::data::Library;
use crate::core::models::{
    Album, AlbumTrack, DuplicateTrack, PlaylistEntry, SimpleIdentifier, StarredPlaylistMatch,
    TrackMatch,
};
use crate::error::DbResult;

/// Queries the browser and the non-interactive commands run against a library.
pub trait LibraryService {
    fn search_artists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>>;
    fn search_playlists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>>;
    fn search_albums(&self, query: &str) -> DbResult<Vec<Album>>;
    fn search_tracks(&self, query: &str) -> DbResult<Vec<TrackMatch>>;
    fn search_starred_playlists(&self, query: &str) -> DbResult<Vec<StarredPlaylistMatch>>;
    fn duplicate_starred_tracks(&self) -> DbResult<Vec<DuplicateTrack>>;

    fn albums_by_artist(&self, artist_id: &str) -> DbResult<Vec<Album>>;
    fn playlists_by_artist(&self, artist_id: &str) -> DbResult<Vec<SimpleIdentifier>>;
    fn tracks_by_artist(&self, artist_id: &str) -> DbResult<Vec<TrackMatch>>;
    fn playlist_tracks(&self, playlist_id: &str) -> DbResult<Vec<PlaylistEntry>>;
    fn album_tracks(&self, album_id: &str) -> DbResult<Vec<AlbumTrack>>;
    fn playlists_by_track(&self, track_id: &str) -> DbResult<Vec<SimpleIdentifier>>;
}

impl LibraryService for Library {
    fn search_artists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Library::search_artists(self, query)
    }

    fn search_playlists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Library::search_playlists(self, query)
    }

    fn search_albums(&self, query: &str) -> DbResult<Vec<Album>> {
        Library::search_albums(self, query)
    }

    fn search_tracks(&self, query: &str) -> DbResult<Vec<TrackMatch>> {
        Library::search_tracks(self, query)
    }

    fn search_starred_playlists(&self, query: &str) -> DbResult<Vec<StarredPlaylistMatch>> {
        Library::search_starred_playlists(self, query)
    }

    fn duplicate_starred_tracks(&self) -> DbResult<Vec<DuplicateTrack>> {
        Library::duplicate_starred_tracks(self)
    }

    fn albums_by_artist(&self, artist_id: &str) -> DbResult<Vec<Album>> {
        Library::albums_by_artist(self, artist_id)
    }

    fn playlists_by_artist(&self, artist_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Library::playlists_by_artist(self, artist_id)
    }

    fn tracks_by_artist(&self, artist_id: &str) -> DbResult<Vec<TrackMatch>> {
        Library::tracks_by_artist(self, artist_id)
    }

    fn playlist_tracks(&self, playlist_id: &str) -> DbResult<Vec<PlaylistEntry>> {
        Library::playlist_tracks(self, playlist_id)
    }

    fn album_tracks(&self, album_id: &str) -> DbResult<Vec<AlbumTrack>> {
        Library::album_tracks(self, album_id)
    }

    fn playlists_by_track(&self, track_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Library::playlists_by_track(self, track_id)
    }
}

/// A library whose every query fails, for exercising error paths.
#[cfg(test)]
pub struct FailingLibrary;

#[cfg(test)]
impl FailingLibrary {
    fn failure<T>() -> DbResult<T> {
        Err(crate::error::DatabaseError::Query(
            rusqlite::Error::InvalidQuery,
        ))
    }
}

#[cfg(test)]
impl LibraryService for FailingLibrary {
    fn search_artists(&self, _query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Self::failure()
    }

    fn search_playlists(&self, _query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Self::failure()
    }

    fn search_albums(&self, _query: &str) -> DbResult<Vec<Album>> {
        Self::failure()
    }

    fn search_tracks(&self, _query: &str) -> DbResult<Vec<TrackMatch>> {
        Self::failure()
    }

    fn search_starred_playlists(&self, _query: &str) -> DbResult<Vec<StarredPlaylistMatch>> {
        Self::failure()
    }

    fn duplicate_starred_tracks(&self) -> DbResult<Vec<DuplicateTrack>> {
        Self::failure()
    }

    fn albums_by_artist(&self, _artist_id: &str) -> DbResult<Vec<Album>> {
        Self::failure()
    }

    fn playlists_by_artist(&self, _artist_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Self::failure()
    }

    fn tracks_by_artist(&self, _artist_id: &str) -> DbResult<Vec<TrackMatch>> {
        Self::failure()
    }

    fn playlist_tracks(&self, _playlist_id: &str) -> DbResult<Vec<PlaylistEntry>> {
        Self::failure()
    }

    fn album_tracks(&self, _album_id: &str) -> DbResult<Vec<AlbumTrack>> {
        Self::failure()
    }

    fn playlists_by_track(&self, _track_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        Self::failure()
    }
}
