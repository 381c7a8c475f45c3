//! Read-only access to the external music library database
//!
//! The library file is produced by another tool; this module only issues
//! parameterized SELECT statements against its seven tables and maps rows to
//! the records in [`crate::core::models`]. A failing row aborts the whole
//! query: callers get either every row or an error, never a partial result.

use rusqlite::{Connection, OpenFlags, Params, Row};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::core::aggregate::merge_albums;
use crate::core::models::{
    Album, AlbumTrack, DuplicateTrack, PlaylistEntry, SimpleIdentifier, StarredPlaylistMatch,
    TrackMatch, STARRED_PREFIX,
};
use crate::error::{DatabaseError, DbResult};

/// Tables the library file must provide.
pub const REQUIRED_TABLES: [&str; 7] = [
    "Artist",
    "Album",
    "AlbumArtist",
    "Track",
    "TrackArtist",
    "Playlist",
    "PlaylistTrack",
];

const SEARCH_ARTISTS: &str = r"
SELECT id, name
FROM Artist
WHERE name LIKE ?1 ESCAPE '\'
ORDER BY name, id
";

const SEARCH_PLAYLISTS: &str = r"
SELECT id, name
FROM Playlist
WHERE name LIKE ?1 ESCAPE '\'
ORDER BY name, id
";

const SEARCH_ALBUMS: &str = r"
SELECT id, name, total_tracks, release_date, album_type
FROM Album
WHERE name LIKE ?1 ESCAPE '\'
ORDER BY name, release_date, id
";

const SEARCH_TRACKS: &str = r"
SELECT T.id, T.name, A.name, COALESCE(GROUP_CONCAT(AR.name, '; '), '')
FROM Track T
         JOIN Album A ON T.album_id = A.id
         LEFT JOIN TrackArtist TA ON T.id = TA.track_id
         LEFT JOIN Artist AR ON TA.artist_id = AR.id
WHERE T.name LIKE ?1 ESCAPE '\'
GROUP BY T.id, A.id
ORDER BY T.name, A.name, T.id
";

const ALBUMS_BY_ALBUM_ARTIST: &str = "
SELECT A.id, A.name, A.total_tracks, A.release_date, A.album_type
FROM Album A
         JOIN AlbumArtist AA ON A.id = AA.album_id
WHERE AA.artist_id = ?1
";

const ALBUMS_BY_TRACK_ARTIST: &str = "
SELECT A.id, A.name, A.total_tracks, A.release_date, A.album_type
FROM Album A
         JOIN Track T ON A.id = T.album_id
         JOIN TrackArtist TA ON T.id = TA.track_id
WHERE TA.artist_id = ?1
";

const PLAYLISTS_BY_ARTIST: &str = "
SELECT PL.id, PL.name
FROM Playlist PL
         JOIN PlaylistTrack PT ON PL.id = PT.playlist_id
         JOIN Track T ON PT.track_id = T.id
         JOIN TrackArtist TA ON T.id = TA.track_id
WHERE TA.artist_id = ?1
GROUP BY PL.id, PL.name
ORDER BY PL.name, PL.id
";

const TRACKS_BY_ARTIST: &str = "
SELECT T.id, T.name, A.name, GROUP_CONCAT(AR.name, '; ')
FROM Track T
         JOIN Album A ON T.album_id = A.id
         JOIN TrackArtist TA ON T.id = TA.track_id
         JOIN Artist AR ON TA.artist_id = AR.id
WHERE T.id IN (SELECT track_id FROM TrackArtist WHERE artist_id = ?1)
GROUP BY T.id, A.id
ORDER BY A.release_date, A.id, T.track_number, T.id
";

const PLAYLIST_TRACKS: &str = "
SELECT T.id, T.name, A.name, COALESCE(GROUP_CONCAT(AR.name, '; '), ''),
       T.track_number, PT.added_at
FROM PlaylistTrack PT
         JOIN Track T ON PT.track_id = T.id
         JOIN Album A ON T.album_id = A.id
         LEFT JOIN TrackArtist TA ON T.id = TA.track_id
         LEFT JOIN Artist AR ON TA.artist_id = AR.id
WHERE PT.playlist_id = ?1
GROUP BY PT.rowid
ORDER BY PT.added_at, T.track_number, T.id, PT.rowid
";

const ALBUM_TRACKS: &str = "
SELECT T.id, T.name, T.track_number, COALESCE(GROUP_CONCAT(AR.name, '; '), '')
FROM Track T
         LEFT JOIN TrackArtist TA ON T.id = TA.track_id
         LEFT JOIN Artist AR ON TA.artist_id = AR.id
WHERE T.album_id = ?1
GROUP BY T.id
ORDER BY T.track_number, T.id
";

const PLAYLISTS_BY_TRACK: &str = "
SELECT P.id, P.name
FROM Playlist P
         JOIN PlaylistTrack PT ON P.id = PT.playlist_id
WHERE PT.track_id = ?1
GROUP BY P.id, P.name
ORDER BY P.name, P.id
";

// ?1 matches starred playlist names, ?2 is the search pattern.
const SEARCH_STARRED_PLAYLISTS: &str = r"
SELECT P.name, T.name, A.name, COALESCE(GROUP_CONCAT(AR.name, '; '), '')
FROM Playlist P
         JOIN PlaylistTrack PT ON P.id = PT.playlist_id
         JOIN Track T ON PT.track_id = T.id
         JOIN Album A ON T.album_id = A.id
         LEFT JOIN TrackArtist TA ON T.id = TA.track_id
         LEFT JOIN Artist AR ON TA.artist_id = AR.id
WHERE P.name LIKE ?1 ESCAPE '\'
  AND (T.name LIKE ?2 ESCAPE '\'
    OR A.name LIKE ?2 ESCAPE '\'
    OR EXISTS (SELECT 1
               FROM TrackArtist TA2
                        JOIN Artist AR2 ON TA2.artist_id = AR2.id
               WHERE TA2.track_id = T.id
                 AND AR2.name LIKE ?2 ESCAPE '\'))
GROUP BY P.name, T.id, A.id, PT.added_at, T.track_number
ORDER BY P.name, A.id, PT.added_at, T.track_number, T.id
";

// Distinct (track, playlist) pairs first, so a track added twice to the same
// starred playlist is not reported as a duplicate.
const DUPLICATE_STARRED_TRACKS: &str = r"
SELECT tracks.playlists, T.name, COALESCE(GROUP_CONCAT(AR.name, '; '), ''), A.name
FROM (SELECT starred.track_id,
             GROUP_CONCAT(starred.playlist_name, '; ' ORDER BY starred.playlist_name) AS playlists
      FROM (SELECT DISTINCT PT.track_id, P.id AS playlist_id, P.name AS playlist_name
            FROM PlaylistTrack PT
                     JOIN Playlist P ON P.id = PT.playlist_id
            WHERE P.name LIKE ?1 ESCAPE '\') AS starred
      GROUP BY starred.track_id
      HAVING COUNT(*) > 1) AS tracks
         JOIN Track T ON T.id = tracks.track_id
         JOIN Album A ON T.album_id = A.id
         LEFT JOIN TrackArtist TA ON T.id = TA.track_id
         LEFT JOIN Artist AR ON TA.artist_id = AR.id
GROUP BY T.id, A.id
ORDER BY A.id, T.id
";

/// Build a `LIKE` pattern matching `query` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped, so statements using
/// the pattern must declare `ESCAPE '\'`.
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn starred_pattern() -> String {
    format!("{}%", escape_like(STARRED_PREFIX))
}

pub struct Library {
    conn: Connection,
}

impl Library {
    /// Open the library file read-only and check that the expected tables exist.
    pub fn open(db_path: &Path, case_sensitive: bool) -> DbResult<Self> {
        info!("Opening music library at: {}", db_path.display());

        if !db_path.is_file() {
            return Err(DatabaseError::FileNotFound {
                path: db_path.to_path_buf(),
            });
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(DatabaseError::Connection)?;

        Self::from_connection(conn, case_sensitive)
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: Connection, case_sensitive: bool) -> DbResult<Self> {
        // SQLite's LIKE ignores ASCII case unless told otherwise.
        conn.pragma_update(None, "case_sensitive_like", case_sensitive)
            .map_err(DatabaseError::Connection)?;

        let library = Library { conn };
        library.verify_schema()?;
        Ok(library)
    }

    fn verify_schema(&self) -> DbResult<()> {
        let present: HashSet<String> = self.query_rows(
            "SELECT name FROM sqlite_master WHERE type IN ('table', 'view')",
            [],
            |row| Ok(row.get::<_, String>(0)?.to_lowercase()),
        )?;

        for table in REQUIRED_TABLES {
            if !present.contains(&table.to_lowercase()) {
                return Err(DatabaseError::MissingTable {
                    table: table.to_string(),
                });
            }
        }

        debug!("Library schema verified ({} tables present)", present.len());
        Ok(())
    }

    fn query_rows<T, C, P, F>(&self, sql: &str, params: P, map: F) -> DbResult<C>
    where
        C: FromIterator<T>,
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<rusqlite::Result<C>>()?;
        Ok(rows)
    }

    pub fn search_artists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        let artists: Vec<SimpleIdentifier> =
            self.query_rows(SEARCH_ARTISTS, [like_pattern(query)], row_to_identifier)?;
        debug!("Artist search '{}' matched {} row(s)", query, artists.len());
        Ok(artists)
    }

    pub fn search_playlists(&self, query: &str) -> DbResult<Vec<SimpleIdentifier>> {
        let playlists: Vec<SimpleIdentifier> =
            self.query_rows(SEARCH_PLAYLISTS, [like_pattern(query)], row_to_identifier)?;
        debug!("Playlist search '{}' matched {} row(s)", query, playlists.len());
        Ok(playlists)
    }

    pub fn search_albums(&self, query: &str) -> DbResult<Vec<Album>> {
        let albums: Vec<Album> =
            self.query_rows(SEARCH_ALBUMS, [like_pattern(query)], row_to_album)?;
        debug!("Album search '{}' matched {} row(s)", query, albums.len());
        Ok(albums)
    }

    pub fn search_tracks(&self, query: &str) -> DbResult<Vec<TrackMatch>> {
        let tracks: Vec<TrackMatch> =
            self.query_rows(SEARCH_TRACKS, [like_pattern(query)], row_to_track_match)?;
        debug!("Track search '{}' matched {} row(s)", query, tracks.len());
        Ok(tracks)
    }

    /// Albums credited to the artist directly or through any of their tracks.
    ///
    /// An artist with no albums yields an empty list.
    pub fn albums_by_artist(&self, artist_id: &str) -> DbResult<Vec<Album>> {
        let direct: Vec<Album> =
            self.query_rows(ALBUMS_BY_ALBUM_ARTIST, [artist_id], row_to_album)?;
        let via_tracks: Vec<Album> =
            self.query_rows(ALBUMS_BY_TRACK_ARTIST, [artist_id], row_to_album)?;

        debug!(
            "Artist {} has {} album credit row(s) and {} track credit row(s)",
            artist_id,
            direct.len(),
            via_tracks.len()
        );

        Ok(merge_albums([direct, via_tracks]))
    }

    pub fn playlists_by_artist(&self, artist_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        let playlists: Vec<SimpleIdentifier> =
            self.query_rows(PLAYLISTS_BY_ARTIST, [artist_id], row_to_identifier)?;
        debug!("Artist {} appears in {} playlist(s)", artist_id, playlists.len());
        Ok(playlists)
    }

    pub fn tracks_by_artist(&self, artist_id: &str) -> DbResult<Vec<TrackMatch>> {
        self.query_rows(TRACKS_BY_ARTIST, [artist_id], row_to_track_match)
    }

    pub fn playlist_tracks(&self, playlist_id: &str) -> DbResult<Vec<PlaylistEntry>> {
        let entries: Vec<PlaylistEntry> =
            self.query_rows(PLAYLIST_TRACKS, [playlist_id], |row| {
                Ok(PlaylistEntry {
                    track_id: row.get(0)?,
                    track_name: row.get(1)?,
                    album_name: row.get(2)?,
                    artists: row.get(3)?,
                    track_number: row.get(4)?,
                    added_at: row.get(5)?,
                })
            })?;
        debug!("Playlist {} has {} entries", playlist_id, entries.len());
        Ok(entries)
    }

    pub fn album_tracks(&self, album_id: &str) -> DbResult<Vec<AlbumTrack>> {
        self.query_rows(ALBUM_TRACKS, [album_id], |row| {
            Ok(AlbumTrack {
                track_id: row.get(0)?,
                track_name: row.get(1)?,
                track_number: row.get(2)?,
                artists: row.get(3)?,
            })
        })
    }

    pub fn playlists_by_track(&self, track_id: &str) -> DbResult<Vec<SimpleIdentifier>> {
        self.query_rows(PLAYLISTS_BY_TRACK, [track_id], row_to_identifier)
    }

    /// Tracks in starred playlists whose track, album or artist name contains `query`.
    pub fn search_starred_playlists(&self, query: &str) -> DbResult<Vec<StarredPlaylistMatch>> {
        let matches: Vec<StarredPlaylistMatch> = self.query_rows(
            SEARCH_STARRED_PLAYLISTS,
            [starred_pattern(), like_pattern(query)],
            |row| {
                Ok(StarredPlaylistMatch {
                    playlist_name: row.get(0)?,
                    track_name: row.get(1)?,
                    album_name: row.get(2)?,
                    artists: row.get(3)?,
                })
            },
        )?;
        debug!("Starred search '{}' matched {} row(s)", query, matches.len());
        Ok(matches)
    }

    /// Tracks found in more than one starred playlist.
    pub fn duplicate_starred_tracks(&self) -> DbResult<Vec<DuplicateTrack>> {
        let duplicates: Vec<DuplicateTrack> =
            self.query_rows(DUPLICATE_STARRED_TRACKS, [starred_pattern()], |row| {
                Ok(DuplicateTrack {
                    playlists: row.get(0)?,
                    track_name: row.get(1)?,
                    artists: row.get(2)?,
                    album_name: row.get(3)?,
                })
            })?;
        debug!("Found {} duplicate track(s) in starred playlists", duplicates.len());
        Ok(duplicates)
    }
}

fn row_to_identifier(row: &Row<'_>) -> rusqlite::Result<SimpleIdentifier> {
    Ok(SimpleIdentifier {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_album(row: &Row<'_>) -> rusqlite::Result<Album> {
    Ok(Album {
        id: row.get(0)?,
        name: row.get(1)?,
        total_tracks: row.get(2)?,
        release_date: row.get(3)?,
        album_type: row.get(4)?,
    })
}

fn row_to_track_match(row: &Row<'_>) -> rusqlite::Result<TrackMatch> {
    Ok(TrackMatch {
        id: row.get(0)?,
        name: row.get(1)?,
        album_name: row.get(2)?,
        artists: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::fixtures::{create_schema, fixture_connection, fixture_library};

    fn names(items: &[SimpleIdentifier]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("AC/DC"), "%AC/DC%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_artist_search_orders_alphabetically() {
        let library = fixture_library();
        let artists = library.search_artists("Beatles").unwrap();
        assert_eq!(names(&artists), vec!["Beatles Tribute Band", "The Beatles"]);
    }

    #[test]
    fn test_artist_search_is_case_sensitive() {
        let library = fixture_library();
        assert!(library.search_artists("beatles").unwrap().is_empty());
    }

    #[test]
    fn test_case_insensitive_search_when_configured() {
        let library = Library::from_connection(fixture_connection(), false).unwrap();
        let artists = library.search_artists("beatles").unwrap();
        assert_eq!(artists.len(), 2);
    }

    #[test]
    fn test_search_results_contain_query() {
        let library = fixture_library();
        for query in ["Bea", "e", "Davis", "n"] {
            let artists = library.search_artists(query).unwrap();
            assert!(artists.iter().all(|a| a.name.contains(query)), "query {query}");
            assert!(artists.windows(2).all(|w| w[0].name <= w[1].name), "query {query}");
        }
    }

    #[test]
    fn test_wildcards_match_literally() {
        let library = fixture_library();
        assert!(library.search_artists("%").unwrap().is_empty());
        assert!(library.search_artists("_").unwrap().is_empty());
        assert!(library.search_playlists("%").unwrap().is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let library = fixture_library();
        assert_eq!(library.search_artists("").unwrap().len(), 6);
    }

    #[test]
    fn test_search_is_idempotent() {
        let library = fixture_library();
        let first = library.search_playlists("Starred").unwrap();
        let second = library.search_playlists("Starred").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            names(&first),
            vec!["Starred 2020", "Starred Favorites", "Starred Solo"]
        );
    }

    #[test]
    fn test_albums_merge_direct_and_track_credits() {
        let library = fixture_library();
        let albums = library.albums_by_artist("ar1").unwrap();
        let titles: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(titles, vec!["Revolver", "Abbey Road", "Tribute Live"]);
    }

    #[test]
    fn test_albums_reached_only_through_tracks() {
        let library = fixture_library();
        let coltrane = library.albums_by_artist("ar4").unwrap();
        let titles: Vec<&str> = coltrane.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "Kind of Blue"]);

        let guest = library.albums_by_artist("ar6").unwrap();
        assert_eq!(guest.len(), 1);
        assert_eq!(guest[0].id, "al3");
    }

    #[test]
    fn test_album_ids_are_unique_and_sorted() {
        let library = fixture_library();
        for artist in ["ar1", "ar2", "ar3", "ar4", "ar5", "ar6"] {
            let albums = library.albums_by_artist(artist).unwrap();
            let ids: HashSet<&str> = albums.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids.len(), albums.len(), "artist {artist}");
            assert!(albums.windows(2).all(|w| w[0].release_date <= w[1].release_date));
        }
    }

    #[test]
    fn test_artist_without_albums_is_empty_not_error() {
        let library = fixture_library();
        assert!(library.albums_by_artist("ar5").unwrap().is_empty());
        assert!(library.albums_by_artist("no-such-artist").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_row_aborts_lookup() {
        let conn = fixture_connection();
        conn.execute_batch(
            "INSERT INTO Album VALUES ('al9', 'Undated', 3, NULL, 'single');
             INSERT INTO AlbumArtist VALUES ('al9', 'ar3');",
        )
        .unwrap();
        let library = Library::from_connection(conn, true).unwrap();

        let result = library.albums_by_artist("ar3");
        assert!(matches!(result, Err(DatabaseError::Query(_))));
    }

    #[test]
    fn test_playlists_by_artist() {
        let library = fixture_library();
        let playlists = library.playlists_by_artist("ar1").unwrap();
        assert_eq!(
            names(&playlists),
            vec!["Road Trip", "Starred 2020", "Starred Favorites", "starred lowercase"]
        );
        assert!(library.playlists_by_artist("ar5").unwrap().is_empty());
    }

    #[test]
    fn test_tracks_by_artist_ordered_by_release() {
        let library = fixture_library();
        let tracks = library.tracks_by_artist("ar4").unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "So What"]);
        assert!(tracks[1].artists.contains("Miles Davis"));
        assert!(tracks[1].artists.contains("John Coltrane"));
    }

    #[test]
    fn test_playlist_tracks_in_added_order() {
        let library = fixture_library();
        let entries = library.playlist_tracks("p1").unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.track_name.as_str()).collect();
        assert_eq!(titles, vec!["Something", "So What", "Taxman"]);
        assert_eq!(entries[0].added_at.as_deref(), Some("2020-01-05"));
        assert_eq!(entries[0].album_name, "Abbey Road");
    }

    #[test]
    fn test_album_tracks_in_track_order() {
        let library = fixture_library();
        let tracks = library.album_tracks("al3").unwrap();
        let numbers: Vec<i64> = tracks.iter().map(|t| t.track_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(tracks[1].track_name, "Freddie Freeloader");
    }

    fn library_with_uncredited_track() -> Library {
        let conn = fixture_connection();
        conn.execute_batch(
            "INSERT INTO Track VALUES ('t9', 'Hidden Track', 'al1', 9);
             INSERT INTO PlaylistTrack VALUES ('p3', 't9', '2019-06-05');
             INSERT INTO PlaylistTrack VALUES ('p4', 't4', '2018-01-01');
             INSERT INTO PlaylistTrack VALUES ('p4', 't8', NULL);
             INSERT INTO PlaylistTrack VALUES ('p4', 't8', NULL);",
        )
        .unwrap();
        Library::from_connection(conn, true).unwrap()
    }

    #[test]
    fn test_uncredited_track_is_listed_everywhere() {
        let library = library_with_uncredited_track();

        let entries = library.playlist_tracks("p3").unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.track_name.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Come Together",
                "Yesterday (Live)",
                "Blue Train",
                "Taxman",
                "Hidden Track",
            ]
        );
        assert_eq!(entries[4].artists, "");

        let tracks = library.album_tracks("al1").unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.track_name.as_str()).collect();
        assert_eq!(titles, vec!["Come Together", "Something", "Hidden Track"]);
        assert_eq!(tracks[2].artists, "");

        let found = library.search_tracks("Hidden").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].album_name, "Abbey Road");
        assert_eq!(found[0].artists, "");
    }

    #[test]
    fn test_repeated_playlist_additions_stay_separate() {
        let library = library_with_uncredited_track();
        let entries = library.playlist_tracks("p4").unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.track_name.as_str()).collect();
        // NULL added_at sorts first in SQLite.
        assert_eq!(
            titles,
            vec![
                "Freddie Freeloader",
                "Freddie Freeloader",
                "So What",
                "So What",
                "Blue in Green",
            ]
        );
        assert!(entries[2].artists.contains("Miles Davis"));
        assert!(entries[2].artists.contains("John Coltrane"));
    }

    #[test]
    fn test_playlists_by_track() {
        let library = fixture_library();
        let playlists = library.playlists_by_track("t4").unwrap();
        assert_eq!(
            names(&playlists),
            vec!["Jazz Evenings", "Starred 2020", "Starred Favorites"]
        );
    }

    #[test]
    fn test_album_and_track_search() {
        let library = fixture_library();
        let albums = library.search_albums("Blue").unwrap();
        let titles: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "Kind of Blue"]);

        let tracks = library.search_tracks("Blue").unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "Blue in Green"]);
    }

    #[test]
    fn test_duplicate_report() {
        let library = fixture_library();
        let duplicates = library.duplicate_starred_tracks().unwrap();

        let titles: Vec<&str> = duplicates.iter().map(|d| d.track_name.as_str()).collect();
        assert_eq!(titles, vec!["Something", "So What"]);

        let something = &duplicates[0];
        assert_eq!(something.playlists, "Starred 2020; Starred Favorites");
        assert_eq!(something.artists, "The Beatles");
        assert_eq!(something.album_name, "Abbey Road");
    }

    #[test]
    fn test_duplicate_report_ignores_repeats_within_one_playlist() {
        let library = fixture_library();
        let duplicates = library.duplicate_starred_tracks().unwrap();
        assert!(duplicates.iter().all(|d| d.track_name != "Blue in Green"));
        // "starred lowercase" lacks the prefix, so Taxman is starred only once.
        assert!(duplicates.iter().all(|d| d.track_name != "Taxman"));
    }

    #[test]
    fn test_starred_search_matches_track_album_and_artist() {
        let library = fixture_library();
        let matches = library.search_starred_playlists("Blue").unwrap();
        let rows: Vec<(&str, &str)> = matches
            .iter()
            .map(|m| (m.playlist_name.as_str(), m.track_name.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Starred 2020", "So What"),
                ("Starred Favorites", "So What"),
                ("Starred Favorites", "Freddie Freeloader"),
                ("Starred Solo", "Blue in Green"),
                ("Starred Solo", "Blue in Green"),
            ]
        );
    }

    #[test]
    fn test_starred_search_lists_all_credited_artists() {
        let library = fixture_library();
        let matches = library.search_starred_playlists("Coltrane").unwrap();
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.track_name, "So What");
            assert!(m.artists.contains("Miles Davis"));
            assert!(m.artists.contains("John Coltrane"));
        }
    }

    #[test]
    fn test_starred_search_skips_other_playlists() {
        let library = fixture_library();
        let matches = library.search_starred_playlists("Yesterday").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_missing_table_is_reported() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE Artist (id TEXT, name TEXT);").unwrap();
        match Library::from_connection(conn, true) {
            Err(DatabaseError::MissingTable { table }) => assert_eq!(table, "Album"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("schema check should fail"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let result = Library::open(Path::new("/nonexistent/library.db"), true);
        assert!(matches!(result, Err(DatabaseError::FileNotFound { .. })));
    }

    #[test]
    fn test_open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        {
            let conn = Connection::open(&path).unwrap();
            create_schema(&conn).unwrap();
        }

        let library = Library::open(&path, true).unwrap();
        assert!(library.search_artists("").unwrap().is_empty());
        let write = library
            .conn
            .execute("INSERT INTO Artist VALUES ('x', 'Intruder')", []);
        assert!(write.is_err());
    }
}
