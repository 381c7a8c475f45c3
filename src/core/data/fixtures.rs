//! In-memory library used by tests across the crate

use rusqlite::Connection;

use super::library::Library;

const SCHEMA: &str = "
CREATE TABLE Artist (id TEXT PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE Album (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    total_tracks INTEGER,
    release_date TEXT,
    album_type TEXT
);
CREATE TABLE AlbumArtist (album_id TEXT NOT NULL, artist_id TEXT NOT NULL);
CREATE TABLE Track (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    album_id TEXT NOT NULL,
    track_number INTEGER
);
CREATE TABLE TrackArtist (track_id TEXT NOT NULL, artist_id TEXT NOT NULL);
CREATE TABLE Playlist (id TEXT PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE PlaylistTrack (playlist_id TEXT NOT NULL, track_id TEXT NOT NULL, added_at TEXT);
";

const SEED: &str = "
INSERT INTO Artist VALUES
    ('ar1', 'The Beatles'),
    ('ar2', 'Beatles Tribute Band'),
    ('ar3', 'Miles Davis'),
    ('ar4', 'John Coltrane'),
    ('ar5', 'Lonely Artist'),
    ('ar6', 'Guest Singer');

INSERT INTO Album VALUES
    ('al1', 'Abbey Road', 17, '1969-09-26', 'album'),
    ('al2', 'Revolver', 14, '1966-08-05', 'album'),
    ('al3', 'Kind of Blue', 5, '1959-08-17', 'album'),
    ('al4', 'Tribute Live', 2, '2005', 'album'),
    ('al6', 'Blue Train', 5, '1957-09-15', 'album');

INSERT INTO AlbumArtist VALUES
    ('al1', 'ar1'),
    ('al2', 'ar1'),
    ('al3', 'ar3'),
    ('al4', 'ar2'),
    ('al6', 'ar4');

INSERT INTO Track VALUES
    ('t1', 'Come Together', 'al1', 1),
    ('t2', 'Something', 'al1', 2),
    ('t3', 'Taxman', 'al2', 1),
    ('t4', 'So What', 'al3', 1),
    ('t5', 'Blue in Green', 'al3', 3),
    ('t6', 'Yesterday (Live)', 'al4', 1),
    ('t7', 'Blue Train', 'al6', 1),
    ('t8', 'Freddie Freeloader', 'al3', 2);

INSERT INTO TrackArtist VALUES
    ('t1', 'ar1'),
    ('t2', 'ar1'),
    ('t3', 'ar1'),
    ('t4', 'ar3'),
    ('t4', 'ar4'),
    ('t5', 'ar3'),
    ('t6', 'ar2'),
    ('t6', 'ar1'),
    ('t7', 'ar4'),
    ('t8', 'ar3'),
    ('t8', 'ar6');

INSERT INTO Playlist VALUES
    ('p1', 'Starred 2020'),
    ('p2', 'Starred Favorites'),
    ('p3', 'Road Trip'),
    ('p4', 'Jazz Evenings'),
    ('p5', 'starred lowercase'),
    ('p6', 'Starred Solo');

INSERT INTO PlaylistTrack VALUES
    ('p1', 't2', '2020-01-05'),
    ('p1', 't4', '2020-02-01'),
    ('p1', 't3', '2020-03-10'),
    ('p2', 't2', '2021-03-01'),
    ('p2', 't4', '2021-04-01'),
    ('p2', 't8', '2021-05-01'),
    ('p3', 't1', '2019-06-01'),
    ('p3', 't6', '2019-06-02'),
    ('p3', 't7', '2019-06-03'),
    ('p3', 't3', '2019-06-04'),
    ('p4', 't4', '2018-01-01'),
    ('p4', 't5', '2018-01-02'),
    ('p5', 't3', '2022-05-01'),
    ('p6', 't5', '2022-01-01'),
    ('p6', 't5', '2022-02-01');
";

pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// A seeded in-memory connection, for tests that need to add rows first.
pub fn fixture_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    create_schema(&conn).expect("fixture schema");
    conn.execute_batch(SEED).expect("fixture data");
    conn
}

/// The seeded library with case-sensitive matching.
pub fn fixture_library() -> Library {
    Library::from_connection(fixture_connection(), true).expect("fixture library")
}

/// The same schema without any rows.
pub fn empty_library() -> Library {
    let conn = Connection::open_in_memory().expect("in-memory database");
    create_schema(&conn).expect("fixture schema");
    Library::from_connection(conn, true).expect("empty library")
}
