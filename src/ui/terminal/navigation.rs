//! Screen stack driving the browser
//!
//! The main menu sits permanently at the bottom; every other screen is pushed
//! on top of it. All changes go through [`Navigator::apply`], which runs the
//! library queries a selection calls for and decides which screen comes next.
//! Query failures become error screens and the session continues. Broken
//! bookkeeping (a selection that points past the end of a list) is returned as
//! [`PlaylistSearchError::Invariant`] and ends the session.

use tracing::{debug, error, info};

use crate::core::models::{
    Album, AlbumTrack, DuplicateTrack, PlaylistEntry, SearchOutcome, SimpleIdentifier,
    StarredPlaylistMatch, TrackMatch,
};
use crate::error::{DatabaseError, PlaylistSearchError, Result};
use crate::services::LibraryService;

/// Rows skipped by PageUp / PageDown.
pub const PAGE_SIZE: usize = 10;

pub const MAIN_MENU_TITLE: &str = "Main menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Artists,
    Playlists,
    Albums,
    Tracks,
    Starred,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Artists => "Artists",
            SearchKind::Playlists => "Playlists",
            SearchKind::Albums => "Albums",
            SearchKind::Tracks => "Tracks",
            SearchKind::Starred => "Starred playlists",
        }
    }

    pub fn prompt_title(&self) -> &'static str {
        match self {
            SearchKind::Artists => "Search artists",
            SearchKind::Playlists => "Search playlists",
            SearchKind::Albums => "Search albums",
            SearchKind::Tracks => "Search tracks",
            SearchKind::Starred => "Search starred playlists",
        }
    }
}

/// What selecting a menu item or table row leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    Search(SearchKind),
    Duplicates,
    Quit,
    Home,
    Reset,
    Artist(SimpleIdentifier),
    ArtistAlbums(SimpleIdentifier),
    ArtistTracks(SimpleIdentifier),
    ArtistPlaylists(SimpleIdentifier),
    PlaylistTracks(SimpleIdentifier),
    AlbumTracks(SimpleIdentifier),
    TrackPlaylists(SimpleIdentifier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub description: String,
    pub shortcut: Option<char>,
    pub target: MenuTarget,
}

impl MenuItem {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        shortcut: Option<char>,
        target: MenuTarget,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            shortcut,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScreen {
    pub title: String,
    pub items: Vec<MenuItem>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub target: Option<MenuTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableScreen {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptScreen {
    pub kind: SearchKind,
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScreen {
    pub title: String,
    pub text: String,
    pub kind: MessageKind,
}

impl MessageScreen {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu(MenuScreen),
    Prompt(PromptScreen),
    Table(TableScreen),
    Message(MessageScreen),
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Screen::Menu(menu) => &menu.title,
            Screen::Prompt(prompt) => prompt.kind.prompt_title(),
            Screen::Table(table) => &table.title,
            Screen::Message(message) => &message.title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    PageDown,
    PageUp,
    First,
    Last,
    Select,
    Shortcut(char),
    Input(char),
    DeleteChar,
    Back,
    Home,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

enum Selection {
    Open(MenuTarget),
    Submit(SearchKind, String),
    Dismiss,
    Nothing,
}

fn invariant(message: String) -> PlaylistSearchError {
    PlaylistSearchError::Invariant(message)
}

pub fn main_menu() -> MenuScreen {
    let search = |kind: SearchKind, shortcut: char, description: &str| {
        MenuItem::new(kind.label(), description, Some(shortcut), MenuTarget::Search(kind))
    };

    MenuScreen {
        title: MAIN_MENU_TITLE.to_string(),
        items: vec![
            search(SearchKind::Artists, '1', "Find artists by name"),
            search(SearchKind::Playlists, '2', "Find playlists by name"),
            search(SearchKind::Albums, '3', "Find albums by name"),
            search(SearchKind::Tracks, '4', "Find tracks by name"),
            search(
                SearchKind::Starred,
                '5',
                "Search track, album and artist names inside starred playlists",
            ),
            MenuItem::new(
                "Duplicate tracks",
                "Tracks found in more than one starred playlist",
                Some('6'),
                MenuTarget::Duplicates,
            ),
            MenuItem::new("Quit", "Exit the browser", Some('q'), MenuTarget::Quit),
        ],
        selected: 0,
    }
}

fn flow_items() -> [MenuItem; 2] {
    [
        MenuItem::new("Quit", "Back to the main menu", Some('q'), MenuTarget::Home),
        MenuItem::new("Reset", "Start a new search", Some('r'), MenuTarget::Reset),
    ]
}

/// A list of entries followed by the "Quit" and "Reset" items.
fn list_menu(title: String, mut items: Vec<MenuItem>) -> MenuScreen {
    items.extend(flow_items());
    MenuScreen {
        title,
        items,
        selected: 0,
    }
}

/// Menu for a search that matched several entries.
pub fn search_results_menu(title: String, items: Vec<MenuItem>) -> Result<MenuScreen> {
    if items.len() < 2 {
        return Err(invariant(format!(
            "result list '{}' built with {} entries",
            title,
            items.len()
        )));
    }
    Ok(list_menu(title, items))
}

fn artist_menu(artist: SimpleIdentifier) -> MenuScreen {
    let items = vec![
        MenuItem::new(
            "Albums",
            format!("Albums credited to {}", artist.name),
            Some('a'),
            MenuTarget::ArtistAlbums(artist.clone()),
        ),
        MenuItem::new(
            "Tracks",
            format!("Tracks credited to {}", artist.name),
            Some('t'),
            MenuTarget::ArtistTracks(artist.clone()),
        ),
        MenuItem::new(
            "Playlists",
            format!("Playlists containing tracks by {}", artist.name),
            Some('l'),
            MenuTarget::ArtistPlaylists(artist.clone()),
        ),
    ];
    list_menu(artist.name, items)
}

fn playlist_items(playlists: Vec<SimpleIdentifier>) -> Vec<MenuItem> {
    playlists
        .into_iter()
        .map(|playlist| {
            MenuItem::new(
                playlist.name.clone(),
                format!("Playlist id {}", playlist.id),
                None,
                MenuTarget::PlaylistTracks(playlist),
            )
        })
        .collect()
}

fn table(title: String, headers: &[&str], rows: Vec<TableRow>) -> TableScreen {
    TableScreen {
        title,
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
        selected: 0,
    }
}

fn track_target(id: &str, name: &str) -> Option<MenuTarget> {
    Some(MenuTarget::TrackPlaylists(SimpleIdentifier::new(id, name)))
}

fn albums_table(title: String, albums: Vec<Album>) -> TableScreen {
    let rows = albums
        .into_iter()
        .map(|album| TableRow {
            cells: vec![
                album.name.clone(),
                album.total_tracks.to_string(),
                album.release_date,
                album.album_type,
            ],
            target: Some(MenuTarget::AlbumTracks(SimpleIdentifier::new(album.id, album.name))),
        })
        .collect();
    table(title, &["Name", "Tracks", "Release Date", "Type"], rows)
}

fn tracks_table(title: String, tracks: Vec<TrackMatch>) -> TableScreen {
    let rows = tracks
        .into_iter()
        .map(|track| TableRow {
            target: track_target(&track.id, &track.name),
            cells: vec![track.name, track.album_name, track.artists],
        })
        .collect();
    table(title, &["Track", "Album", "Artists"], rows)
}

fn playlist_table(title: String, entries: Vec<PlaylistEntry>) -> TableScreen {
    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| TableRow {
            target: track_target(&entry.track_id, &entry.track_name),
            cells: vec![
                (position + 1).to_string(),
                entry.track_name,
                entry.album_name,
                entry.artists,
                entry.added_at.unwrap_or_default(),
            ],
        })
        .collect();
    table(title, &["#", "Track", "Album", "Artists", "Added"], rows)
}

fn album_tracks_table(title: String, tracks: Vec<AlbumTrack>) -> TableScreen {
    let rows = tracks
        .into_iter()
        .map(|track| TableRow {
            target: track_target(&track.track_id, &track.track_name),
            cells: vec![track.track_number.to_string(), track.track_name, track.artists],
        })
        .collect();
    table(title, &["#", "Track", "Artists"], rows)
}

fn starred_table(title: String, matches: Vec<StarredPlaylistMatch>) -> TableScreen {
    let rows = matches
        .into_iter()
        .map(|m| TableRow {
            cells: vec![m.playlist_name, m.track_name, m.album_name, m.artists],
            target: None,
        })
        .collect();
    table(title, &["Playlist", "Track", "Album", "Artists"], rows)
}

fn duplicates_table(duplicates: Vec<DuplicateTrack>) -> TableScreen {
    let rows = duplicates
        .into_iter()
        .map(|d| TableRow {
            cells: vec![d.track_name, d.artists, d.album_name, d.playlists],
            target: None,
        })
        .collect();
    table(
        "Duplicate tracks in starred playlists".to_string(),
        &["Track", "Artists", "Album", "Playlists"],
        rows,
    )
}

fn wrap_next(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1) % len
    }
}

fn wrap_previous(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if selected == 0 {
        len - 1
    } else {
        selected - 1
    }
}

fn clamped(selected: usize, action: Action, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match action {
        Action::Next => (selected + 1).min(last),
        Action::Previous => selected.saturating_sub(1),
        Action::PageDown => (selected + PAGE_SIZE).min(last),
        Action::PageUp => selected.saturating_sub(PAGE_SIZE),
        Action::First => 0,
        Action::Last => last,
        _ => selected,
    }
}

pub struct Navigator {
    main_menu: Screen,
    stack: Vec<Screen>,
    min_query_length: usize,
    status: Option<String>,
}

impl Navigator {
    pub fn new(min_query_length: usize) -> Self {
        Self {
            main_menu: Screen::Menu(main_menu()),
            stack: Vec::new(),
            min_query_length,
            status: None,
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().unwrap_or(&self.main_menu)
    }

    fn current_mut(&mut self) -> &mut Screen {
        self.stack.last_mut().unwrap_or(&mut self.main_menu)
    }

    /// Number of screens including the main menu.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Screen titles from the main menu to the current screen.
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(&self.main_menu)
            .chain(self.stack.iter())
            .map(Screen::title)
            .collect()
    }

    /// One-off hint for the message bar, cleared by the next action.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn push(&mut self, screen: Screen) {
        debug!("Opening screen '{}'", screen.title());
        self.stack.push(screen);
    }

    pub fn apply(&mut self, library: &dyn LibraryService, action: Action) -> Result<Transition> {
        self.status = None;

        match action {
            Action::Quit => return Ok(Transition::Quit),
            Action::Select => return self.select(library),
            Action::Shortcut(key) => return self.shortcut(library, key),
            Action::Back => self.back(),
            Action::Home => self.home(),
            Action::Reset => self.reset(),
            Action::Input(ch) => {
                if let Screen::Prompt(prompt) = self.current_mut() {
                    prompt.input.push(ch);
                }
            }
            Action::DeleteChar => {
                if let Screen::Prompt(prompt) = self.current_mut() {
                    prompt.input.pop();
                }
            }
            Action::Next
            | Action::Previous
            | Action::PageDown
            | Action::PageUp
            | Action::First
            | Action::Last => self.move_selection(action),
        }

        Ok(Transition::Continue)
    }

    fn back(&mut self) {
        self.stack.pop();
    }

    fn home(&mut self) {
        self.stack.clear();
    }

    /// Reopen the prompt of the search in progress, with an empty query.
    fn reset(&mut self) {
        let prompt_at = self
            .stack
            .iter()
            .rposition(|screen| matches!(screen, Screen::Prompt(_)));

        match prompt_at {
            Some(index) => {
                self.stack.truncate(index + 1);
                if let Screen::Prompt(prompt) = self.current_mut() {
                    prompt.input.clear();
                }
            }
            None => self.status = Some("No search to reset".to_string()),
        }
    }

    fn move_selection(&mut self, action: Action) {
        match self.current_mut() {
            Screen::Menu(menu) => {
                let len = menu.items.len();
                menu.selected = match action {
                    Action::Next => wrap_next(menu.selected, len),
                    Action::Previous => wrap_previous(menu.selected, len),
                    _ => clamped(menu.selected, action, len),
                };
            }
            Screen::Table(table) => {
                table.selected = clamped(table.selected, action, table.rows.len());
            }
            Screen::Prompt(_) | Screen::Message(_) => {}
        }
    }

    fn shortcut(&mut self, library: &dyn LibraryService, key: char) -> Result<Transition> {
        if let Screen::Menu(menu) = self.current_mut() {
            if let Some(index) = menu.items.iter().position(|item| item.shortcut == Some(key)) {
                menu.selected = index;
                return self.select(library);
            }
        }
        Ok(Transition::Continue)
    }

    fn select(&mut self, library: &dyn LibraryService) -> Result<Transition> {
        let selection = match self.current() {
            Screen::Menu(menu) => {
                let item = menu.items.get(menu.selected).ok_or_else(|| {
                    invariant(format!(
                        "menu '{}' has {} items but item {} is selected",
                        menu.title,
                        menu.items.len(),
                        menu.selected
                    ))
                })?;
                Selection::Open(item.target.clone())
            }
            Screen::Table(table) if table.rows.is_empty() => Selection::Nothing,
            Screen::Table(table) => {
                let row = table.rows.get(table.selected).ok_or_else(|| {
                    invariant(format!(
                        "table '{}' has {} rows but row {} is selected",
                        table.title,
                        table.rows.len(),
                        table.selected
                    ))
                })?;
                match &row.target {
                    Some(target) => Selection::Open(target.clone()),
                    None => Selection::Nothing,
                }
            }
            Screen::Prompt(prompt) => Selection::Submit(prompt.kind, prompt.input.clone()),
            Screen::Message(_) => Selection::Dismiss,
        };

        match selection {
            Selection::Open(target) => return self.open(library, target),
            Selection::Submit(kind, query) => self.submit(library, kind, query)?,
            Selection::Dismiss => self.back(),
            Selection::Nothing => {}
        }

        Ok(Transition::Continue)
    }

    fn fail(&mut self, operation: &str, err: DatabaseError) {
        error!("{} failed: {}", operation, err);
        self.push(Screen::Message(MessageScreen::error(
            operation,
            format!("{} failed: {}", operation, err),
        )));
    }

    fn inform(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.push(Screen::Message(MessageScreen::info(title, text)));
    }

    fn open(&mut self, library: &dyn LibraryService, target: MenuTarget) -> Result<Transition> {
        match target {
            MenuTarget::Quit => return Ok(Transition::Quit),
            MenuTarget::Home => self.home(),
            MenuTarget::Reset => self.reset(),
            MenuTarget::Search(kind) => self.push(Screen::Prompt(PromptScreen {
                kind,
                input: String::new(),
            })),
            MenuTarget::Duplicates => match library.duplicate_starred_tracks() {
                Ok(duplicates) if duplicates.is_empty() => self.inform(
                    "Duplicate tracks",
                    "No track appears in more than one starred playlist",
                ),
                Ok(duplicates) => self.push(Screen::Table(duplicates_table(duplicates))),
                Err(err) => self.fail("Duplicate report", err),
            },
            MenuTarget::Artist(artist) => self.push(Screen::Menu(artist_menu(artist))),
            MenuTarget::ArtistAlbums(artist) => match library.albums_by_artist(&artist.id) {
                Ok(albums) if albums.is_empty() => self.inform(
                    artist.name.clone(),
                    format!(
                        "There are no Albums for artist {} (Id = {})",
                        artist.name, artist.id
                    ),
                ),
                Ok(albums) => self.push(Screen::Table(albums_table(
                    format!("Albums of {}", artist.name),
                    albums,
                ))),
                Err(err) => self.fail("Album lookup", err),
            },
            MenuTarget::ArtistTracks(artist) => match library.tracks_by_artist(&artist.id) {
                Ok(tracks) if tracks.is_empty() => self.inform(
                    artist.name.clone(),
                    format!(
                        "There are no Tracks for artist {} (Id = {})",
                        artist.name, artist.id
                    ),
                ),
                Ok(tracks) => self.push(Screen::Table(tracks_table(
                    format!("Tracks of {}", artist.name),
                    tracks,
                ))),
                Err(err) => self.fail("Track lookup", err),
            },
            MenuTarget::ArtistPlaylists(artist) => {
                match library.playlists_by_artist(&artist.id) {
                    Ok(playlists) if playlists.is_empty() => self.inform(
                        artist.name.clone(),
                        format!(
                            "There are no Playlists for artist {} (Id = {})",
                            artist.name, artist.id
                        ),
                    ),
                    Ok(playlists) => self.push(Screen::Menu(list_menu(
                        format!("Playlists with {}", artist.name),
                        playlist_items(playlists),
                    ))),
                    Err(err) => self.fail("Playlist lookup", err),
                }
            }
            MenuTarget::PlaylistTracks(playlist) => match library.playlist_tracks(&playlist.id) {
                Ok(entries) if entries.is_empty() => {
                    let text = format!("Playlist {} is empty", playlist.name);
                    self.inform(playlist.name.clone(), text)
                }
                Ok(entries) => self.push(Screen::Table(playlist_table(playlist.name, entries))),
                Err(err) => self.fail("Playlist lookup", err),
            },
            MenuTarget::AlbumTracks(album) => match library.album_tracks(&album.id) {
                Ok(tracks) if tracks.is_empty() => {
                    self.inform(album.name.clone(), format!("Album {} has no tracks", album.name))
                }
                Ok(tracks) => self.push(Screen::Table(album_tracks_table(album.name, tracks))),
                Err(err) => self.fail("Album lookup", err),
            },
            MenuTarget::TrackPlaylists(track) => match library.playlists_by_track(&track.id) {
                Ok(playlists) if playlists.is_empty() => self.inform(
                    track.name.clone(),
                    format!("Track {} is not in any playlist", track.name),
                ),
                Ok(playlists) => self.push(Screen::Menu(list_menu(
                    format!("Playlists containing {}", track.name),
                    playlist_items(playlists),
                ))),
                Err(err) => self.fail("Playlist lookup", err),
            },
        }

        Ok(Transition::Continue)
    }

    fn submit(
        &mut self,
        library: &dyn LibraryService,
        kind: SearchKind,
        query: String,
    ) -> Result<()> {
        if query.chars().count() < self.min_query_length {
            self.status = Some(format!(
                "Enter at least {} characters",
                self.min_query_length
            ));
            return Ok(());
        }

        info!("{} search for '{}'", kind.label(), query);
        let title = format!("{} matching \"{}\"", kind.label(), query);
        let no_matches = format!("There are no matches for the query {}", query);
        let operation = format!("{} search", kind.label());

        match kind {
            SearchKind::Artists => match library.search_artists(&query) {
                Err(err) => self.fail(&operation, err),
                Ok(artists) => match SearchOutcome::from_results(artists) {
                    SearchOutcome::Empty => self.inform(kind.label(), no_matches),
                    SearchOutcome::Single(artist) => {
                        self.push(Screen::Menu(artist_menu(artist)));
                    }
                    SearchOutcome::Multiple(artists) => {
                        let items = artists
                            .into_iter()
                            .map(|artist| {
                                MenuItem::new(
                                    artist.name.clone(),
                                    format!("Artist id {}", artist.id),
                                    None,
                                    MenuTarget::Artist(artist),
                                )
                            })
                            .collect();
                        self.push(Screen::Menu(search_results_menu(title, items)?));
                    }
                },
            },
            SearchKind::Playlists => match library.search_playlists(&query) {
                Err(err) => self.fail(&operation, err),
                Ok(playlists) => match SearchOutcome::from_results(playlists) {
                    SearchOutcome::Empty => self.inform(kind.label(), no_matches),
                    SearchOutcome::Single(playlist) => {
                        self.open(library, MenuTarget::PlaylistTracks(playlist))?;
                    }
                    SearchOutcome::Multiple(playlists) => {
                        let menu = search_results_menu(title, playlist_items(playlists))?;
                        self.push(Screen::Menu(menu));
                    }
                },
            },
            SearchKind::Albums => match library.search_albums(&query) {
                Err(err) => self.fail(&operation, err),
                Ok(albums) => match SearchOutcome::from_results(albums) {
                    SearchOutcome::Empty => self.inform(kind.label(), no_matches),
                    SearchOutcome::Single(album) => {
                        let album = SimpleIdentifier::new(album.id, album.name);
                        let target = MenuTarget::AlbumTracks(album);
                        self.open(library, target)?;
                    }
                    SearchOutcome::Multiple(albums) => {
                        self.push(Screen::Table(albums_table(title, albums)));
                    }
                },
            },
            SearchKind::Tracks => match library.search_tracks(&query) {
                Err(err) => self.fail(&operation, err),
                Ok(tracks) => match SearchOutcome::from_results(tracks) {
                    SearchOutcome::Empty => self.inform(kind.label(), no_matches),
                    SearchOutcome::Single(track) => {
                        let track = SimpleIdentifier::new(track.id, track.name);
                        let target = MenuTarget::TrackPlaylists(track);
                        self.open(library, target)?;
                    }
                    SearchOutcome::Multiple(tracks) => {
                        self.push(Screen::Table(tracks_table(title, tracks)));
                    }
                },
            },
            // A single starred match is already the detail row, so it stays a table.
            SearchKind::Starred => match library.search_starred_playlists(&query) {
                Err(err) => self.fail(&operation, err),
                Ok(matches) if matches.is_empty() => self.inform(kind.label(), no_matches),
                Ok(matches) => self.push(Screen::Table(starred_table(title, matches))),
            },
        }

        Ok(())
    }
}
