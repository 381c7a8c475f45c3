//! Plain-text and JSON output for the non-interactive commands

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::models::{
    Album, AlbumTrack, DuplicateTrack, PlaylistEntry, SimpleIdentifier, StarredPlaylistMatch,
    TrackMatch,
};
use crate::error::Result;

const MAX_CELL_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// A record that can be shown as one table row.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Tabular for SimpleIdentifier {
    fn headers() -> &'static [&'static str] {
        &["Id", "Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

impl Tabular for Album {
    fn headers() -> &'static [&'static str] {
        &["Id", "Name", "Tracks", "Release Date", "Type"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.total_tracks.to_string(),
            self.release_date.clone(),
            self.album_type.clone(),
        ]
    }
}

impl Tabular for TrackMatch {
    fn headers() -> &'static [&'static str] {
        &["Id", "Track", "Album", "Artists"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.album_name.clone(),
            self.artists.clone(),
        ]
    }
}

impl Tabular for PlaylistEntry {
    fn headers() -> &'static [&'static str] {
        &["Id", "Track", "Album", "Artists", "Added"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.track_id.clone(),
            self.track_name.clone(),
            self.album_name.clone(),
            self.artists.clone(),
            self.added_at.clone().unwrap_or_default(),
        ]
    }
}

impl Tabular for AlbumTrack {
    fn headers() -> &'static [&'static str] {
        &["#", "Id", "Track", "Artists"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.track_number.to_string(),
            self.track_id.clone(),
            self.track_name.clone(),
            self.artists.clone(),
        ]
    }
}

impl Tabular for StarredPlaylistMatch {
    fn headers() -> &'static [&'static str] {
        &["Playlist", "Track", "Album", "Artists"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.playlist_name.clone(),
            self.track_name.clone(),
            self.album_name.clone(),
            self.artists.clone(),
        ]
    }
}

impl Tabular for DuplicateTrack {
    fn headers() -> &'static [&'static str] {
        &["Track", "Artists", "Album", "Playlists"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.track_name.clone(),
            self.artists.clone(),
            self.album_name.clone(),
            self.playlists.clone(),
        ]
    }
}

/// Write results in the requested format. An empty table writes `empty_message`.
pub fn print_results<T, W>(
    out: &mut W,
    items: &[T],
    format: OutputFormat,
    empty_message: &str,
) -> Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => output_json(out, items),
        OutputFormat::Table if items.is_empty() => {
            writeln!(out, "{}", empty_message)?;
            Ok(())
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = items.iter().map(Tabular::cells).collect();
            write!(out, "{}", render_table(T::headers(), &rows))?;
            writeln!(out, "\n{} result(s)", items.len())?;
            Ok(())
        }
    }
}

fn output_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Lay out rows under a header, each column as wide as its widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| truncate_string(cell, *width))
            .collect();
        padded.join(COLUMN_GAP).trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(headers.to_vec()));
    out.push('\n');

    let gaps = COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let rule_width = widths.iter().sum::<usize>() + gaps;
    out.push_str(&"─".repeat(rule_width));
    out.push('\n');

    for row in rows {
        out.push_str(&format_line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// Pad or cut `s` to exactly `max_len` display columns, ending cut text with '…'.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let visual_width = s.width();
    if visual_width <= max_len {
        let padding = max_len - visual_width;
        return format!("{}{}", s, " ".repeat(padding));
    }

    let ellipsis_width = UnicodeWidthChar::width('…').unwrap_or(1);
    let mut truncated = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width + ellipsis_width > max_len {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }

    if max_len >= ellipsis_width {
        truncated.push('…');
        current_width += ellipsis_width;
    }
    let padding = max_len.saturating_sub(current_width);
    format!("{}{}", truncated, " ".repeat(padding))
}
