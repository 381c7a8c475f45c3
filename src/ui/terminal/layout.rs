//! Screen areas of the browser

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const MESSAGE_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Complete layout structure with all panel areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub message: Rect,
    pub footer: Rect,
}

/// Split the terminal into title bar, content, message bar and key hints.
///
/// On very small terminals the content area shrinks first, down to nothing.
pub fn calculate_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        content: chunks[1],
        message: chunks[2],
        footer: chunks[3],
    }
}
