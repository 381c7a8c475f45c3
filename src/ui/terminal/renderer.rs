//! Rendering engine for terminal UI
//!
//! Draws whatever screen the navigator has in front, plus the title bar,
//! message bar and key hints around it.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::input::{key_hints, InputContext};
use super::layout::{calculate_layout, AppLayout};
use super::navigation::{
    MenuScreen, MessageKind, MessageScreen, Navigator, PromptScreen, Screen, TableScreen,
};
use super::themes::Theme;

const APP_TITLE: &str = "plsearch";
const MAX_COLUMN_WIDTH: u16 = 40;
const HIGHLIGHT_SYMBOL: &str = "> ";

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame, navigator: &Navigator) {
        let layout: AppLayout = calculate_layout(frame.size());
        let screen = navigator.current();

        self.render_header(frame, layout.header, navigator);

        match screen {
            Screen::Menu(menu) => self.render_menu(frame, layout.content, menu),
            Screen::Table(table) => self.render_table(frame, layout.content, table),
            Screen::Prompt(prompt) => self.render_prompt(frame, layout.content, prompt),
            Screen::Message(message) => self.render_message(frame, layout.content, message),
        }

        self.render_message_bar(frame, layout.message, navigator);
        self.render_footer(frame, layout.footer, InputContext::for_screen(screen));
    }

    fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .title(Span::styled(format!(" {} ", title), self.theme.styles.panel_title))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.panel_border)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, navigator: &Navigator) {
        let breadcrumb = navigator.breadcrumb().join(" > ");
        let line = Line::from(vec![
            Span::styled(APP_TITLE, self.theme.styles.header),
            Span::styled("  ", self.theme.styles.text_muted),
            Span::styled(breadcrumb, self.theme.styles.text_normal),
        ]);

        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.styles.panel_border),
        );
        frame.render_widget(header, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect, menu: &MenuScreen) {
        let items: Vec<ListItem> = menu
            .items
            .iter()
            .map(|item| {
                let key = match item.shortcut {
                    Some(ch) => format!("({}) ", ch),
                    None => "    ".to_string(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(key, self.theme.styles.text_muted),
                    Span::styled(item.label.clone(), self.theme.styles.text_normal),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(self.panel(&menu.title))
            .highlight_style(self.theme.styles.selected)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        state.select(Some(menu.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, table: &TableScreen) {
        let header = Row::new(table.headers.clone()).style(self.theme.styles.table_header);

        let rows: Vec<Row> = table
            .rows
            .iter()
            .map(|row| Row::new(row.cells.clone()).style(self.theme.styles.table_cell))
            .collect();

        let widget = Table::new(rows, column_widths(table))
            .header(header)
            .block(self.panel(&table.title))
            .column_spacing(2)
            .highlight_style(self.theme.styles.selected)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut state = TableState::default();
        state.select(Some(table.selected));
        frame.render_stateful_widget(widget, area, &mut state);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, prompt: &PromptScreen) {
        let input_area = Rect {
            height: area.height.min(3),
            ..area
        };

        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", self.theme.styles.text_muted),
            Span::styled(prompt.input.clone(), self.theme.styles.text_normal),
        ]))
        .block(self.panel(prompt.kind.prompt_title()));
        frame.render_widget(input, input_area);

        if input_area.height == 3 {
            let typed = prompt.input.width() as u16;
            let cursor_x = (input_area.x + 3 + typed).min(input_area.right().saturating_sub(2));
            frame.set_cursor(cursor_x, input_area.y + 1);
        }
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, message: &MessageScreen) {
        let (border, text) = match message.kind {
            MessageKind::Info => (self.theme.styles.panel_border, self.theme.styles.info),
            MessageKind::Error => (self.theme.styles.error, self.theme.styles.error),
        };

        let paragraph = Paragraph::new(Span::styled(message.text.clone(), text))
            .block(self.panel(&message.title).border_style(border))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_message_bar(&self, frame: &mut Frame, area: Rect, navigator: &Navigator) {
        let (text, style): (String, Style) = match navigator.status() {
            Some(status) => (status.to_string(), self.theme.styles.error),
            None => (
                context_line(navigator.current()),
                self.theme.styles.text_muted,
            ),
        };

        let bar = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.styles.panel_border),
        );
        frame.render_widget(bar, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, context: InputContext) {
        let footer = Paragraph::new(Span::styled(key_hints(context), self.theme.styles.footer));
        frame.render_widget(footer, area);
    }
}

/// What the message bar says when there is no status to report.
fn context_line(screen: &Screen) -> String {
    match screen {
        Screen::Menu(menu) => menu
            .items
            .get(menu.selected)
            .map(|item| item.description.clone())
            .unwrap_or_default(),
        Screen::Table(table) if table.rows.is_empty() => "No rows".to_string(),
        Screen::Table(table) => format!("Row {} of {}", table.selected + 1, table.rows.len()),
        Screen::Prompt(_) => "Type part of a name and press Enter".to_string(),
        Screen::Message(_) => "Press Enter to go back".to_string(),
    }
}

/// Column widths fitted to the widest cell; the last column takes the rest.
fn column_widths(table: &TableScreen) -> Vec<Constraint> {
    let columns = table.headers.len();
    (0..columns)
        .map(|index| {
            let widest = table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(index))
                .chain(std::iter::once(&table.headers[index]))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            let width = (widest as u16).min(MAX_COLUMN_WIDTH);

            if index + 1 == columns {
                Constraint::Min(width)
            } else {
                Constraint::Length(width)
            }
        })
        .collect()
}
