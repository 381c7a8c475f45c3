//! Key bindings for the browser
//!
//! Keys are translated into navigation actions according to the kind of
//! screen in front. Prompts take printable characters as text, so the
//! single-letter bindings only apply to lists, tables and messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::navigation::{Action, Screen};

/// Input context for determining how a key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Menu,
    Table,
    Prompt,
    Message,
}

impl InputContext {
    pub fn for_screen(screen: &Screen) -> Self {
        match screen {
            Screen::Menu(_) => InputContext::Menu,
            Screen::Table(_) => InputContext::Table,
            Screen::Prompt(_) => InputContext::Prompt,
            Screen::Message(_) => InputContext::Message,
        }
    }
}

fn movement(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('p') => Some(Action::Previous),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        _ => None,
    }
}

/// Map a key press to an action, or `None` when the key does nothing here.
pub fn action_for(context: InputContext, key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match context {
        InputContext::Prompt => match key.code {
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(ch) => Some(Action::Input(ch)),
            _ => None,
        },
        InputContext::Menu => match key.code {
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            code => movement(code).or(match code {
                KeyCode::Char(ch) => Some(Action::Shortcut(ch)),
                _ => None,
            }),
        },
        InputContext::Table => match key.code {
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Home),
            KeyCode::Char('r') => Some(Action::Reset),
            code => movement(code),
        },
        InputContext::Message => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Home),
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        },
    }
}

/// Footer text listing the keys that work in a context.
pub fn key_hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Menu => "j/k move  Enter select  shortcut keys jump  Esc back  Ctrl-C quit",
        InputContext::Table => {
            "j/k move  PgUp/PgDn page  Enter open  q home  r new search  Esc back"
        }
        InputContext::Prompt => "type a query  Enter search  Esc back  Ctrl-C quit",
        InputContext::Message => "Enter/Esc back  q home  r new search  Ctrl-C quit",
    }
}
