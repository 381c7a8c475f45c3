//! Interactive terminal browser
//!
//! - `app`: event loop tying key input, navigation and drawing together
//! - `navigation`: the screen stack and what each selection opens
//! - `input`: key bindings per screen kind
//! - `layout`, `renderer`, `themes`: presentation

pub mod app;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod renderer;
pub mod themes;

#[cfg(test)]
pub mod integration_tests;

pub use app::BrowserApp;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::warn;

pub type BrowserTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal for TUI mode
pub fn init_terminal() -> io::Result<BrowserTerminal> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Owns the terminal while the browser runs and restores it on drop, so
/// errors and panics unwinding through the loop leave a usable shell.
pub struct TerminalGuard {
    terminal: BrowserTerminal,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        match init_terminal() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = restore_terminal();
                Err(err)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut BrowserTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!("Failed to restore terminal: {}", err);
        }
        let _ = self.terminal.show_cursor();
    }
}
