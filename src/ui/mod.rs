pub mod terminal;

use tracing::debug;

/// Environment variable forcing the interactive mode, for testing.
pub const FORCE_TERMINAL_UI: &str = "PLSEARCH_FORCE_TERMINAL_UI";

/// Detect the UI mode based on environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Full-screen browser on a TTY
    Terminal,
    /// No TTY; only the non-interactive commands make sense
    Plain,
}

impl UiMode {
    pub fn detect() -> Self {
        if std::env::var(FORCE_TERMINAL_UI).is_ok() {
            debug!("UI Mode: Terminal (forced by {})", FORCE_TERMINAL_UI);
            return UiMode::Terminal;
        }

        let stdin_tty = atty::is(atty::Stream::Stdin);
        let stdout_tty = atty::is(atty::Stream::Stdout);
        debug!("UI Mode detection - stdin TTY: {}, stdout TTY: {}", stdin_tty, stdout_tty);

        if stdin_tty && stdout_tty {
            UiMode::Terminal
        } else {
            UiMode::Plain
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, UiMode::Terminal)
    }
}
