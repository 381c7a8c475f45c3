//! Main application coordinator for terminal UI
//!
//! Reads key events, hands them to the navigator and redraws. Queries run
//! synchronously inside the loop, so a slow query holds the screen until it
//! returns.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Duration;
use tracing::{debug, info};

use super::input::{action_for, InputContext};
use super::navigation::{Navigator, Transition};
use super::renderer::Renderer;
use super::themes::Theme;
use crate::config::Config;
use crate::error::Result;
use crate::services::LibraryService;
use crate::signal_handler::SignalHandler;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct BrowserApp<'a> {
    library: &'a dyn LibraryService,
    navigator: Navigator,
    renderer: Renderer,
    signals: SignalHandler,
    should_quit: bool,
}

impl<'a> BrowserApp<'a> {
    pub fn new(library: &'a dyn LibraryService, config: &Config, signals: SignalHandler) -> Self {
        Self {
            library,
            navigator: Navigator::new(config.min_query_length),
            renderer: Renderer::new(Theme::from_variant(config.theme)),
            signals,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit || self.signals.is_shutdown_requested()
    }

    /// Apply one key press. Only invariant violations come back as errors.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let context = InputContext::for_screen(self.navigator.current());
        let Some(action) = action_for(context, &key) else {
            return Ok(());
        };

        debug!("Key {:?} in {:?} -> {:?}", key.code, context, action);
        if self.navigator.apply(self.library, action)? == Transition::Quit {
            info!("Quit requested from the browser");
            self.should_quit = true;
        }
        debug!("Navigation depth {}", self.navigator.depth());
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.renderer.render(frame, &self.navigator);
    }

    /// Main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            // Let the SIGTERM watcher run on the single-threaded runtime.
            tokio::task::yield_now().await;
        }

        if self.signals.is_shutdown_requested() {
            info!("Browser stopped by signal");
        }
        Ok(())
    }
}
