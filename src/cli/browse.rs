use clap::Args;
use tracing::{error, info};

use crate::error::{PlaylistSearchError, Result};
use crate::services::SimpleServices;
use crate::signal_handler::SignalHandler;
use crate::ui::terminal::{BrowserApp, TerminalGuard};
use crate::ui::UiMode;

#[derive(Args, Default)]
pub struct BrowseArgs {}

/// Run the interactive browser until the user quits or SIGTERM arrives.
pub async fn execute(_args: BrowseArgs, services: &SimpleServices) -> Result<()> {
    if !UiMode::detect().is_interactive() {
        return Err(PlaylistSearchError::Validation(
            "The browser needs an interactive terminal; \
             use `search`, `lookup` or `duplicates` instead"
                .to_string(),
        ));
    }

    let config = services.config();
    let library = services.open_library()?;
    info!("Browsing {}", config.database_path.display());

    let signals = SignalHandler::new();
    let monitor = signals.start_signal_monitoring();

    let result = {
        let mut guard = TerminalGuard::new()?;
        let mut app = BrowserApp::new(&library, &config, signals.clone());
        app.run(guard.terminal_mut()).await
    };

    signals.request_shutdown();
    if let Err(err) = monitor.await {
        error!("Signal monitor ended abnormally: {}", err);
    }

    if let Err(ref err) = result {
        error!("Browser stopped: {}", err);
    }
    result
}
