use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Shared shutdown flag, raised by SIGTERM or by the browser itself.
#[derive(Clone, Default)]
pub struct SignalHandler {
    shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::Acquire)
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::Release);
        info!("Shutdown requested");
    }

    /// Watch for SIGTERM on the current runtime. The task ends after the
    /// first signal or once shutdown has been requested some other way.
    pub fn start_signal_monitoring(&self) -> tokio::task::JoinHandle<()> {
        let shutdown = Arc::clone(&self.shutdown_requested);

        tokio::spawn(async move {
            let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    warn!("Failed to create SIGTERM handler: {}", e);
                    return;
                }
            };

            loop {
                tokio::select! {
                    _ = sigterm.recv() => {
                        warn!("Received SIGTERM signal");
                        shutdown.store(true, Ordering::Release);
                        break;
                    }
                    _ = tokio::time::sleep(std::time::Duration::from_millis(100)) => {
                        if shutdown.load(Ordering::Acquire) {
                            break;
                        }
                    }
                }
            }
        })
    }
}
