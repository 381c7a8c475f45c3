use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::core::data::Library;
use crate::error::Result;

pub struct SimpleServices {
    config: Arc<Config>,
}

impl SimpleServices {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Validate the configured path and open the library read-only.
    pub fn open_library(&self) -> Result<Library> {
        self.config.validate_database()?;
        let library = Library::open(
            &self.config.database_path,
            self.config.case_sensitive_search,
        )?;
        info!("Library ready: {}", self.config.database_path.display());
        Ok(library)
    }
}
