use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, PlaylistSearchError, Result};
use crate::ui::terminal::themes::ThemeVariant;

pub mod env;
pub mod validation;

use env::{EnvParser, EnvVars};
use validation::ConfigValidator;

/// Dotenv file read from the working directory.
pub const DOTENV_FILE: &str = "app.env";

pub const MAX_MIN_QUERY_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Music library SQLite file
    pub database_path: PathBuf,

    /// Color scheme of the browser
    pub theme: ThemeVariant,

    /// Shortest query the search prompt accepts
    pub min_query_length: usize,

    /// Match names case-sensitively
    pub case_sensitive_search: bool,

    /// Where the browser writes its logs (logging is off in the browser otherwise)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "playlist-search", "plsearch")
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = match project_dirs() {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => {
                warn!("ProjectDirs unavailable; falling back to current directory for data path");
                PathBuf::from(".")
            }
        };

        Self {
            database_path: data_dir.join("library.db"),
            theme: ThemeVariant::Dark,
            min_query_length: 0,
            case_sensitive_search: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Build the effective configuration.
    ///
    /// Later sources win: defaults, the TOML file, `app.env`, `PLSEARCH_*`
    /// variables, then `database_override` from the command line.
    pub fn load(config_path: Option<&Path>, database_override: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_dotenv(Path::new(DOTENV_FILE))?;
        config.load_from_env()?;

        if let Some(path) = database_override {
            config.database_path = path.to_path_buf();
        }

        config.validate_settings()?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config file {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply the `DB_FILEPATH` key of a dotenv file, if the file exists.
    pub fn apply_dotenv(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Ok(());
        }

        let dotenv_error = |err: dotenvy::Error| ConfigError::InvalidValue {
            field: path.display().to_string(),
            value: err.to_string(),
        };

        for item in dotenvy::from_path_iter(path).map_err(dotenv_error)? {
            let (key, value) = item.map_err(dotenv_error)?;
            if key == EnvVars::DOTENV_DB_FILEPATH && !value.trim().is_empty() {
                debug!("Database path taken from {}", path.display());
                self.database_path = PathBuf::from(value.trim());
            }
        }

        Ok(())
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) -> Result<()> {
        if let Some(path) = EnvParser::parse_path(EnvVars::DATABASE_PATH)? {
            self.database_path = path;
        }

        if let Some(theme) = EnvParser::parse_with::<ThemeVariant>(EnvVars::THEME)? {
            self.theme = theme;
        }

        if let Some(length) =
            EnvParser::parse_usize(EnvVars::MIN_QUERY_LENGTH, 0, MAX_MIN_QUERY_LENGTH)?
        {
            self.min_query_length = length;
        }

        if let Some(case_sensitive) = EnvParser::parse_bool(EnvVars::CASE_SENSITIVE_SEARCH)? {
            self.case_sensitive_search = case_sensitive;
        }

        if let Some(log_file) = EnvParser::parse_path(EnvVars::LOG_FILE)? {
            self.log_file = Some(log_file);
        }

        Ok(())
    }

    /// Checks that do not need the library file to exist.
    pub fn validate_settings(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database_path".to_string(),
            }
            .into());
        }

        ConfigValidator::validate_range(
            self.min_query_length,
            0,
            MAX_MIN_QUERY_LENGTH,
            "min_query_length",
        )?;

        if let Some(ref log_file) = self.log_file {
            ConfigValidator::validate_log_file(log_file)?;
        }

        Ok(())
    }

    /// Required before anything opens the library.
    pub fn validate_database(&self) -> Result<()> {
        ConfigValidator::validate_database_file(&self.database_path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = project_dirs().ok_or_else(|| {
            PlaylistSearchError::Internal(anyhow::anyhow!(
                "Failed to determine project directories"
            ))
        })?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_config_path(),
        }
    }
}
