use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const DATABASE_PATH: &'static str = "PLSEARCH_DATABASE_PATH";
    pub const THEME: &'static str = "PLSEARCH_THEME";
    pub const MIN_QUERY_LENGTH: &'static str = "PLSEARCH_MIN_QUERY_LENGTH";
    pub const CASE_SENSITIVE_SEARCH: &'static str = "PLSEARCH_CASE_SENSITIVE_SEARCH";
    pub const LOG_FILE: &'static str = "PLSEARCH_LOG_FILE";

    /// Key read from the `app.env` dotenv file.
    pub const DOTENV_DB_FILEPATH: &'static str = "DB_FILEPATH";

    pub const PREFIX: &'static str = "PLSEARCH_";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    fn invalid(var_name: &str, value: &str) -> ConfigError {
        ConfigError::InvalidValue {
            field: var_name.to_string(),
            value: value.to_string(),
        }
    }

    /// Parse environment variable as a trimmed, non-empty string
    pub fn parse_string(var_name: &str) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err @ env::VarError::NotUnicode(_)) => Err(ConfigError::Environment(err).into()),
        }
    }

    pub fn parse_path(var_name: &str) -> Result<Option<PathBuf>> {
        Ok(Self::parse_string(var_name)?.map(PathBuf::from))
    }

    /// Parse environment variable as boolean
    pub fn parse_bool(var_name: &str) -> Result<Option<bool>> {
        if let Some(value_str) = Self::parse_string(var_name)? {
            match value_str.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Self::invalid(var_name, &value_str).into()),
            }
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable as usize with range validation
    pub fn parse_usize(var_name: &str, min: usize, max: usize) -> Result<Option<usize>> {
        if let Some(value_str) = Self::parse_string(var_name)? {
            let value = value_str
                .parse::<usize>()
                .map_err(|_| Self::invalid(var_name, &value_str))?;

            if value < min || value > max {
                return Err(Self::invalid(var_name, &value_str).into());
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable with the type's `FromStr`
    pub fn parse_with<T: std::str::FromStr>(var_name: &str) -> Result<Option<T>> {
        match Self::parse_string(var_name)? {
            Some(value_str) => value_str
                .parse::<T>()
                .map(Some)
                .map_err(|_| Self::invalid(var_name, &value_str).into()),
            None => Ok(None),
        }
    }

    /// All PLSEARCH_ variables currently set, sorted by name
    pub fn get_all_plsearch_vars() -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| key.starts_with(EnvVars::PREFIX))
            .collect();
        vars.sort();
        vars
    }
}
