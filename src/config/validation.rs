use std::path::Path;

use crate::error::{ConfigError, Result};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    fn invalid(field_name: &str, value: String) -> ConfigError {
        ConfigError::InvalidValue {
            field: field_name.to_string(),
            value,
        }
    }

    /// The library database must be an existing regular file
    pub fn validate_database_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        if !path.is_file() {
            return Err(Self::invalid(
                "database_path",
                format!("{} is not a regular file", path.display()),
            )
            .into());
        }

        Ok(())
    }

    /// A log file may not exist yet, but its directory must
    pub fn validate_log_file(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(Self::invalid(
                "log_file",
                format!("{} is a directory", path.display()),
            )
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(Self::invalid(
                    "log_file",
                    format!("directory {} does not exist", parent.display()),
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(Self::invalid(
                field_name,
                format!("{} (must be between {} and {})", value, min, max),
            )
            .into());
        }
        Ok(())
    }
}
