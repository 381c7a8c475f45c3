use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::env::EnvParser;
use crate::config::Config as AppConfig;
use crate::error::{PlaylistSearchError, Result};
use crate::services::SimpleServices;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn execute(
    args: ConfigArgs,
    services: &SimpleServices,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = services.config();
    let path = AppConfig::config_path(config_path)?;

    match args.command {
        ConfigCommands::Show => {
            println!("# {}", path.display());
            print!("{}", render_config(&config)?);

            let overrides = EnvParser::get_all_plsearch_vars();
            if !overrides.is_empty() {
                println!();
                println!("# Environment overrides");
                for (key, value) in overrides {
                    println!("# {}={}", key, value);
                }
            }
        }

        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::Init { force } => {
            let written = init_config(&config, &path, force)?;
            info!("Wrote configuration to {}", written.display());
            println!("Configuration written to {}", written.display());
        }
    }

    Ok(())
}

fn render_config(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

fn init_config(config: &AppConfig, path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(PlaylistSearchError::Validation(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }
    config.save(path)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::themes::ThemeVariant;

    #[test]
    fn test_render_config_is_toml() {
        let config = AppConfig {
            theme: ThemeVariant::HighContrast,
            ..AppConfig::default()
        };
        let rendered = render_config(&config).unwrap();
        assert!(rendered.contains("theme = \"high-contrast\""));
        assert!(rendered.contains("min_query_length = 0"));
        assert!(!rendered.contains("log_file"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig::default();

        init_config(&config, &path, false).unwrap();
        assert!(path.exists());

        assert!(matches!(
            init_config(&config, &path, false),
            Err(PlaylistSearchError::Validation(_))
        ));
        assert!(init_config(&config, &path, true).is_ok());

        let reloaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }
}
