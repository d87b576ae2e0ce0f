//! Configuration file loading and saving

use anyhow::{Context, Result};
use std::path::Path;

use super::file::{ConfigFile, CONFIG_FILE_NAME};

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .decomp-progress.toml in the given directory
    ///
    /// Returns the default configuration when no file exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use decomp_progress::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Feed endpoint: {}", config.progress_csv_url);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(dir: &Path) -> Result<ConfigFile> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        // Read atomically - no TOCTOU race window
        let contents = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .decomp-progress.toml");
            }
        };

        let config: ConfigFile = toml_edit::de::from_str(&contents)
            .context("Failed to parse .decomp-progress.toml")?;

        config
            .validate()
            .context("Invalid .decomp-progress.toml configuration")?;

        Ok(config)
    }

    /// Save config to .decomp-progress.toml in the given directory
    pub fn save(config: &ConfigFile, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write .decomp-progress.toml")?;

        Ok(())
    }

    /// Check whether a config file exists in the given directory
    pub fn exists(dir: &Path) -> bool {
        dir.join(CONFIG_FILE_NAME).exists()
    }
}
