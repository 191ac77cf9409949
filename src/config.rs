use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub awards: AwardsConfig,
    pub display: DisplayConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Dollar amounts shown for each award tier.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AwardsConfig {
    pub top_amount: u32,
    pub reduced_amount: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub icons: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "scholarship.db".to_string(),
            },
            awards: AwardsConfig::default(),
            display: DisplayConfig { icons: true },
            export: ExportConfig {
                directory: ".".to_string(),
            },
        }
    }
}

impl Default for AwardsConfig {
    fn default() -> Self {
        Self {
            top_amount: 2500,
            reduced_amount: 1500,
        }
    }
}

impl Config {
    /// Load configuration from built-in defaults, an optional file and
    /// environment variables, in increasing priority. Environment keys use
    /// `__` both after the prefix and between sections, e.g.
    /// `SCHOLARSHIP__AWARDS__TOP_AMOUNT`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();

        let config = config::Config::builder()
            .set_default("database.path", defaults.database.path)?
            .set_default("awards.top_amount", defaults.awards.top_amount as i64)?
            .set_default("awards.reduced_amount", defaults.awards.reduced_amount as i64)?
            .set_default("display.icons", defaults.display.icons)?
            .set_default("export.directory", defaults.export.directory)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SCHOLARSHIP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        if self.awards.reduced_amount > self.awards.top_amount {
            anyhow::bail!(
                "awards.reduced_amount ({}) exceeds awards.top_amount ({})",
                self.awards.reduced_amount,
                self.awards.top_amount
            );
        }
        Ok(())
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this configuration to `<path>.toml` unless a file is already there.
    /// Returns the written path, or `None` when one existed.
    pub fn write_default_file(&self, path: &str) -> anyhow::Result<Option<PathBuf>> {
        let target = if Path::new(path).extension().is_some() {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.toml", path))
        };

        if target.exists() {
            return Ok(None);
        }

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&target, self.to_toml()?)?;
        Ok(Some(target))
    }

    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.export.directory)
    }
}
