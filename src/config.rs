// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::event::DEFAULT_END_TRIM_MINUTES;
use crate::model::{AddressTable, EventBuilder, LocationResolver};
use crate::storage::ExportStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_city_region() -> String {
    "Vancouver, BC".to_string()
}
fn default_country() -> String {
    "Canada".to_string()
}
fn default_online_label() -> String {
    "🌐 Online".to_string()
}
fn default_end_trim_minutes() -> i64 {
    DEFAULT_END_TRIM_MINUTES
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_city_region")]
    pub city_region: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_online_label")]
    pub online_label: String,

    #[serde(default = "default_end_trim_minutes")]
    pub end_trim_minutes: i64,

    /// CSV of `name, code, address`. Without it every room is "Unknown Address".
    #[serde(default)]
    pub address_table: Option<PathBuf>,
    /// Where `.ics` files go. Defaults to the input's directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            city_region: default_city_region(),
            country: default_country(),
            online_label: default_online_label(),
            end_trim_minutes: DEFAULT_END_TRIM_MINUTES,
            address_table: None,
            output_dir: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        ExportStorage::atomic_write(&path, toml_str)?;
        Ok(())
    }

    pub fn resolver<'a>(&self, table: &'a AddressTable) -> LocationResolver<'a> {
        LocationResolver::new(table, &self.city_region, &self.country, &self.online_label)
    }

    pub fn event_builder<'a>(&self, table: &'a AddressTable) -> EventBuilder<'a> {
        EventBuilder::new(self.resolver(table)).with_end_trim(self.end_trim_minutes)
    }
}
