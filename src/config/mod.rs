use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{InquiryError, Result},
    storage::{invalid_key_message, is_valid_storage_key, DEFAULT_STORAGE_KEY},
    utils::paths::{ensure_dir, write_atomic, PathResolver},
};

const CONFIG_FILE: &str = "config.json";

/// User-adjustable settings for the CLI front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    /// Custom catalog file; defaults to `<base>/catalog.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: Self::default_storage_key(),
            catalog_path: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
            quiet_mode: false,
        }
    }
}

impl Config {
    pub fn default_storage_key() -> String {
        DEFAULT_STORAGE_KEY.into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_catalog_path(&self, base: &Path) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| PathResolver::catalog_file_in(base))
    }

    /// Applies a `config set <key> <value>` request.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match ConfigKey::from_str(key)? {
            ConfigKey::StorageKey => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(InquiryError::Config("storage key cannot be empty".into()));
                }
                if !is_valid_storage_key(trimmed) {
                    return Err(InquiryError::Config(invalid_key_message(trimmed)));
                }
                self.storage_key = trimmed.to_string();
            }
            ConfigKey::CatalogPath => {
                let trimmed = value.trim();
                self.catalog_path = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("default")
                {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            ConfigKey::Color => self.ui_color_enabled = parse_flag(value)?,
            ConfigKey::Quiet => self.quiet_mode = parse_flag(value)?,
        }
        Ok(())
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("storage-key: {}", self.storage_key),
            format!(
                "catalog: {}",
                self.catalog_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "default".into())
            ),
            format!("color: {}", on_off(self.ui_color_enabled)),
            format!("quiet: {}", on_off(self.quiet_mode)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    StorageKey,
    CatalogPath,
    Color,
    Quiet,
}

impl FromStr for ConfigKey {
    type Err = InquiryError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "storage-key" | "key" => Ok(ConfigKey::StorageKey),
            "catalog" | "catalog-path" => Ok(ConfigKey::CatalogPath),
            "color" | "colour" => Ok(ConfigKey::Color),
            "quiet" => Ok(ConfigKey::Quiet),
            other => Err(InquiryError::Config(format!(
                "unknown setting `{other}` (expected storage-key, catalog, color, quiet)"
            ))),
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        other => Err(InquiryError::Config(format!(
            "expected on/off, got `{other}`"
        ))),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Loads and saves [`Config`] as JSON under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = PathResolver::config_dir_in(&base);
        ensure_dir(&config_dir)?;
        Ok(Self {
            path: config_dir.join(CONFIG_FILE),
        })
    }

    /// Missing file yields defaults; a malformed file is a configuration error.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data).map_err(|err| {
            InquiryError::Config(format!("{}: {}", self.path.display(), err))
        })?;
        if !is_valid_storage_key(&config.storage_key) {
            return Err(InquiryError::Config(format!(
                "{}: {}",
                self.path.display(),
                invalid_key_message(&config.storage_key)
            )));
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
