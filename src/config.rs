/*
 * SPDX-FileCopyrightText: 2024 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR WL-1.0
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKey {
    AuthToken,
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                let valid = ConfigKey::iter()
                    .map(|key| key.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Invalid key: {}. Valid keys are: {}", s, valid)
            })
    }
}

pub type Config = HashMap<ConfigKey, Option<String>>;

/// The CLI's TOML settings file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `path` when given, otherwise `<config dir>/salon/config.toml`.
    pub fn locate(path: Option<PathBuf>) -> Result<Self, String> {
        if let Some(path) = path {
            return Ok(Self::new(path));
        }

        let mut config_dir =
            dirs::config_dir().ok_or("Could not find configuration directory".to_string())?;
        config_dir.push("salon");
        config_dir.push("config.toml");

        Ok(Self::new(config_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, String> {
        if !self.path.exists() {
            return Ok(ConfigKey::iter().map(|key| (key, None)).collect());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read configuration file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse configuration file: {}", e))
    }

    pub fn save(&self, config: &Config) -> Result<(), String> {
        if let Some(config_dir) = self.path.parent() {
            fs::create_dir_all(config_dir)
                .map_err(|e| format!("Failed to create configuration directory: {}", e))?;
        }

        let contents = toml::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize configuration: {}", e))?;
        let mut file = fs::File::create(&self.path)
            .map_err(|e| format!("Failed to create configuration file: {}", e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| format!("Failed to write configuration file: {}", e))
    }

    pub fn get(&self, key: ConfigKey) -> Result<Option<String>, String> {
        Ok(self
            .load()?
            .remove(&key)
            .flatten()
            .filter(|value| !value.is_empty()))
    }

    pub fn set(&self, key: ConfigKey, value: Option<String>) -> Result<(), String> {
        let mut config = self.load()?;
        config.insert(key, value);
        self.save(&config)
    }

    pub fn server_url(&self) -> Result<String, String> {
        Ok(self
            .get(ConfigKey::Server)?
            .unwrap_or_else(|| DEFAULT_SERVER.to_string()))
    }
}

/// Backs `salon config <key> [value]`: sets the key when a value is given,
/// otherwise prints it.
pub fn set_get_value(
    file: &ConfigFile,
    key: &str,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    let config_key: ConfigKey = key.parse()?;

    if let Some(value) = value {
        file.set(config_key, Some(value.clone()))?;

        if !quiet {
            println!("{} set to \"{}\"", config_key, value);
        }

        return Ok(Some(value));
    }

    let value = file.get(config_key)?;

    if !quiet {
        match &value {
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        }
    }

    Ok(value)
}
