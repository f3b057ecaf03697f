//! Render profiles for mathdown.
//!
//! A profile is a named [`RenderOptions`] value. `full` and `digest` are
//! always available; a TOML file can add more or override them:
//!
//! ```toml
//! [profiles.chat]
//! allow_equations = true
//! allow_code_fences = false
//! ```

use mathdown_engine::RenderOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at a config file, overriding the default
/// location. Shell variables and `~` in its value are expanded.
pub const CONFIG_PATH_ENV: &str = "MATHDOWN_CONFIG";

pub const FULL_PROFILE: &str = "full";
pub const DIGEST_PROFILE: &str = "digest";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown render profile `{name}` (available: {})", .available.join(", "))]
    UnknownProfile {
        name: String,
        available: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, RenderOptions>,
}

/// Profiles that exist without any config file.
pub fn builtin_profile(name: &str) -> Option<RenderOptions> {
    match name {
        FULL_PROFILE => Some(RenderOptions::full()),
        DIGEST_PROFILE => Some(RenderOptions::digest()),
        _ => None,
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded {} render profile(s) from {}",
            config.profiles.len(),
            config_path.display()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$MATHDOWN_CONFIG` if set, else `~/.config/mathdown/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
    }

    fn config_path_from(override_path: Option<String>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/mathdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Looks up a profile, preferring this file's entry over the built-ins.
    pub fn profile(&self, name: &str) -> Result<RenderOptions, ConfigError> {
        self.profiles
            .get(name)
            .copied()
            .or_else(|| builtin_profile(name))
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_string(),
                available: self.profile_names(),
            })
    }

    /// Built-in and configured profile names, sorted, without duplicates.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = [FULL_PROFILE, DIGEST_PROFILE]
            .into_iter()
            .map(str::to_string)
            .chain(self.profiles.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Resolves `name` against the config file at the default location, falling
/// back to the built-ins when there is no file.
pub fn resolve_profile(name: &str) -> Result<RenderOptions, ConfigError> {
    Config::load()?.unwrap_or_default().profile(name)
}
