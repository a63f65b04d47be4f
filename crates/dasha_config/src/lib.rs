//! TOML configuration for the dasha tools.
//!
//! ```toml
//! [dasha]
//! upcoming_count = 3
//! max_level = 2
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every section and field is optional. The file is located by
//! [`resolve_path`]: an explicit path, else `$DASHA_CONFIG`, else
//! `~/.config/dasha/config.toml` when it exists.

use std::fs;
use std::path::{Path, PathBuf};

use dasha_base::dasha::{DEFAULT_UPCOMING_COUNT, MAX_DASHA_LEVEL, MAX_UPCOMING_COUNT};
use dasha_base::DashaOptions;
use serde::Deserialize;
use tracing::{debug, warn};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "DASHA_CONFIG";

/// Log levels accepted in `[log] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaSection {
    /// Mahadashas listed after the active one.
    pub upcoming_count: usize,
    /// Default depth for generated timelines.
    pub max_level: u8,
}

impl Default for DashaSection {
    fn default() -> Self {
        Self {
            upcoming_count: DEFAULT_UPCOMING_COUNT,
            max_level: MAX_DASHA_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    pub dasha: DashaSection,
    pub log: LogSection,
}

impl DashaConfig {
    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).inspect_err(|err| {
            warn!(path = %path.display(), %err, "rejected config file");
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from the resolved location, or defaults when there is none.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let home = dirs::home_dir();
        match resolve_path(explicit, env_path, home.as_deref()) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dasha.upcoming_count > MAX_UPCOMING_COUNT {
            return Err(ConfigError::Invalid("dasha.upcoming_count must be 0..=8"));
        }
        if self.dasha.max_level > MAX_DASHA_LEVEL {
            return Err(ConfigError::Invalid("dasha.max_level must be 0..=2"));
        }
        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(
                "log.level must be one of trace, debug, info, warn, error",
            ));
        }
        Ok(())
    }

    pub fn dasha_options(&self) -> DashaOptions {
        DashaOptions {
            upcoming_count: self.dasha.upcoming_count,
        }
    }
}

/// Pick the config file to read.
///
/// An explicit path is always used. `env_path` (the value of
/// `$DASHA_CONFIG`) is used when non-empty. The per-user file under `home`
/// is used only if it exists.
pub fn resolve_path(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    let user = user_config_path(home?);
    if user.is_file() {
        Some(user)
    } else {
        None
    }
}

/// Per-user config file under a home directory.
pub fn user_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("dasha").join("config.toml")
}
