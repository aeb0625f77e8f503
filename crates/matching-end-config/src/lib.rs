use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pair used when neither the caller nor the config names one.
pub const FALLBACK_PAIR: &str = "mustache";

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

    #[error("No marker pair named '{name}' is configured")]
    UnknownPair { name: String },

    #[error("Marker pair '{name}' has an empty {which} marker")]
    InvalidPair { name: String, which: &'static str },
}

/// A named start/end marker pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl PairConfig {
    pub fn new(name: &str, start: &str, end: &str) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let which = if self.start.is_empty() {
            "start"
        } else if self.end.is_empty() {
            "end"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidPair {
            name: self.name.clone(),
            which,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pair used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pair: Option<String>,
    /// Base directory for relative input paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,
    #[serde(default = "builtin_pairs")]
    pub pairs: Vec<PairConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pair: None,
            input_dir: None,
            pairs: builtin_pairs(),
        }
    }
}

fn builtin_pairs() -> Vec<PairConfig> {
    vec![
        PairConfig::new("mustache", "{{", "}}"),
        PairConfig::new("cdata", "<![CDATA[", "]]>"),
        PairConfig::new("comment", "<!--", "-->"),
        PairConfig::new("parens", "(", ")"),
    ]
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded input directory
        config.input_dir = config
            .input_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        for pair in &config.pairs {
            pair.validate()?;
        }

        log::debug!(
            "Loaded {} marker pairs from {}",
            config.pairs.len(),
            config_path.display()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, or the built-in defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/matching-end");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn pair(&self, name: &str) -> Result<&PairConfig, ConfigError> {
        self.pairs
            .iter()
            .find(|pair| pair.name == name)
            .ok_or_else(|| ConfigError::UnknownPair {
                name: name.to_string(),
            })
    }

    /// Looks up `name`, else the configured default pair, else `mustache`.
    pub fn resolve_pair(&self, name: Option<&str>) -> Result<&PairConfig, ConfigError> {
        let name = name
            .or(self.default_pair.as_deref())
            .unwrap_or(FALLBACK_PAIR);
        self.pair(name)
    }

    /// Joins a relative `path` onto `input_dir` when one is configured.
    pub fn resolve_input(&self, path: &Path) -> PathBuf {
        match &self.input_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
