use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::discover::DEFAULT_INCLUDE;
use crate::error::{ContextError, Result};

/// Settings read from `config.toml`. Every field has a default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub sample: SampleConfig,

    #[serde(default)]
    pub discover: DiscoverConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Appended to the template path to name its context file.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default)]
    pub overwrite: bool,
}

fn default_suffix() -> String {
    ".json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SampleConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoverConfig {
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

impl ContextConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output.suffix.is_empty() {
            return Err(ContextError::ConfigInvalid {
                reason: "output.suffix must not be empty".into(),
            });
        }

        if self.discover.include.is_empty() {
            return Err(ContextError::ConfigInvalid {
                reason: "discover.include must list at least one pattern".into(),
            });
        }

        Ok(())
    }
}

/// Get the path to the user config file.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hbs-context").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the user config file is used if
/// present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<ContextConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ContextError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(ContextConfig::default()),
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| ContextError::Io {
        context: format!("reading config {}", path.display()),
        source: e,
    })?;

    let config: ContextConfig =
        toml::from_str(&content).map_err(|e| ContextError::ConfigParse {
            path: path.clone(),
            source: e,
        })?;

    config.validate()?;

    Ok(config)
}
