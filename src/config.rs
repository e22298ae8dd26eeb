//! Project configuration files
//!
//! A configuration file bundles a [`BuildDescriptor`] with the project name,
//! output directory and optional container settings. TOML, YAML and JSON
//! are accepted; the format is picked from the file extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::application::DockerOptions;
use crate::error::{Error, Result};
use crate::generation::BuildDescriptor;

/// Serialisation format of a configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::config(format!("{} has no file extension", path.display())))?;
        extension.parse()
    }

    /// Serialise `value` in this format
    pub fn to_string_pretty<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self {
            ConfigFormat::Toml => toml::to_string_pretty(value)?,
            ConfigFormat::Yaml => serde_yaml::to_string(value)?,
            ConfigFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(Error::config(format!("unsupported config format '{other}'"))),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "toml"),
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Json => write!(f, "json"),
        }
    }
}

/// Contents of a project configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub build: BuildDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerOptions>,
}

impl ProjectConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), format = %format, "Loading project configuration");
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        })
    }
}
