//! Site configuration value.
//!
//! # Responsibility
//! - Model the hand-authored site metadata and header menu structure.
//! - Load the configuration once at startup for explicit hand-off to
//!   renderers.
//!
//! # Invariants
//! - The configuration is immutable after load; no process-wide state.
//! - `path_prefix` always ends with `/` so link joining stays well-formed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The configuration violates an authoring invariant.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read site config `{path}`: {source}")
            }
            Self::Parse(err) => write!(f, "invalid site config: {err}"),
            Self::Invalid(message) => write!(f, "invalid site config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Menu entry kinds understood by the outer site shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    /// Internal page path.
    Page,
    /// External URL.
    Link,
    /// Tag listing page.
    Tag,
}

/// One entry of the header menu tree.
///
/// Menu rendering belongs to the outer site shell; the core only carries the
/// authored structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Serialized as `type` to match the authored config naming.
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    /// Page path, external URL or tag name depending on `kind`.
    pub item: String,
    /// Display label; the shell falls back to `item` when absent.
    pub title: Option<String>,
    /// Nested sub-menu.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

/// Immutable site-wide configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title shown as the home page heading.
    pub title: String,
    /// Site description shown as the home page lead.
    pub description: String,
    /// Canonical site URL.
    #[serde(default)]
    pub url: String,
    /// Site author.
    #[serde(default)]
    pub author: String,
    /// Mount point of the garden when not published at the site root.
    /// Must end with `/`.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Authored header menu structure.
    #[serde(default)]
    pub header_menu: Vec<MenuItem>,
}

fn default_path_prefix() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Parses and validates a configuration from its JSON source.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks authoring invariants of the configuration.
    ///
    /// # Errors
    /// - Empty site title.
    /// - `path_prefix` not ending with `/`.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("site title cannot be empty".to_string()));
        }
        if !self.path_prefix.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "pathPrefix must end with `/`, got `{}`",
                self.path_prefix
            )));
        }
        Ok(())
    }
}

/// Loads and validates the site configuration from a JSON file.
pub fn load_site_config(path: &Path) -> ConfigResult<SiteConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    SiteConfig::from_json_str(&raw)
}
