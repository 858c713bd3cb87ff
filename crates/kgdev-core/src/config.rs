//! Loader configuration.
//!
//! Only the content collection is configurable; site metadata lives in
//! [`crate::site`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for kgdev.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project collection settings.
    #[serde(default)]
    pub collection: CollectionConfig,
}

/// Where project content lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Directory holding one content file per project.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// File extensions treated as project content.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("src/content/projects")
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            extensions: default_extensions(),
        }
    }
}

impl CollectionConfig {
    /// Whether `path` has one of the configured content extensions.
    pub fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `KGDEV__` environment overrides.
    ///
    /// The file is optional; e.g. `KGDEV__COLLECTION__CONTENT_DIR=content`
    /// works without one.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("KGDEV").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.collection.content_dir.as_os_str().is_empty() {
            return Err(CoreError::config("collection.content_dir cannot be empty"));
        }

        if self.collection.extensions.is_empty() {
            return Err(CoreError::config("collection.extensions cannot be empty"));
        }

        if self
            .collection
            .extensions
            .iter()
            .any(|ext| ext.starts_with('.'))
        {
            tracing::warn!("collection.extensions should not include a leading dot");
        }

        Ok(())
    }
}
