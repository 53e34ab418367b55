//! Renderer configuration.
//!
//! Parsed from TOML with serde. Every field has a default, so an empty file
//! (or no file at all) gives [`RenderConfig::default`].
//!
//! ```toml
//! [markers]
//! mode = "placeholder"   # or "generated" (default)
//! toc_depth = 2          # optional, limits table-of-contents nesting
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// How `Toc` and `IdentifierDefinition` markers are rendered.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMode {
    /// Build a table of contents and anchor identifier definitions.
    #[default]
    Generated,
    /// Emit the literal [`PLACEHOLDER`](crate::PLACEHOLDER) text.
    Placeholder,
}

/// Marker rendering configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkerConfig {
    pub mode: MarkerMode,
    /// Deepest chapter level listed in a generated table of contents,
    /// counted from top-level chapters (1 = top-level only).
    pub toc_depth: Option<usize>,
}

/// Renderer configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub markers: MarkerConfig,
}

/// Error loading a [`RenderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The render configuration path does not exist.
    #[error("Render configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read.
    #[error("Failed to read render configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML or does not match the `[markers]` schema.
    #[error("Invalid render configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range, e.g. `markers.toc_depth = 0`.
    #[error("Invalid render configuration: {0}")]
    Validation(String),
}

impl RenderConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `path` does not exist, and parse or
    /// validation errors otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), mode = ?config.markers.mode, "Loaded render config");
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markers.toc_depth == Some(0) {
            return Err(ConfigError::Validation(
                "markers.toc_depth must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
