//! Configuration management for Chit
//!
//! Handles loading and saving user configuration. Config file locations:
//!
//! | Platform | Location                                          |
//! |----------|---------------------------------------------------|
//! | Linux    | `~/.config/chit/config.toml`                      |
//! | macOS    | `~/Library/Application Support/com.chit.Chit/config.toml` |
//! | Windows  | `%APPDATA%\chit\Chit\config\config.toml`          |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::code::CodeStyle;
use crate::error::{Error, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Code generation defaults
    pub codes: CodesConfig,
    /// QR rendering settings
    pub qr: QrConfig,
}

/// Code generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodesConfig {
    /// Presentation style codes are generated and validated in
    pub style: StyleKind,
    /// Part count override; unset means the style's own default
    pub parts: Option<usize>,
}

impl Default for CodesConfig {
    fn default() -> Self {
        Self {
            style: StyleKind::Dashed,
            parts: None,
        }
    }
}

/// Presentation style selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Four-symbol groups joined with dashes
    #[default]
    Dashed,
    /// Four-symbol groups with no separator
    Compact,
}

/// QR rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// URL template for QR payloads; `{code}` is replaced with the
    /// canonical code. Unset encodes the bare code.
    pub url_template: Option<String>,
    /// Error correction level
    pub error_correction: ErrorCorrection,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            url_template: None,
            error_correction: ErrorCorrection::Medium,
        }
    }
}

/// QR error correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// Recovers from ~7% damage
    Low,
    /// Recovers from ~15% damage
    #[default]
    Medium,
    /// Recovers from ~25% damage
    Quartile,
    /// Recovers from ~30% damage
    High,
}

impl Config {
    /// Load configuration from the default path
    ///
    /// Returns the default configuration when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Get the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn config_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "chit", "Chit")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
    }

    /// Get the configuration file path
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Build the [`CodeStyle`] these settings describe
    #[must_use]
    pub fn code_style(&self) -> CodeStyle {
        let style = match self.codes.style {
            StyleKind::Dashed => CodeStyle::dashed(),
            StyleKind::Compact => CodeStyle::compact(),
        };
        match self.codes.parts {
            Some(parts) => style.with_default_parts(parts),
            None => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.codes.style, StyleKind::Dashed);
        assert_eq!(config.codes.parts, None);
        assert_eq!(config.qr.url_template, None);
        assert_eq!(config.qr.error_correction, ErrorCorrection::Medium);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.codes.style = StyleKind::Compact;
        config.codes.parts = Some(4);
        config.qr.url_template = Some("https://example.com/redeem/{code}".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.codes.style, StyleKind::Compact);
        assert_eq!(parsed.codes.parts, Some(4));
        assert_eq!(
            parsed.qr.url_template.as_deref(),
            Some("https://example.com/redeem/{code}")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[codes]\nstyle = \"compact\"\n").unwrap();
        assert_eq!(parsed.codes.style, StyleKind::Compact);
        assert_eq!(parsed.codes.parts, None);
        assert_eq!(parsed.qr.error_correction, ErrorCorrection::Medium);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[codes]\nstyle = \"fancy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_code_style_mapping() {
        let mut config = Config::default();
        assert_eq!(config.code_style(), CodeStyle::dashed());

        config.codes.style = StyleKind::Compact;
        assert_eq!(config.code_style(), CodeStyle::compact());

        config.codes.parts = Some(5);
        assert_eq!(config.code_style().default_parts(), 5);
        assert_eq!(config.code_style().separator(), None);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.codes.parts = Some(2);
        let content = toml::to_string_pretty(&config).unwrap();
        std::fs::write(&path, content).unwrap();

        let read = std::fs::read_to_string(&path).unwrap();
        let parsed: Config = toml::from_str(&read).unwrap();
        assert_eq!(parsed.codes.parts, Some(2));
    }
}
