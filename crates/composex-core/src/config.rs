//! Theme configuration
//!
//! A [`ThemeConfig`] selects the ambient brightness and the status palette.
//! It is plain data loaded from JSON; every field has a default, so `{}` is a
//! valid configuration.

use crate::style::StyleResolver;
use crate::theme::ThemePalette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or has a malformed value
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is not acceptable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How the ambient brightness is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the host's preference
    #[default]
    System,
}

impl ThemeMode {
    /// All modes
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Brightness selection
    pub mode: ThemeMode,
    /// Host preference used in [`ThemeMode::System`]; unknown means dark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prefers_light: Option<bool>,
    /// Status palette
    pub palette: ThemePalette,
}

impl ThemeConfig {
    /// Configuration with a fixed mode and the built-in palette
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading theme config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject palettes with fully transparent colors
    pub fn validate(&self) -> Result<()> {
        if self.mode != ThemeMode::System && self.system_prefers_light.is_some() {
            tracing::warn!(
                "systemPrefersLight is ignored in {} mode",
                self.mode
            );
        }

        for hue in crate::theme::Hue::ALL {
            let colors = self.palette.hue(hue);
            if colors.light.a <= 0.0 || colors.dark.a <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} color must not be fully transparent",
                    hue.name()
                )));
            }
        }
        Ok(())
    }

    /// Whether the ambient brightness is light
    pub fn is_light_theme(&self) -> bool {
        match self.mode {
            ThemeMode::Light => true,
            ThemeMode::Dark => false,
            ThemeMode::System => self.system_prefers_light.unwrap_or(false),
        }
    }

    /// Build a resolver for this configuration
    pub fn resolver(&self) -> StyleResolver {
        StyleResolver::new(self.palette, self.is_light_theme())
    }
}
