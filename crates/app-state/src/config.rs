//! Application configuration
//!
//! Configuration is a single JSON document with one section per concern.
//! Every field has a default, so an empty object (or a missing section) is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid configuration
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field path
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_true() -> bool {
    true
}

/// How a manual theme toggle interacts with later OS appearance changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TogglePolicy {
    /// Every OS appearance change re-syncs the theme, even after a toggle
    #[default]
    FollowSystem,
    /// A manual toggle pins the theme until the user opts back in
    PinManual,
}

/// Theme section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Toggle vs. system appearance policy
    #[serde(default)]
    pub toggle_policy: TogglePolicy,
}

/// Contacts panel section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Fade in/out duration in milliseconds
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,

    /// Keep the dragged panel fully on screen
    #[serde(default)]
    pub clamp_to_screen: bool,
}

fn default_fade_ms() -> u64 {
    200
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            fade_ms: default_fade_ms(),
            clamp_to_screen: false,
        }
    }
}

/// Device viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Window width in points
    pub width: f32,
    /// Window height in points
    pub height: f32,
    /// Running on a TV form factor
    #[serde(default)]
    pub is_tv: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            is_tv: false,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Include module targets in log lines
    #[serde(default = "default_true")]
    pub with_target: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            with_target: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Contacts panel settings
    #[serde(default)]
    pub panel: PanelConfig,
    /// Device viewport
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let vp = &self.viewport;
        if !(vp.width.is_finite() && vp.width > 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewport.width",
                reason: format!("must be positive, got {}", vp.width),
            });
        }
        if !(vp.height.is_finite() && vp.height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewport.height",
                reason: format!("must be positive, got {}", vp.height),
            });
        }
        if self.panel.fade_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "panel.fadeMs",
                reason: "must be at least 1ms".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme.toggle_policy, TogglePolicy::FollowSystem);
        assert_eq!(config.panel.fade_ms, 200);
        assert!(!config.panel.clamp_to_screen);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_json(
            r#"{"theme": {"togglePolicy": "pin-manual"}, "panel": {"clampToScreen": true}}"#,
        )
        .unwrap();
        assert_eq!(config.theme.toggle_policy, TogglePolicy::PinManual);
        assert!(config.panel.clamp_to_screen);
        assert_eq!(config.panel.fade_ms, 200);
    }

    #[test]
    fn test_rejects_bad_viewport() {
        let err = AppConfig::from_json(r#"{"viewport": {"width": 0, "height": 800}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "viewport.width", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{not json").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"viewport": {{"width": 800, "height": 1280, "isTv": true}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).await.unwrap();
        assert_eq!(config.viewport.width, 800.0);
        assert!(config.viewport.is_tv);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = AppConfig::load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
