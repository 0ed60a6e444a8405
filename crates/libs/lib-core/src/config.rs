//! # Application Configuration
//!
//! Tunables for the forms and the toast host. The web app reads them from an
//! optional JSON block embedded in `index.html`; every key is optional and
//! falls back to the defaults below.
//!
//! ```json
//! { "rules": { "password_min_chars": 10 }, "toast_duration_ms": 6000 }
//! ```
//!
//! ## Global Config Access
//!
//! Call [`init_config()`] once at startup, then use [`core_config()`]
//! anywhere. Reading before initialization yields the defaults.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Minimum lengths enforced by the field validators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    /// Minimum character count of the trimmed name.
    pub name_min_chars: usize,

    /// Minimum character count of a password, on both forms.
    pub password_min_chars: usize,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            password_min_chars: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: FieldRules,

    /// How long a toast stays on screen before it dismisses itself.
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: FieldRules::default(),
            toast_duration_ms: 4_000,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration block.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.rules.name_min_chars == 0 {
            return Err(AppError::Config("rules.name_min_chars must be at least 1".to_string()));
        }

        if self.rules.password_min_chars == 0 {
            return Err(AppError::Config(
                "rules.password_min_chars must be at least 1".to_string(),
            ));
        }

        if !(500..=60_000).contains(&self.toast_duration_ms) {
            return Err(AppError::Config(
                "toast_duration_ms must be between 500 and 60000".to_string(),
            ));
        }

        Ok(())
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if the config fails validation or has already been set.
pub fn init_config(config: AppConfig) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
pub fn core_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
