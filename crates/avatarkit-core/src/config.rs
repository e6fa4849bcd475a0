//! Avatar configuration
//!
//! Loaded from a JSON file; every field has a default so an empty object
//! (or no file at all) is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, AvatarResult};

pub const DEFAULT_GRAVATAR_BASE_URL: &str = "https://gravatar.com";

/// Theme tokens the avatar container reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarTheme {
    /// Dashed border colour for suggested avatars
    pub border_neutral_vibrant: String,
    /// Tinted background for suggested avatars
    pub background_primary: String,
}

impl Default for AvatarTheme {
    fn default() -> Self {
        Self {
            border_neutral_vibrant: "#80708f".to_string(),
            background_primary: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarConfig {
    pub gravatar_base_url: String,
    /// Gravatar `d=` parameter used when no image is registered
    pub gravatar_default: String,
    /// Swap a failed upload image for a letter avatar
    pub fallback_to_letter: bool,
    pub theme: AvatarTheme,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            gravatar_base_url: DEFAULT_GRAVATAR_BASE_URL.to_string(),
            gravatar_default: "blank".to_string(),
            fallback_to_letter: true,
            theme: AvatarTheme::default(),
        }
    }
}

impl AvatarConfig {
    /// Parse and validate a configuration from JSON text
    pub fn from_json(json: &str) -> AvatarResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded avatar config from {:?}", path);
        Self::from_json(&json)
    }

    /// Check field ranges and normalize the base URL
    pub fn validated(mut self) -> AvatarResult<Self> {
        let trimmed = self.gravatar_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AvatarError::InvalidConfig(
                "gravatarBaseUrl must not be empty".to_string(),
            ));
        }
        if trimmed.len() != self.gravatar_base_url.len() {
            tracing::warn!(
                "Trimming gravatarBaseUrl {:?} to {:?}",
                self.gravatar_base_url,
                trimmed
            );
            self.gravatar_base_url = trimmed.to_string();
        }

        if self.gravatar_default.trim().is_empty() {
            return Err(AvatarError::InvalidConfig(
                "gravatarDefault must not be empty".to_string(),
            ));
        }

        Ok(self)
    }
}
