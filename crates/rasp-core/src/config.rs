//! # Normalizer Configuration
//!
//! Tunables that differ between deployments: the area code assumed for
//! bare mobile numbers, the particles kept lower-case in names, the e-mail
//! domains offered during sign-up, and the password policy. Defaults match
//! the production client.
//!
//! Loaded from YAML, then overridden by environment variables:
//!
//! - `RASP_DEFAULT_AREA_CODE` (default: `11`)
//! - `RASP_EMAIL_DOMAINS` comma separated (default: the six common providers)
//! - `RASP_PASSWORD_MIN_LENGTH` (default: `8`)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::email::DEFAULT_EMAIL_DOMAINS;
use crate::error::ConfigError;
use crate::name::DEFAULT_STOP_WORDS;
use crate::password::PasswordPolicy;

/// Environment variable overriding [`NormalizerConfig::default_area_code`].
pub const ENV_DEFAULT_AREA_CODE: &str = "RASP_DEFAULT_AREA_CODE";
/// Environment variable overriding [`NormalizerConfig::email_domains`].
pub const ENV_EMAIL_DOMAINS: &str = "RASP_EMAIL_DOMAINS";
/// Environment variable overriding the password minimum length.
pub const ENV_PASSWORD_MIN_LENGTH: &str = "RASP_PASSWORD_MIN_LENGTH";

/// Deployment-specific normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Area code prefixed to 9-digit mobile numbers.
    pub default_area_code: String,
    /// Words kept lower-case after the first word of a name.
    pub stop_words: Vec<String>,
    /// Domains offered by e-mail completion.
    pub email_domains: Vec<String>,
    /// Sign-up password requirements.
    pub password: PasswordPolicy,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_area_code: "11".to_string(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            email_domains: DEFAULT_EMAIL_DOMAINS.iter().map(|s| s.to_string()).collect(),
            password: PasswordPolicy::default(),
        }
    }
}

impl NormalizerConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys,
    /// or a validation error from [`NormalizerConfig::validate`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// as [`NormalizerConfig::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded normalizer config");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an override produces an invalid
    /// configuration.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable numeric overrides are ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the result is invalid.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_DEFAULT_AREA_CODE) {
            self.default_area_code = code.trim().to_string();
        }
        if let Some(domains) = lookup(ENV_EMAIL_DOMAINS) {
            self.email_domains = domains
                .split(',')
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect();
        }
        if let Some(raw) = lookup(ENV_PASSWORD_MIN_LENGTH) {
            match raw.trim().parse() {
                Ok(min) => self.password.min_length = min,
                Err(_) => tracing::warn!(
                    var = ENV_PASSWORD_MIN_LENGTH,
                    value = %raw,
                    "ignoring non-numeric override"
                ),
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidAreaCode`] unless the area code is two digits
    ///   between 11 and 99.
    /// - [`ConfigError::EmptyEntry`] for a blank stop word or domain.
    /// - [`ConfigError::InvalidPasswordLength`] for a zero minimum length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.default_area_code;
        let is_area_code = code.len() == 2
            && code.bytes().all(|b| b.is_ascii_digit())
            && !code.starts_with('0')
            && code != "10";
        if !is_area_code {
            return Err(ConfigError::InvalidAreaCode(code.clone()));
        }
        if let Some(index) = self.stop_words.iter().position(|w| w.trim().is_empty()) {
            return Err(ConfigError::EmptyEntry {
                list: "stop_words",
                index,
            });
        }
        if let Some(index) = self.email_domains.iter().position(|d| d.trim().is_empty()) {
            return Err(ConfigError::EmptyEntry {
                list: "email_domains",
                index,
            });
        }
        if self.password.min_length == 0 {
            return Err(ConfigError::InvalidPasswordLength);
        }
        Ok(())
    }
}
