//! Generation settings resolved from the environment and caller overrides
//!
//! Recognised environment variables:
//!   GOOGLE_API_KEY, GEMINI_API_KEY, PITCH_MODEL, PITCH_TEMPERATURE,
//!   PITCH_MAX_OUTPUT_TOKENS, PITCH_API_BASE_URL, PITCH_TIMEOUT_SECS

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ensure_range, GenerationError, ValidationError};

pub const SUPPORTED_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-1.0-pro"];
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
pub const MIN_OUTPUT_TOKENS: u32 = 256;
pub const MAX_OUTPUT_TOKENS: u32 = 2048;
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the text-generation client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    /// Creativity, 0.0 to 1.0
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Optional per-call overrides (CLI flags, Lambda request fields)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsOverrides {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl GenerationSettings {
    /// Read settings from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup; unset or unparsable values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank("GOOGLE_API_KEY").or_else(|| non_blank("GEMINI_API_KEY")),
            model: non_blank("PITCH_MODEL").unwrap_or(defaults.model),
            temperature: non_blank("PITCH_TEMPERATURE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.temperature),
            max_output_tokens: non_blank("PITCH_MAX_OUTPUT_TOKENS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_output_tokens),
            base_url: non_blank("PITCH_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: non_blank("PITCH_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Apply caller overrides. A blank API key override falls back to the existing key.
    pub fn apply(&mut self, overrides: &SettingsOverrides) {
        if let Some(key) = overrides.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.clone());
        }
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        if let Some(max_output_tokens) = overrides.max_output_tokens {
            self.max_output_tokens = max_output_tokens;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(ValidationError::new(
                "model",
                format!("unsupported model {}, expected one of {}", self.model, SUPPORTED_MODELS.join(", ")),
            ));
        }
        ensure_range("temperature", self.temperature as f64, 0.0, 1.0)?;
        if !(MIN_OUTPUT_TOKENS..=MAX_OUTPUT_TOKENS).contains(&self.max_output_tokens) {
            return Err(ValidationError::new(
                "max_output_tokens",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_OUTPUT_TOKENS, MAX_OUTPUT_TOKENS, self.max_output_tokens
                ),
            ));
        }
        Ok(())
    }

    /// The API key, or `MissingApiKey` if none is set
    pub fn resolved_api_key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = GenerationSettings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, GenerationSettings::default());
        assert!(settings.validate().is_ok());
        assert!(matches!(settings.resolved_api_key(), Err(GenerationError::MissingApiKey)));
    }

    #[test]
    fn test_env_values_parsed() {
        let settings = GenerationSettings::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "gem-key"),
            ("PITCH_MODEL", "gemini-1.5-pro"),
            ("PITCH_TEMPERATURE", "0.25"),
            ("PITCH_MAX_OUTPUT_TOKENS", "512"),
            ("PITCH_TIMEOUT_SECS", "not-a-number"),
        ]));
        assert_eq!(settings.resolved_api_key().unwrap(), "gem-key");
        assert_eq!(settings.model, "gemini-1.5-pro");
        assert_eq!(settings.temperature, 0.25);
        assert_eq!(settings.max_output_tokens, 512);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_google_key_preferred_and_blank_ignored() {
        let settings = GenerationSettings::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "google"),
            ("GEMINI_API_KEY", "gemini"),
        ]));
        assert_eq!(settings.api_key.as_deref(), Some("google"));

        let settings = GenerationSettings::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "   "),
            ("GEMINI_API_KEY", "gemini"),
        ]));
        assert_eq!(settings.api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_overrides() {
        let mut settings = GenerationSettings {
            api_key: Some("env-key".to_string()),
            ..Default::default()
        };
        settings.apply(&SettingsOverrides {
            api_key: Some(" ".to_string()),
            model: Some("gemini-1.0-pro".to_string()),
            temperature: Some(0.9),
            max_output_tokens: None,
        });
        assert_eq!(settings.api_key.as_deref(), Some("env-key"));
        assert_eq!(settings.model, "gemini-1.0-pro");
        assert_eq!(settings.temperature, 0.9);
        assert_eq!(settings.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }

    #[test]
    fn test_validate_ranges() {
        let bad_model = GenerationSettings { model: "gpt-4o".to_string(), ..Default::default() };
        assert_eq!(bad_model.validate().unwrap_err().field, "model");

        let hot = GenerationSettings { temperature: 1.5, ..Default::default() };
        assert_eq!(hot.validate().unwrap_err().field, "temperature");

        let short = GenerationSettings { max_output_tokens: 128, ..Default::default() };
        assert_eq!(short.validate().unwrap_err().field, "max_output_tokens");

        let edge = GenerationSettings { temperature: 0.0, max_output_tokens: 2048, ..Default::default() };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let settings = GenerationSettings { api_key: Some("secret".to_string()), ..Default::default() };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));
    }
}
