//! AI generator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Model for text and structured-JSON generation
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model for logo generation
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.text_model.is_empty() || self.image_model.is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..AiConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_requires_api_key() {
        let config = AiConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        ));
    }

    #[test]
    fn test_empty_api_key_does_not_count() {
        let config = AiConfig {
            gemini_api_key: Some(String::new()),
            ..AiConfig::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_valid_config_passes() {
        let config = AiConfig {
            gemini_api_key: Some("key-123".to_string()),
            ..AiConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = AiConfig {
            gemini_api_key: Some("key-123".to_string()),
            timeout_secs: 0,
            ..AiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
