//! Artifact Generator Port - Interface to the hosted generative-AI model.
//!
//! Every artifact in the workspace (analysis, branding, logo, website,
//! strategy, simulation, pitch deck) is produced by an external model; this
//! port is the only way the core reaches it. Signatures are contracts, not
//! transport details.
//!
//! # Design
//!
//! - One operation per artifact, each independently fallible
//! - Structured outputs arrive as domain types, already decoded
//! - Callers treat every failure identically: abandon the update and leave
//!   the record unchanged

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::venture::{MonthlyProjection, PitchSlide, SwotAnalysis};

/// Port for generating business artifacts from a hosted model.
///
/// Implementations connect to an external generation API and translate
/// between its wire format and our domain types.
#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    /// Turns free-text idea input into a structured analysis.
    async fn analyze_idea(&self, idea: &str) -> Result<IdeaAnalysis, GeneratorError>;

    /// Produces a slogan and a color palette (3 hex strings expected).
    async fn generate_branding(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<BrandingAssets, GeneratorError>;

    /// Produces a logo as an image data URL. The model may legitimately
    /// return no image, which is `Ok(None)`, not an error.
    async fn generate_logo(&self, name: &str, idea: &str)
        -> Result<Option<String>, GeneratorError>;

    /// Produces landing-page source text, opaque to the core.
    async fn generate_website_code(
        &self,
        name: &str,
        idea: &str,
        colors: &[String],
    ) -> Result<String, GeneratorError>;

    /// Produces a go-to-market strategy as formatted markdown.
    async fn generate_strategy(&self, name: &str, idea: &str) -> Result<String, GeneratorError>;

    /// Produces a 12-month financial projection.
    async fn generate_simulation(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<Vec<MonthlyProjection>, GeneratorError>;

    /// Produces a 7-slide pitch deck, optionally informed by the strategy.
    async fn generate_pitch_deck(
        &self,
        name: &str,
        idea: &str,
        strategy: Option<&str>,
    ) -> Result<Vec<PitchSlide>, GeneratorError>;

    /// Returns generator information (provider name, model).
    fn generator_info(&self) -> GeneratorInfo;
}

/// Structured result of idea analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaAnalysis {
    pub name: String,
    pub description: String,
    pub swot: SwotAnalysis,
}

/// Structured result of branding generation. Carries no logo; the logo has
/// its own operation and its own lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingAssets {
    pub slogan: String,
    pub colors: Vec<String>,
}

/// Generator identification, for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorInfo {
    /// Provider name (e.g. "gemini", "mock").
    pub name: String,
    /// Model identifier (e.g. "gemini-2.5-flash").
    pub model: String,
}

impl GeneratorInfo {
    /// Creates generator info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generator errors.
///
/// The core treats every variant the same way — the distinction exists for
/// logging and for surfacing a useful message to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeneratorError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to decode the provider response into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GeneratorError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
