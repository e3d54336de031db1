//! Gemini Generator - Implementation of ArtifactGenerator for the Google
//! Generative Language API.
//!
//! Structured artifacts (analysis, branding, simulation, pitch deck) are
//! requested with `responseMimeType: application/json` plus a response
//! schema, so the reply body is decodable straight into domain types. The
//! logo operation uses the image model and extracts the first inline image
//! part as a data URL; website generation disables thinking and strips
//! markdown code fences from the reply.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_text_model("gemini-2.5-flash")
//!     .with_image_model("gemini-2.5-flash-image");
//!
//! let generator = GeminiGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::domain::venture::{MonthlyProjection, PitchSlide};
use crate::ports::{ArtifactGenerator, BrandingAssets, GeneratorError, GeneratorInfo, IdeaAnalysis};

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model used for text and structured-JSON generation.
    pub text_model: String,
    /// Model used for logo generation.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Sets the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API generator implementation.
pub struct GeminiGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGenerator {
    /// Creates a new Gemini generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL for a model.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        )
    }

    /// Sends one generation request and decodes the response envelope.
    async fn generate(
        &self,
        model: &str,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> Result<GenerateContentResponse, GeneratorError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config,
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    GeneratorError::network(format!("Connection failed: {}", e))
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let response = Self::handle_response_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| GeneratorError::parse(format!("Failed to decode response: {}", e)))
    }

    /// Maps the API response status to our error taxonomy.
    async fn handle_response_status(response: Response) -> Result<Response, GeneratorError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(GeneratorError::AuthenticationFailed),
            429 => Err(GeneratorError::rate_limited(30)),
            400..=499 => Err(GeneratorError::InvalidRequest(error_body)),
            500..=599 => Err(GeneratorError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GeneratorError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Requests structured JSON and decodes it into `T`.
    async fn generate_structured<T: serde::de::DeserializeOwned>(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<T, GeneratorError> {
        let config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            thinking_config: None,
        };

        let response = self
            .generate(&self.config.text_model, prompt, Some(config))
            .await?;
        let text = response.first_text().ok_or_else(|| {
            GeneratorError::parse("Response contained no text part".to_string())
        })?;

        serde_json::from_str(&text)
            .map_err(|e| GeneratorError::parse(format!("Structured output mismatch: {}", e)))
    }
}

#[async_trait]
impl ArtifactGenerator for GeminiGenerator {
    async fn analyze_idea(&self, idea: &str) -> Result<IdeaAnalysis, GeneratorError> {
        let prompt = format!(
            "Analyze the following business idea: \"{idea}\".\n\
             Provide a business name, a short description, and a SWOT analysis.\n\
             Return JSON with fields name, description, and swot \
             (strengths, weaknesses, opportunities, threats as string arrays)."
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "name": {"type": "STRING"},
                "description": {"type": "STRING"},
                "swot": {
                    "type": "OBJECT",
                    "properties": {
                        "strengths": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "weaknesses": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "opportunities": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "threats": {"type": "ARRAY", "items": {"type": "STRING"}}
                    }
                }
            }
        });

        self.generate_structured(prompt, schema).await
    }

    async fn generate_branding(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<BrandingAssets, GeneratorError> {
        let prompt = format!(
            "Create branding for a business named \"{name}\" which does: {idea}.\n\
             Return a JSON object with a slogan and a color palette (array of 3 hex codes)."
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "slogan": {"type": "STRING"},
                "colors": {"type": "ARRAY", "items": {"type": "STRING"}}
            }
        });

        self.generate_structured(prompt, schema).await
    }

    async fn generate_logo(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<Option<String>, GeneratorError> {
        let prompt = format!(
            "A professional, modern, minimalist vector logo for a company named \"{name}\".\n\
             The company does: {idea}.\n\
             The logo should be clean, iconic, and suitable for a tech startup or modern brand. \
             White background."
        );

        let response = self
            .generate(&self.config.image_model, prompt, None)
            .await?;

        Ok(response.first_inline_image())
    }

    async fn generate_website_code(
        &self,
        name: &str,
        idea: &str,
        colors: &[String],
    ) -> Result<String, GeneratorError> {
        let color_string = colors.join(", ");
        let prompt = format!(
            "Create a single-file React Landing Page for \"{name}\" ({idea}).\n\
             \n\
             RULES:\n\
             1. Use Tailwind CSS for styling.\n\
             2. Use these colors if possible: {color_string}.\n\
             3. The code MUST be a default export function named 'App'.\n\
             4. RETURN RAW JAVASCRIPT/JSX ONLY. NO MARKDOWN. NO ``` code blocks.\n\
             5. Import 'lucide-react' for icons.\n\
             6. Import 'React' from 'react'.\n\
             7. Do NOT use ReactDOM.render or createRoot. The file will be imported by an index file.\n\
             8. Include sections: Hero, Features, Testimonials, Footer.\n\
             \n\
             Generate the full code now."
        );

        let config = GenerationConfig {
            response_mime_type: None,
            response_schema: None,
            thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
        };

        let response = self
            .generate(&self.config.text_model, prompt, Some(config))
            .await?;
        let code = response.first_text().unwrap_or_default();

        Ok(strip_code_fences(&code))
    }

    async fn generate_strategy(&self, name: &str, idea: &str) -> Result<String, GeneratorError> {
        let prompt = format!(
            "Write a concise 3-step go-to-market strategy for \"{name}\" ({idea}).\n\
             Format it with clear headers and bullet points. Use Markdown."
        );

        let response = self.generate(&self.config.text_model, prompt, None).await?;
        Ok(response.first_text().unwrap_or_default())
    }

    async fn generate_simulation(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<Vec<MonthlyProjection>, GeneratorError> {
        let prompt = format!(
            "Generate a realistic 12-month financial projection for a new startup named \
             \"{name}\" ({idea}).\n\
             \n\
             CRITICAL INSTRUCTIONS FOR REALISM:\n\
             1. DO NOT generate linear growth. Real businesses have slow starts, spikes, and plateaus.\n\
             2. Include initial high expenses (burn rate) and low revenue.\n\
             3. Incorporate seasonality or market events relevant to this specific industry.\n\
             4. The \"event\" field must describe a specific, plausible real-world occurrence \
             (e.g., \"Competitor Price Cut\", \"Viral TikTok Feature\", \"Seasonality Dip\").\n\
             5. Base the numbers on realistic market benchmarks for this sector.\n\
             \n\
             Return a JSON array of 12 objects with month (Month 1 - Month 12), revenue (integer), \
             expenses (integer), profit (integer), and event (string)."
        );
        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "month": {"type": "STRING"},
                    "revenue": {"type": "INTEGER"},
                    "expenses": {"type": "INTEGER"},
                    "profit": {"type": "INTEGER"},
                    "event": {"type": "STRING"}
                }
            }
        });

        self.generate_structured(prompt, schema).await
    }

    async fn generate_pitch_deck(
        &self,
        name: &str,
        idea: &str,
        strategy: Option<&str>,
    ) -> Result<Vec<PitchSlide>, GeneratorError> {
        let context = strategy.unwrap_or("Standard startup growth");
        let prompt = format!(
            "Create a 7-slide pitch deck for a startup named \"{name}\" ({idea}).\n\
             Context from strategy: {context}.\n\
             \n\
             Generate specific content for these 7 slides:\n\
             1. Title Slide (Catchy tagline)\n\
             2. The Problem (What pain point are we solving?)\n\
             3. The Solution (Our product)\n\
             4. Market Opportunity (Why now? How big?)\n\
             5. Business Model (How do we make money?)\n\
             6. Go-To-Market (How do we get users?)\n\
             7. The Ask (What do we need?)\n\
             \n\
             Return a JSON array of 7 objects with title, content (main bullet points or \
             paragraph text), and notes (speaker notes for the presenter)."
        );
        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "title": {"type": "STRING"},
                    "content": {"type": "STRING"},
                    "notes": {"type": "STRING"}
                }
            }
        });

        self.generate_structured(prompt, schema).await
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new("gemini", self.config.text_model.clone())
    }
}

/// Strips markdown code fences the model sometimes adds despite the rules.
fn strip_code_fences(code: &str) -> String {
    code.replace("```javascript", "")
        .replace("```jsx", "")
        .replace("```tsx", "")
        .replace("```", "")
        .trim()
        .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Returns the first inline image of the first candidate as a data URL.
    fn first_inline_image(&self) -> Option<String> {
        self.candidates.first()?.content.parts.iter().find_map(|p| {
            p.inline_data
                .as_ref()
                .map(|d| format!("data:{};base64,{}", d.mime_type, d.data))
        })
    }
}
