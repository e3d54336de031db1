//! Mock Artifact Generator for testing.
//!
//! Provides a scripted implementation of the ArtifactGenerator port so
//! workflows and the workspace can be tested without a real model behind
//! them.
//!
//! # Features
//!
//! - Pre-scripted responses per operation, consumed in order
//! - Per-response latency for completion-order tests
//! - Error injection for failure-path testing
//! - Call recording for verifying the context each workflow passes
//!
//! # Example
//!
//! ```ignore
//! let generator = MockGenerator::new()
//!     .with_branding(BrandingAssets { slogan: "Fast".into(), colors: vec![] })
//!     .with_logo(Some("data:image/png;base64,AA".into()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::venture::{MonthlyProjection, PitchSlide};
use crate::ports::{ArtifactGenerator, BrandingAssets, GeneratorError, GeneratorInfo, IdeaAnalysis};

/// One scripted reply: the result plus how long to pretend the model took.
#[derive(Debug, Clone)]
struct Scripted<T> {
    result: Result<T, GeneratorError>,
    delay: Duration,
}

impl<T> Scripted<T> {
    fn immediate(result: Result<T, GeneratorError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
        }
    }
}

/// A recorded generator invocation, with the context the caller passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorCall {
    AnalyzeIdea {
        idea: String,
    },
    Branding {
        name: String,
        idea: String,
    },
    Logo {
        name: String,
        idea: String,
    },
    WebsiteCode {
        name: String,
        idea: String,
        colors: Vec<String>,
    },
    Strategy {
        name: String,
        idea: String,
    },
    Simulation {
        name: String,
        idea: String,
    },
    PitchDeck {
        name: String,
        idea: String,
        strategy: Option<String>,
    },
}

/// Scripted generator for tests.
#[derive(Debug, Default)]
pub struct MockGenerator {
    analyses: Mutex<VecDeque<Scripted<IdeaAnalysis>>>,
    brandings: Mutex<VecDeque<Scripted<BrandingAssets>>>,
    logos: Mutex<VecDeque<Scripted<Option<String>>>>,
    websites: Mutex<VecDeque<Scripted<String>>>,
    strategies: Mutex<VecDeque<Scripted<String>>>,
    simulations: Mutex<VecDeque<Scripted<Vec<MonthlyProjection>>>>,
    pitch_decks: Mutex<VecDeque<Scripted<Vec<PitchSlide>>>>,
    calls: Mutex<Vec<GeneratorCall>>,
}

impl MockGenerator {
    /// Creates a mock with no scripted responses. Every operation fails
    /// until a response is scripted for it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts an idea analysis.
    pub fn with_analysis(self, analysis: IdeaAnalysis) -> Self {
        Self::push(&self.analyses, Scripted::immediate(Ok(analysis)));
        self
    }

    /// Scripts an idea analysis failure.
    pub fn with_analysis_error(self, error: GeneratorError) -> Self {
        Self::push(&self.analyses, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a branding generation.
    pub fn with_branding(self, assets: BrandingAssets) -> Self {
        Self::push(&self.brandings, Scripted::immediate(Ok(assets)));
        self
    }

    /// Scripts a branding generation that resolves after a delay.
    pub fn with_branding_after(self, assets: BrandingAssets, delay: Duration) -> Self {
        Self::push(
            &self.brandings,
            Scripted {
                result: Ok(assets),
                delay,
            },
        );
        self
    }

    /// Scripts a branding failure.
    pub fn with_branding_error(self, error: GeneratorError) -> Self {
        Self::push(&self.brandings, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a logo generation; `None` means the model returned no image.
    pub fn with_logo(self, logo: Option<String>) -> Self {
        Self::push(&self.logos, Scripted::immediate(Ok(logo)));
        self
    }

    /// Scripts a logo failure.
    pub fn with_logo_error(self, error: GeneratorError) -> Self {
        Self::push(&self.logos, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a website generation.
    pub fn with_website_code(self, code: impl Into<String>) -> Self {
        Self::push(&self.websites, Scripted::immediate(Ok(code.into())));
        self
    }

    /// Scripts a website failure.
    pub fn with_website_code_error(self, error: GeneratorError) -> Self {
        Self::push(&self.websites, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a strategy generation.
    pub fn with_strategy(self, strategy: impl Into<String>) -> Self {
        Self::push(&self.strategies, Scripted::immediate(Ok(strategy.into())));
        self
    }

    /// Scripts a strategy failure.
    pub fn with_strategy_error(self, error: GeneratorError) -> Self {
        Self::push(&self.strategies, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a simulation generation.
    pub fn with_simulation(self, rows: Vec<MonthlyProjection>) -> Self {
        Self::push(&self.simulations, Scripted::immediate(Ok(rows)));
        self
    }

    /// Scripts a simulation failure.
    pub fn with_simulation_error(self, error: GeneratorError) -> Self {
        Self::push(&self.simulations, Scripted::immediate(Err(error)));
        self
    }

    /// Scripts a pitch deck generation.
    pub fn with_pitch_deck(self, slides: Vec<PitchSlide>) -> Self {
        Self::push(&self.pitch_decks, Scripted::immediate(Ok(slides)));
        self
    }

    /// Scripts a pitch deck failure.
    pub fn with_pitch_deck_error(self, error: GeneratorError) -> Self {
        Self::push(&self.pitch_decks, Scripted::immediate(Err(error)));
        self
    }

    /// Returns every call made so far, in order.
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.lock().expect("MockGenerator: calls lock poisoned").clone()
    }

    fn push<T>(queue: &Mutex<VecDeque<Scripted<T>>>, scripted: Scripted<T>) {
        queue
            .lock()
            .expect("MockGenerator: queue lock poisoned")
            .push_back(scripted);
    }

    fn record(&self, call: GeneratorCall) {
        self.calls
            .lock()
            .expect("MockGenerator: calls lock poisoned")
            .push(call);
    }

    async fn take<T>(
        queue: &Mutex<VecDeque<Scripted<T>>>,
        operation: &str,
    ) -> Result<T, GeneratorError> {
        let scripted = queue
            .lock()
            .expect("MockGenerator: queue lock poisoned")
            .pop_front()
            .ok_or_else(|| {
                GeneratorError::unavailable(format!("no scripted {operation} response"))
            })?;

        if !scripted.delay.is_zero() {
            sleep(scripted.delay).await;
        }
        scripted.result
    }
}

#[async_trait]
impl ArtifactGenerator for MockGenerator {
    async fn analyze_idea(&self, idea: &str) -> Result<IdeaAnalysis, GeneratorError> {
        self.record(GeneratorCall::AnalyzeIdea {
            idea: idea.to_string(),
        });
        Self::take(&self.analyses, "analyze_idea").await
    }

    async fn generate_branding(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<BrandingAssets, GeneratorError> {
        self.record(GeneratorCall::Branding {
            name: name.to_string(),
            idea: idea.to_string(),
        });
        Self::take(&self.brandings, "generate_branding").await
    }

    async fn generate_logo(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<Option<String>, GeneratorError> {
        self.record(GeneratorCall::Logo {
            name: name.to_string(),
            idea: idea.to_string(),
        });
        Self::take(&self.logos, "generate_logo").await
    }

    async fn generate_website_code(
        &self,
        name: &str,
        idea: &str,
        colors: &[String],
    ) -> Result<String, GeneratorError> {
        self.record(GeneratorCall::WebsiteCode {
            name: name.to_string(),
            idea: idea.to_string(),
            colors: colors.to_vec(),
        });
        Self::take(&self.websites, "generate_website_code").await
    }

    async fn generate_strategy(&self, name: &str, idea: &str) -> Result<String, GeneratorError> {
        self.record(GeneratorCall::Strategy {
            name: name.to_string(),
            idea: idea.to_string(),
        });
        Self::take(&self.strategies, "generate_strategy").await
    }

    async fn generate_simulation(
        &self,
        name: &str,
        idea: &str,
    ) -> Result<Vec<MonthlyProjection>, GeneratorError> {
        self.record(GeneratorCall::Simulation {
            name: name.to_string(),
            idea: idea.to_string(),
        });
        Self::take(&self.simulations, "generate_simulation").await
    }

    async fn generate_pitch_deck(
        &self,
        name: &str,
        idea: &str,
        strategy: Option<&str>,
    ) -> Result<Vec<PitchSlide>, GeneratorError> {
        self.record(GeneratorCall::PitchDeck {
            name: name.to_string(),
            idea: idea.to_string(),
            strategy: strategy.map(str::to_string),
        });
        Self::take(&self.pitch_decks, "generate_pitch_deck").await
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new("mock", "mock-model-1")
    }
}
