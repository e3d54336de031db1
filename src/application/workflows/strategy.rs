//! Strategy workflow - go-to-market plan generation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::BusinessPatch;
use crate::ports::ArtifactGenerator;

use super::{InFlight, WorkflowError};

/// Generates the go-to-market strategy.
///
/// The strategy module is the one that generates itself: entering it for
/// the first time with an analyzed idea and no strategy triggers a single
/// automatic generation. A failed automatic attempt is not retried; the
/// user regenerates explicitly.
pub struct StrategyWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    in_flight: InFlight,
}

impl StrategyWorkflow {
    pub fn new(workspace: Arc<VentureWorkspace>, generator: Arc<dyn ArtifactGenerator>) -> Self {
        Self {
            workspace,
            generator,
            in_flight: InFlight::new(),
        }
    }

    /// Returns true while a generation is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_loading()
    }

    /// Generates the strategy and merges it. Returns the text for
    /// immediate display.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if a generation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn generate(&self) -> Result<String, WorkflowError> {
        let (name, idea) = self.workspace.read(|record| {
            if !record.is_analyzed() {
                return Err(WorkflowError::IdeaNotAnalyzed);
            }
            Ok((record.name().to_string(), record.idea().to_string()))
        })?;
        let _guard = self.in_flight.begin()?;

        debug!(business = %name, "generating strategy");
        let strategy = self
            .generator
            .generate_strategy(&name, &idea)
            .await
            .map_err(|e| {
                warn!(error = %e, "strategy generation failed");
                e
            })?;

        self.workspace
            .apply(BusinessPatch::new().with_strategy(strategy.clone()));

        Ok(strategy)
    }

    /// Runs the automatic first-entry generation when it applies.
    ///
    /// Generates only if the idea is analyzed, no strategy exists, and no
    /// generation is in flight; otherwise returns `Ok(None)` without
    /// touching anything. Called by the host when the module is entered —
    /// an explicit guarded action, not a side effect of rendering.
    ///
    /// # Errors
    ///
    /// - `Generation` if the automatic attempt failed; it is not retried
    pub async fn ensure_generated(&self) -> Result<Option<String>, WorkflowError> {
        let should_run = self
            .workspace
            .read(|record| record.is_analyzed() && record.strategy().is_none());
        if !should_run || self.in_flight.is_loading() {
            return Ok(None);
        }

        match self.generate().await {
            Ok(strategy) => Ok(Some(strategy)),
            // A concurrent explicit generation claimed the flag; defer to it.
            Err(WorkflowError::AlreadyRunning) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerator;
    use crate::ports::GeneratorError;

    const PLAN: &str = "## Step 1\n- Launch a waitlist";

    fn analyzed_workspace() -> Arc<VentureWorkspace> {
        let workspace = Arc::new(VentureWorkspace::new());
        workspace.apply(
            BusinessPatch::new()
                .with_name("PupTreat Co")
                .with_idea("organic dog treats"),
        );
        workspace
    }

    #[tokio::test]
    async fn generate_merges_the_strategy() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(MockGenerator::new().with_strategy(PLAN));
        let workflow = StrategyWorkflow::new(workspace.clone(), generator);

        let strategy = workflow.generate().await.unwrap();
        assert_eq!(strategy, PLAN);
        assert_eq!(workspace.record().strategy(), Some(PLAN));
    }

    #[tokio::test]
    async fn ensure_generates_on_first_entry() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(MockGenerator::new().with_strategy(PLAN));
        let workflow = StrategyWorkflow::new(workspace.clone(), generator);

        let generated = workflow.ensure_generated().await.unwrap();
        assert_eq!(generated.as_deref(), Some(PLAN));
        assert_eq!(workspace.record().strategy(), Some(PLAN));
    }

    #[tokio::test]
    async fn ensure_skips_when_strategy_exists() {
        let workspace = analyzed_workspace();
        workspace.apply(BusinessPatch::new().with_strategy("existing"));

        let generator = Arc::new(MockGenerator::new());
        let workflow = StrategyWorkflow::new(workspace.clone(), generator.clone());

        let generated = workflow.ensure_generated().await.unwrap();
        assert!(generated.is_none());
        assert!(generator.calls().is_empty());
        assert_eq!(workspace.record().strategy(), Some("existing"));
    }

    #[tokio::test]
    async fn ensure_skips_before_analysis() {
        let workspace = Arc::new(VentureWorkspace::new());
        let generator = Arc::new(MockGenerator::new());
        let workflow = StrategyWorkflow::new(workspace, generator.clone());

        let generated = workflow.ensure_generated().await.unwrap();
        assert!(generated.is_none());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_automatic_attempt_is_not_retried() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(
            MockGenerator::new()
                .with_strategy_error(GeneratorError::unavailable("down"))
                .with_strategy(PLAN),
        );
        let workflow = StrategyWorkflow::new(workspace.clone(), generator.clone());

        assert!(workflow.ensure_generated().await.is_err());
        assert!(workspace.record().strategy().is_none());
        // One call so far; nothing retried behind the caller's back.
        assert_eq!(generator.calls().len(), 1);

        // The user can still regenerate explicitly.
        assert_eq!(workflow.generate().await.unwrap(), PLAN);
    }
}
