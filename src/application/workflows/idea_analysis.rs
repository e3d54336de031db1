//! Idea analysis workflow - the entry point of every session.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::BusinessPatch;
use crate::ports::{ArtifactGenerator, IdeaAnalysis};

use super::{InFlight, WorkflowError};

/// Turns free-text idea input into the initial record fields.
///
/// The only workflow that runs before gating opens; its merge is what sets
/// `name` and thereby unlocks the rest of the workspace.
pub struct IdeaAnalysisWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    in_flight: InFlight,
}

impl IdeaAnalysisWorkflow {
    pub fn new(workspace: Arc<VentureWorkspace>, generator: Arc<dyn ArtifactGenerator>) -> Self {
        Self {
            workspace,
            generator,
            in_flight: InFlight::new(),
        }
    }

    /// Returns true while an analysis is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_loading()
    }

    /// Analyzes the idea and merges the result.
    ///
    /// Blank input is rejected before any generator call. The raw idea text
    /// is stored alongside the analysis so later generations can use it as
    /// context. Returns the analysis for immediate display.
    ///
    /// # Errors
    ///
    /// - `EmptyIdea` if the input is blank
    /// - `AlreadyRunning` if an analysis is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn analyze(&self, idea: &str) -> Result<IdeaAnalysis, WorkflowError> {
        if idea.trim().is_empty() {
            return Err(WorkflowError::EmptyIdea);
        }
        let _guard = self.in_flight.begin()?;

        debug!(generator = %self.generator.generator_info().name, "analyzing idea");
        let analysis = self.generator.analyze_idea(idea).await.map_err(|e| {
            warn!(error = %e, "idea analysis failed");
            e
        })?;

        self.workspace.apply(
            BusinessPatch::new()
                .with_idea(idea)
                .with_name(analysis.name.clone())
                .with_description(analysis.description.clone())
                .with_swot(analysis.swot.clone()),
        );

        Ok(analysis)
    }
}
