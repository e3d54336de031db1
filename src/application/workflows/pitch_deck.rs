//! Pitch deck workflow - 7-slide deck generation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::{BusinessPatch, PitchSlide};
use crate::ports::ArtifactGenerator;

use super::{InFlight, WorkflowError};

/// Generates the investor pitch deck.
///
/// Passes the strategy as extra context when one exists; the deck can be
/// generated without it.
pub struct PitchDeckWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    in_flight: InFlight,
}

impl PitchDeckWorkflow {
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

    /// Generates the deck and merges the slides.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if a generation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn generate(&self) -> Result<Vec<PitchSlide>, WorkflowError> {
        let (name, idea, strategy) = self.workspace.read(|record| {
            if !record.is_analyzed() {
                return Err(WorkflowError::IdeaNotAnalyzed);
            }
            Ok((
                record.name().to_string(),
                record.idea().to_string(),
                record.strategy().map(str::to_string),
            ))
        })?;
        let _guard = self.in_flight.begin()?;

        debug!(business = %name, with_strategy = strategy.is_some(), "generating pitch deck");
        let slides = self
            .generator
            .generate_pitch_deck(&name, &idea, strategy.as_deref())
            .await
            .map_err(|e| {
                warn!(error = %e, "pitch deck generation failed");
                e
            })?;

        self.workspace
            .apply(BusinessPatch::new().with_pitch_deck(slides.clone()));

        Ok(slides)
    }
}
