//! Simulation workflow - 12-month financial projection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::{BusinessPatch, MonthlyProjection};
use crate::ports::ArtifactGenerator;

use super::{InFlight, WorkflowError};

/// Runs the financial simulation for the venture.
pub struct SimulationWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    in_flight: InFlight,
}

impl SimulationWorkflow {
    pub fn new(workspace: Arc<VentureWorkspace>, generator: Arc<dyn ArtifactGenerator>) -> Self {
        Self {
            workspace,
            generator,
            in_flight: InFlight::new(),
        }
    }

    /// Returns true while a simulation is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_loading()
    }

    /// Runs the simulation and merges the projection rows.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if a simulation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn run(&self) -> Result<Vec<MonthlyProjection>, WorkflowError> {
        let (name, idea) = self.workspace.read(|record| {
            if !record.is_analyzed() {
                return Err(WorkflowError::IdeaNotAnalyzed);
            }
            Ok((record.name().to_string(), record.idea().to_string()))
        })?;
        let _guard = self.in_flight.begin()?;

        debug!(business = %name, "running financial simulation");
        let rows = self
            .generator
            .generate_simulation(&name, &idea)
            .await
            .map_err(|e| {
                warn!(error = %e, "simulation failed");
                e
            })?;

        self.workspace
            .apply(BusinessPatch::new().with_simulation(rows.clone()));

        Ok(rows)
    }
}
