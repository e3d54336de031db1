//! Generator workflows - one per module.
//!
//! Every workflow follows the same micro-protocol: flip its module-local
//! loading flag, snapshot the context it needs from the record, make exactly
//! one generator call, and on success merge the result back through the
//! workspace. A failed call changes nothing: the flag clears (guard drop)
//! and the record is untouched. Workflows never share loading state, so
//! modules can generate concurrently; re-invoking one module while it is
//! already loading is rejected here, not in the store.

mod branding;
mod idea_analysis;
mod pitch_deck;
mod simulation;
mod strategy;
mod website;

pub use branding::BrandingWorkflow;
pub use idea_analysis::IdeaAnalysisWorkflow;
pub use pitch_deck::PitchDeckWorkflow;
pub use simulation::SimulationWorkflow;
pub use strategy::StrategyWorkflow;
pub use website::WebsiteWorkflow;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::GeneratorError;

/// Errors surfaced by the workflows.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// A generation for this module is already in flight.
    #[error("a generation for this module is already in flight")]
    AlreadyRunning,

    /// The module needs an analyzed idea first.
    #[error("idea has not been analyzed yet")]
    IdeaNotAnalyzed,

    /// The idea text was blank.
    #[error("idea text is empty")]
    EmptyIdea,

    /// The generator call failed; the record was left unchanged.
    #[error(transparent)]
    Generation(#[from] GeneratorError),
}

/// Module-local loading flag.
///
/// `begin()` hands out a guard that clears the flag on drop, so every exit
/// path (success, error, panic) leaves the module idle again.
#[derive(Debug, Default)]
pub(crate) struct InFlight(AtomicBool);

impl InFlight {
    pub(crate) fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Claims the flag, or fails if a run is already in flight.
    pub(crate) fn begin(&self) -> Result<InFlightGuard<'_>, WorkflowError> {
        if self
            .0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WorkflowError::AlreadyRunning);
        }
        Ok(InFlightGuard(&self.0))
    }

    /// Returns true while a run is in flight.
    pub(crate) fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Clears the owning flag when dropped.
pub(crate) struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
