//! Application layer - the workspace, its store, and the generator
//! workflows that drive it.

pub mod store;
pub mod workflows;
pub mod workspace;

pub use store::BusinessStore;
pub use workflows::{
    BrandingWorkflow, IdeaAnalysisWorkflow, PitchDeckWorkflow, SimulationWorkflow,
    StrategyWorkflow, WebsiteWorkflow, WorkflowError,
};
pub use workspace::VentureWorkspace;
