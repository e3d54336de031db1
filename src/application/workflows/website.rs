//! Website workflow - landing page source generation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::BusinessPatch;
use crate::ports::ArtifactGenerator;

use super::{InFlight, WorkflowError};

/// Generates the landing page source for the venture.
///
/// Passes the brand palette as context when one exists; an un-branded
/// venture still gets a website, just without palette guidance.
pub struct WebsiteWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    in_flight: InFlight,
}

impl WebsiteWorkflow {
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

    /// Generates the website source and merges it. Returns the source for
    /// immediate preview.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if a generation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn generate(&self) -> Result<String, WorkflowError> {
        let (name, idea, colors) = self.workspace.read(|record| {
            if !record.is_analyzed() {
                return Err(WorkflowError::IdeaNotAnalyzed);
            }
            Ok((
                record.name().to_string(),
                record.idea().to_string(),
                record.palette().to_vec(),
            ))
        })?;
        let _guard = self.in_flight.begin()?;

        debug!(business = %name, palette = colors.len(), "generating website");
        let code = self
            .generator
            .generate_website_code(&name, &idea, &colors)
            .await
            .map_err(|e| {
                warn!(error = %e, "website generation failed");
                e
            })?;

        self.workspace
            .apply(BusinessPatch::new().with_website_code(code.clone()));

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{GeneratorCall, MockGenerator};
    use crate::domain::venture::BrandingPatch;
    use crate::ports::GeneratorError;

    fn analyzed_workspace() -> Arc<VentureWorkspace> {
        let workspace = Arc::new(VentureWorkspace::new());
        workspace.apply(
            BusinessPatch::new()
                .with_name("PupTreat Co")
                .with_idea("organic dog treats"),
        );
        workspace
    }

    const CODE: &str = "export default function App() { return null; }";

    #[tokio::test]
    async fn generation_merges_the_source() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(MockGenerator::new().with_website_code(CODE));
        let workflow = WebsiteWorkflow::new(workspace.clone(), generator);

        let code = workflow.generate().await.unwrap();
        assert_eq!(code, CODE);
        assert_eq!(workspace.record().website_code(), Some(CODE));
    }

    #[tokio::test]
    async fn passes_palette_when_branding_exists() {
        let workspace = analyzed_workspace();
        workspace.apply(BusinessPatch::new().with_branding(BrandingPatch::identity(
            "Fast",
            vec!["#111".to_string(), "#222".to_string()],
        )));

        let generator = Arc::new(MockGenerator::new().with_website_code(CODE));
        let workflow = WebsiteWorkflow::new(workspace, generator.clone());
        workflow.generate().await.unwrap();

        assert_eq!(
            generator.calls(),
            vec![GeneratorCall::WebsiteCode {
                name: "PupTreat Co".to_string(),
                idea: "organic dog treats".to_string(),
                colors: vec!["#111".to_string(), "#222".to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn passes_empty_palette_without_branding() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(MockGenerator::new().with_website_code(CODE));
        let workflow = WebsiteWorkflow::new(workspace, generator.clone());
        workflow.generate().await.unwrap();

        match &generator.calls()[0] {
            GeneratorCall::WebsiteCode { colors, .. } => assert!(colors.is_empty()),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_leaves_the_record_untouched() {
        let workspace = analyzed_workspace();
        let generator = Arc::new(
            MockGenerator::new().with_website_code_error(GeneratorError::network("reset")),
        );
        let workflow = WebsiteWorkflow::new(workspace.clone(), generator);

        assert!(workflow.generate().await.is_err());
        assert!(workspace.record().website_code().is_none());
        assert!(!workflow.is_loading());
    }
}
