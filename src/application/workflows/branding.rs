//! Branding workflow - slogan/palette and logo, independently.
//!
//! The two generations own separate loading flags and separate merges.
//! Each merge is a field-wise branding patch, so a regenerated identity
//! never clobbers an existing logo and a fresh logo never clobbers the
//! identity, whichever order the calls complete in.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::workspace::VentureWorkspace;
use crate::domain::venture::{BrandingPatch, BusinessPatch};
use crate::ports::{ArtifactGenerator, BrandingAssets};

use super::{InFlight, WorkflowError};

/// Generates the brand identity and the logo for the venture.
pub struct BrandingWorkflow {
    workspace: Arc<VentureWorkspace>,
    generator: Arc<dyn ArtifactGenerator>,
    identity_in_flight: InFlight,
    logo_in_flight: InFlight,
}

impl BrandingWorkflow {
    pub fn new(workspace: Arc<VentureWorkspace>, generator: Arc<dyn ArtifactGenerator>) -> Self {
        Self {
            workspace,
            generator,
            identity_in_flight: InFlight::new(),
            logo_in_flight: InFlight::new(),
        }
    }

    /// Returns true while an identity generation is in flight.
    pub fn is_loading_identity(&self) -> bool {
        self.identity_in_flight.is_loading()
    }

    /// Returns true while a logo generation is in flight.
    pub fn is_loading_logo(&self) -> bool {
        self.logo_in_flight.is_loading()
    }

    /// Generates a slogan and palette and merges them, preserving any logo.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if an identity generation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn generate_identity(&self) -> Result<BrandingAssets, WorkflowError> {
        let (name, idea) = self.context()?;
        let _guard = self.identity_in_flight.begin()?;

        debug!(business = %name, "generating brand identity");
        let assets = self
            .generator
            .generate_branding(&name, &idea)
            .await
            .map_err(|e| {
                warn!(error = %e, "brand identity generation failed");
                e
            })?;

        self.workspace
            .apply(BusinessPatch::new().with_branding(BrandingPatch::identity(
                assets.slogan.clone(),
                assets.colors.clone(),
            )));

        Ok(assets)
    }

    /// Generates a logo and merges it, preserving the identity.
    ///
    /// The model may return no image; that is a successful run that merges
    /// nothing and returns `None`.
    ///
    /// # Errors
    ///
    /// - `IdeaNotAnalyzed` if no idea analysis has landed yet
    /// - `AlreadyRunning` if a logo generation is in flight
    /// - `Generation` if the model call failed; the record is unchanged
    pub async fn generate_logo(&self) -> Result<Option<String>, WorkflowError> {
        let (name, idea) = self.context()?;
        let _guard = self.logo_in_flight.begin()?;

        debug!(business = %name, "generating logo");
        let logo = self
            .generator
            .generate_logo(&name, &idea)
            .await
            .map_err(|e| {
                warn!(error = %e, "logo generation failed");
                e
            })?;

        if let Some(url) = &logo {
            self.workspace
                .apply(BusinessPatch::new().with_branding(BrandingPatch::logo(url.clone())));
        }

        Ok(logo)
    }

    fn context(&self) -> Result<(String, String), WorkflowError> {
        self.workspace.read(|record| {
            if !record.is_analyzed() {
                return Err(WorkflowError::IdeaNotAnalyzed);
            }
            Ok((record.name().to_string(), record.idea().to_string()))
        })
    }
}
