//! Typed patches for updating the business record.
//!
//! A [`BusinessPatch`] carries the fields one generator run produced;
//! everything it omits is left untouched by the merge. `branding` is the one
//! field that merges a level deeper: its sub-fields arrive from independent
//! generations (identity vs. logo) and must not clobber each other, so the
//! nested rule is the named function [`merge_branding`] rather than ad hoc
//! struct update syntax.

use serde::{Deserialize, Serialize};

use super::branding::BrandIdentity;
use super::pitch::PitchSlide;
use super::projection::MonthlyProjection;
use super::swot::SwotAnalysis;

/// Partial update to a [`super::BusinessRecord`].
///
/// `None` means "leave unchanged", never "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPatch {
    pub idea: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub swot: Option<SwotAnalysis>,
    pub branding: Option<BrandingPatch>,
    pub website_code: Option<String>,
    pub strategy: Option<String>,
    pub simulation: Option<Vec<MonthlyProjection>>,
    pub pitch_deck: Option<Vec<PitchSlide>>,
}

impl BusinessPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw idea text.
    pub fn with_idea(mut self, idea: impl Into<String>) -> Self {
        self.idea = Some(idea.into());
        self
    }

    /// Sets the business name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the SWOT analysis.
    pub fn with_swot(mut self, swot: SwotAnalysis) -> Self {
        self.swot = Some(swot);
        self
    }

    /// Sets the branding sub-patch.
    pub fn with_branding(mut self, branding: BrandingPatch) -> Self {
        self.branding = Some(branding);
        self
    }

    /// Sets the website source code.
    pub fn with_website_code(mut self, code: impl Into<String>) -> Self {
        self.website_code = Some(code.into());
        self
    }

    /// Sets the strategy text.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Sets the simulation rows.
    pub fn with_simulation(mut self, rows: Vec<MonthlyProjection>) -> Self {
        self.simulation = Some(rows);
        self
    }

    /// Sets the pitch deck slides.
    pub fn with_pitch_deck(mut self, slides: Vec<PitchSlide>) -> Self {
        self.pitch_deck = Some(slides);
        self
    }

    /// Returns true if applying this patch writes a non-empty name.
    ///
    /// The navigation controller uses this to decide whether the one
    /// automatic transition may fire.
    pub fn sets_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Partial update to the branding field.
///
/// `None` sub-fields keep their previous values, so a slogan/colors
/// regeneration leaves an existing logo alone and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingPatch {
    pub slogan: Option<String>,
    pub colors: Option<Vec<String>>,
    pub logo_url: Option<String>,
}

impl BrandingPatch {
    /// Patch carrying a fresh slogan and palette, leaving any logo alone.
    pub fn identity(slogan: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            slogan: Some(slogan.into()),
            colors: Some(colors),
            logo_url: None,
        }
    }

    /// Patch carrying only a generated logo.
    pub fn logo(url: impl Into<String>) -> Self {
        Self {
            slogan: None,
            colors: None,
            logo_url: Some(url.into()),
        }
    }
}

/// The field-wise merge rule for branding.
///
/// Sub-fields present in the patch replace the current values; omitted
/// sub-fields survive. When no branding exists yet, omitted sub-fields
/// default to an empty slogan and palette, matching a logo that lands
/// before any identity generation.
pub fn merge_branding(current: Option<&BrandIdentity>, patch: &BrandingPatch) -> BrandIdentity {
    let mut merged = current.cloned().unwrap_or_default();
    if let Some(slogan) = &patch.slogan {
        merged.slogan = slogan.clone();
    }
    if let Some(colors) = &patch.colors {
        merged.colors = colors.clone();
    }
    if let Some(logo_url) = &patch.logo_url {
        merged.logo_url = Some(logo_url.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::venture::BusinessRecord;
    use proptest::prelude::*;

    fn palette() -> Vec<String> {
        vec!["#111".to_string(), "#222".to_string(), "#333".to_string()]
    }

    #[test]
    fn identity_patch_omits_logo() {
        let patch = BrandingPatch::identity("Treats Done Right", palette());
        assert!(patch.logo_url.is_none());
        assert!(patch.slogan.is_some());
        assert!(patch.colors.is_some());
    }

    #[test]
    fn merge_branding_preserves_logo_across_regeneration() {
        let mut current = BrandIdentity::new("Old slogan", palette());
        current.logo_url = Some("data:image/png;base64,AAAA".to_string());

        let merged = merge_branding(
            Some(&current),
            &BrandingPatch::identity("New slogan", vec!["#abc".to_string()]),
        );

        assert_eq!(merged.slogan, "New slogan");
        assert_eq!(merged.colors, vec!["#abc".to_string()]);
        assert_eq!(merged.logo_url.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn merge_branding_preserves_identity_across_logo_update() {
        let current = BrandIdentity::new("Keep me", palette());

        let merged = merge_branding(Some(&current), &BrandingPatch::logo("data:image/png;base64,BB"));

        assert_eq!(merged.slogan, "Keep me");
        assert_eq!(merged.colors, palette());
        assert_eq!(merged.logo_url.as_deref(), Some("data:image/png;base64,BB"));
    }

    #[test]
    fn merge_branding_into_nothing_defaults_identity() {
        let merged = merge_branding(None, &BrandingPatch::logo("data:image/png;base64,CC"));
        assert_eq!(merged.slogan, "");
        assert!(merged.colors.is_empty());
        assert!(merged.logo_url.is_some());
    }

    #[test]
    fn slogan_only_patch_preserves_colors_and_logo() {
        let mut current = BrandIdentity::new("Old", palette());
        current.logo_url = Some("data:logo".to_string());

        let patch = BrandingPatch {
            slogan: Some("New".to_string()),
            colors: None,
            logo_url: None,
        };
        let merged = merge_branding(Some(&current), &patch);

        assert_eq!(merged.slogan, "New");
        assert_eq!(merged.colors, palette());
        assert_eq!(merged.logo_url.as_deref(), Some("data:logo"));
    }

    #[test]
    fn sets_name_requires_non_empty() {
        assert!(!BusinessPatch::new().sets_name());
        assert!(!BusinessPatch::new().with_name("").sets_name());
        assert!(BusinessPatch::new().with_name("Acme").sets_name());
    }

    // Strategy for arbitrary patches that never touch branding.
    fn patch_without_branding() -> impl Strategy<Value = BusinessPatch> {
        (
            proptest::option::of(".{0,20}"),
            proptest::option::of(".{0,20}"),
            proptest::option::of(".{0,20}"),
            proptest::option::of(".{0,40}"),
            proptest::option::of(".{0,40}"),
        )
            .prop_map(|(idea, name, description, website_code, strategy)| BusinessPatch {
                idea,
                name,
                description,
                swot: None,
                branding: None,
                website_code,
                strategy,
                simulation: None,
                pitch_deck: None,
            })
    }

    proptest! {
        #[test]
        fn patches_without_branding_leave_branding_unchanged(patch in patch_without_branding()) {
            let mut record = BusinessRecord::new();
            let mut brand_patch = BrandingPatch::identity("Slogan", palette());
            brand_patch.logo_url = Some("data:logo".to_string());
            record.merge(BusinessPatch::new().with_branding(brand_patch));
            let before = record.branding().cloned();

            record.merge(patch);

            prop_assert_eq!(record.branding().cloned(), before);
        }

        #[test]
        fn slogan_only_branding_patch_never_drops_siblings(slogan in ".{0,20}") {
            let mut record = BusinessRecord::new();
            let mut brand_patch = BrandingPatch::identity("First slogan", palette());
            brand_patch.logo_url = Some("data:logo".to_string());
            record.merge(BusinessPatch::new().with_branding(brand_patch));

            record.merge(BusinessPatch::new().with_branding(BrandingPatch {
                slogan: Some(slogan.clone()),
                colors: None,
                logo_url: None,
            }));

            let branding = record.branding().unwrap();
            prop_assert_eq!(&branding.slogan, &slogan);
            prop_assert_eq!(branding.colors.clone(), palette());
            prop_assert_eq!(branding.logo_url.as_deref(), Some("data:logo"));
        }
    }
}
