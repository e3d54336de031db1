//! BusinessRecord aggregate entity.
//!
//! The single shared aggregate holding every generated artifact for one
//! user session. Six generator workflows write into it through the typed
//! patch in [`super::patch`]; everything else only reads.
//!
//! # Invariants
//!
//! - Exactly one record exists per session; all modules observe the same
//!   instance (shared through the store, never copied for writing).
//! - `name` non-empty is the sole "an idea has been analyzed" signal.
//!   Navigation gating keys off it and nothing else.
//! - A partial `branding` update preserves sub-fields it does not mention.
//! - Every other optional field is either fully absent or fully populated.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::branding::BrandIdentity;
use super::patch::BusinessPatch;
use super::pitch::PitchSlide;
use super::projection::MonthlyProjection;
use super::swot::SwotAnalysis;

/// The per-session business aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Raw user input describing the idea.
    idea: String,

    /// Business name. Empty until the first idea analysis completes.
    name: String,

    /// Short description, set by idea analysis.
    description: String,

    /// SWOT analysis, set by idea analysis.
    swot: Option<SwotAnalysis>,

    /// Brand identity, populated incrementally (slogan/colors and logo
    /// arrive from independent generations).
    branding: Option<BrandIdentity>,

    /// Generated landing page source, opaque to the core.
    website_code: Option<String>,

    /// Go-to-market strategy markdown, opaque to the core.
    strategy: Option<String>,

    /// 12-month financial simulation.
    simulation: Option<Vec<MonthlyProjection>>,

    /// 7-slide pitch deck.
    pitch_deck: Option<Vec<PitchSlide>>,

    /// When the record was last merged into.
    updated_at: Timestamp,
}

impl Default for BusinessRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessRecord {
    /// Creates an empty record for a fresh session.
    pub fn new() -> Self {
        Self {
            idea: String::new(),
            name: String::new(),
            description: String::new(),
            swot: None,
            branding: None,
            website_code: None,
            strategy: None,
            simulation: None,
            pitch_deck: None,
            updated_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn swot(&self) -> Option<&SwotAnalysis> {
        self.swot.as_ref()
    }

    pub fn branding(&self) -> Option<&BrandIdentity> {
        self.branding.as_ref()
    }

    pub fn website_code(&self) -> Option<&str> {
        self.website_code.as_deref()
    }

    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    pub fn simulation(&self) -> Option<&[MonthlyProjection]> {
        self.simulation.as_deref()
    }

    pub fn pitch_deck(&self) -> Option<&[PitchSlide]> {
        self.pitch_deck.as_deref()
    }

    /// Returns when the record was last merged into.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true once an idea analysis has landed.
    ///
    /// This is the only "analyzed" signal: an empty SWOT list or a blank
    /// description never count for or against it.
    pub fn is_analyzed(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns the palette colors, or an empty slice when branding is
    /// absent. Website generation passes this as context.
    pub fn palette(&self) -> &[String] {
        self.branding
            .as_ref()
            .map(|b| b.colors.as_slice())
            .unwrap_or(&[])
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a shallow field-wise merge.
    ///
    /// Every field present in the patch replaces the record's field
    /// wholesale, except `branding`, which merges one level deeper so that
    /// omitted sub-fields keep their previous values (see
    /// [`super::patch::merge_branding`]). The merge is structurally total:
    /// no validation is performed and any well-typed patch is accepted.
    pub fn merge(&mut self, patch: BusinessPatch) {
        let BusinessPatch {
            idea,
            name,
            description,
            swot,
            branding,
            website_code,
            strategy,
            simulation,
            pitch_deck,
        } = patch;

        if let Some(idea) = idea {
            self.idea = idea;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(swot) = swot {
            self.swot = Some(swot);
        }
        if let Some(branding) = branding {
            self.branding = Some(super::patch::merge_branding(
                self.branding.as_ref(),
                &branding,
            ));
        }
        if let Some(code) = website_code {
            self.website_code = Some(code);
        }
        if let Some(strategy) = strategy {
            self.strategy = Some(strategy);
        }
        if let Some(simulation) = simulation {
            self.simulation = Some(simulation);
        }
        if let Some(pitch_deck) = pitch_deck {
            self.pitch_deck = Some(pitch_deck);
        }

        self.updated_at = Timestamp::now();
    }
}
