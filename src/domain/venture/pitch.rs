//! Pitch deck value objects.

use serde::{Deserialize, Serialize};

/// Number of slides in a generated pitch deck.
pub const PITCH_DECK_SLIDES: usize = 7;

/// One slide of the pitch deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchSlide {
    pub title: String,
    /// Main bullet points or paragraph text.
    pub content: String,
    /// Speaker notes for the presenter.
    pub notes: String,
}

impl PitchSlide {
    /// Creates a slide.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            notes: notes.into(),
        }
    }
}
