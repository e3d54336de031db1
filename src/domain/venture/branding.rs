//! Brand identity value object.

use serde::{Deserialize, Serialize};

/// Brand identity for the venture.
///
/// Populated incrementally: slogan/colors arrive from one generation and the
/// logo from another, so the two halves must never clobber each other. The
/// field-wise rule lives in [`crate::domain::venture::BrandingPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    /// Marketing slogan. Empty until the first identity generation lands.
    pub slogan: String,

    /// Color palette as hex triples (e.g. `#1a2b3c`), normally 3 entries.
    pub colors: Vec<String>,

    /// Logo as an image data URL, if one has been generated.
    pub logo_url: Option<String>,
}

impl BrandIdentity {
    /// Creates an identity from a slogan and palette, with no logo.
    pub fn new(slogan: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            slogan: slogan.into(),
            colors,
            logo_url: None,
        }
    }

    /// Returns true if an identity generation has produced a palette.
    pub fn has_palette(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Returns the first palette color, if any.
    pub fn primary_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }
}
