//! ModuleType enum representing the 7 workspace screens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 7 workspace modules, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleType {
    IdeaAnalyzer,
    Dashboard,
    Branding,
    WebsiteBuilder,
    Strategy,
    Simulation,
    PitchDeck,
}

impl ModuleType {
    /// Returns all module types in canonical (sidebar) order.
    pub fn all() -> &'static [ModuleType] {
        &[
            ModuleType::IdeaAnalyzer,
            ModuleType::Dashboard,
            ModuleType::Branding,
            ModuleType::WebsiteBuilder,
            ModuleType::Strategy,
            ModuleType::Simulation,
            ModuleType::PitchDeck,
        ]
    }

    /// Returns true if the module is reachable before an idea has been
    /// analyzed. Only the idea analyzer is; every other module is gated.
    pub fn is_always_enabled(&self) -> bool {
        matches!(self, ModuleType::IdeaAnalyzer)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleType::IdeaAnalyzer => "Idea Analyzer",
            ModuleType::Dashboard => "Dashboard",
            ModuleType::Branding => "Branding",
            ModuleType::WebsiteBuilder => "Website Builder",
            ModuleType::Strategy => "Strategy",
            ModuleType::Simulation => "Simulation",
            ModuleType::PitchDeck => "Pitch Deck",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
