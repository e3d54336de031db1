//! Per-module completion, derived from record field presence.

use crate::domain::foundation::ModuleType;
use crate::domain::venture::BusinessRecord;

/// Returns whether a module's artifact is done, or `None` for the dashboard,
/// which aggregates the others and has no artifact of its own.
///
/// String artifacts count as done only when present and non-empty; the two
/// sequence artifacts count whenever present. Recomputed on every call,
/// never stored.
pub fn module_completion(module: ModuleType, record: &BusinessRecord) -> Option<bool> {
    match module {
        ModuleType::IdeaAnalyzer => Some(record.is_analyzed()),
        ModuleType::Dashboard => None,
        ModuleType::Branding => Some(
            record
                .branding()
                .is_some_and(|b| !b.slogan.is_empty()),
        ),
        ModuleType::WebsiteBuilder => Some(record.website_code().is_some_and(|c| !c.is_empty())),
        ModuleType::Strategy => Some(record.strategy().is_some_and(|s| !s.is_empty())),
        ModuleType::Simulation => Some(record.simulation().is_some()),
        ModuleType::PitchDeck => Some(record.pitch_deck().is_some()),
    }
}
