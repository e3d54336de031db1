//! Dashboard overview read model.
//!
//! A pure projection over the business record: progress through the six
//! artifact-producing modules, the headline revenue figure from the
//! simulation, and a small brand summary. Computed on demand, never stored.

use serde::Serialize;

use crate::domain::foundation::ModuleType;
use crate::domain::navigation::module_completion;
use crate::domain::venture::{total_revenue, BusinessRecord};

/// The six action-plan steps shown on the dashboard, in display order.
const PROGRESS_STEPS: [(ModuleType, &str); 6] = [
    (ModuleType::IdeaAnalyzer, "Idea Analyzed"),
    (ModuleType::Branding, "Brand Identity"),
    (ModuleType::WebsiteBuilder, "Website Built"),
    (ModuleType::Strategy, "Strategy Defined"),
    (ModuleType::Simulation, "Simulation Run"),
    (ModuleType::PitchDeck, "Pitch Deck Ready"),
];

/// One step of the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub module: ModuleType,
    pub label: &'static str,
    pub done: bool,
}

/// Brand summary card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSummary {
    pub slogan: String,
    pub primary_color: Option<String>,
    pub has_logo: bool,
}

/// Everything the dashboard shows, derived from one record snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub steps: Vec<ProgressStep>,
    pub completed: usize,
    /// Rounded integer percentage of completed steps.
    pub percent: u8,
    /// Exact integer sum of the simulated monthly revenues, when a
    /// simulation exists.
    pub projected_annual_revenue: Option<i64>,
    pub brand: Option<BrandSummary>,
}

impl DashboardOverview {
    /// Builds the overview from a record snapshot.
    pub fn from_record(record: &BusinessRecord) -> Self {
        let steps: Vec<ProgressStep> = PROGRESS_STEPS
            .iter()
            .map(|&(module, label)| ProgressStep {
                module,
                label,
                done: module_completion(module, record).unwrap_or(false),
            })
            .collect();

        let completed = steps.iter().filter(|s| s.done).count();
        let percent = ((completed * 100 + PROGRESS_STEPS.len() / 2) / PROGRESS_STEPS.len()) as u8;

        let projected_annual_revenue = record.simulation().map(total_revenue);

        let brand = record.branding().map(|b| BrandSummary {
            slogan: b.slogan.clone(),
            primary_color: b.primary_color().map(str::to_string),
            has_logo: b.logo_url.is_some(),
        });

        Self {
            steps,
            completed,
            percent,
            projected_annual_revenue,
            brand,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
