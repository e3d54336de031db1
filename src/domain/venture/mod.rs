//! Venture module - The shared business aggregate and its update contract.

mod branding;
mod patch;
mod pitch;
mod projection;
mod record;
mod swot;

pub use branding::BrandIdentity;
pub use patch::{merge_branding, BrandingPatch, BusinessPatch};
pub use pitch::{PitchSlide, PITCH_DECK_SLIDES};
pub use projection::{
    total_expenses, total_profit, total_revenue, MonthlyProjection, SIMULATION_MONTHS,
};
pub use record::BusinessRecord;
pub use swot::SwotAnalysis;
