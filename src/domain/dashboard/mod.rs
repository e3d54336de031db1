//! Dashboard module - derived read models over the business record.

pub mod overview;

pub use overview::{BrandSummary, DashboardOverview, ProgressStep};
