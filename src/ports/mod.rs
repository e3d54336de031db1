//! Ports - interfaces to everything outside the core.

mod generator;

pub use generator::{
    ArtifactGenerator, BrandingAssets, GeneratorError, GeneratorInfo, IdeaAnalysis,
};
