//! AI adapters - implementations of the ArtifactGenerator port.

mod gemini_generator;
mod mock_generator;

pub use gemini_generator::{GeminiConfig, GeminiGenerator};
pub use mock_generator::{GeneratorCall, MockGenerator};
