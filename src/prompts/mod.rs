//! Prompt compilation for content enrichment.

pub mod compiler;
pub mod kinds;
pub mod templates;
pub mod tones;

pub use compiler::{PromptCompiler, PromptLibrary};
pub use kinds::{Function, OutputFormat, Tone};
pub use templates::BaseTemplate;
