//! Content enrichment: one model call per request.

pub mod generator;
pub mod request;
pub mod service;

pub use generator::{ContentGenerator, GeneratedContent, DEFAULT_CONTENT_MODEL};
pub use request::{ContentEnrichmentRequest, FunctionData, GenerateContext, RewriteContext};
pub use service::{ContentOutcome, ContentRecord, ContentService};
