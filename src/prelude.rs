//! Convenience re-exports for common use.

pub use crate::config::PenwrightConfig;
pub use crate::content::{
    ContentEnrichmentRequest, ContentGenerator, ContentService, GenerateContext, GeneratedContent,
    RewriteContext,
};
pub use crate::error::{PenwrightError, Result};
pub use crate::persistence::{MemoryRepository, Repository, Stored};
pub use crate::pricing::{CostCalculator, PricingEntry, PricingTable};
pub use crate::prompts::{Function, OutputFormat, PromptCompiler, Tone};
pub use crate::provider::{LanguageModelClient, OpenAiResponsesClient};
pub use crate::summaries::{
    HttpNotifier, Source, SourceType, SummaryRequest, SummaryResult, SummaryService,
};
pub use crate::types::{ModelMessage, Role, TokenUsage};
pub use crate::util::UsageTracker;
