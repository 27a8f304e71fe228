//! Review summarization: a five-call pipeline, storage and delivery.

pub mod config;
pub mod notify;
pub mod pipeline;
pub mod prompts;
pub mod service;
pub mod types;

pub use config::{StageConfig, StageKind, SummaryConfig};
pub use notify::{HttpNotifier, SummaryNotification, SummaryNotifier, DEFAULT_NOTIFY_TIMEOUT};
pub use pipeline::{normalize_tags, sum_costs, SummaryPipeline, SummaryResult, MAX_TAGS};
pub use service::{NotificationState, SummaryMetadata, SummaryRecord, SummaryService};
pub use types::{AllTags, Source, SourceType, SummaryRequest, Tags, MIN_SOURCES_FOR_SUMMARY};
