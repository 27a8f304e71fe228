//! Penwright: LLM content enrichment and review summaries with exact,
//! per-call decimal costing.
//!
//! Two flows sit on a shared pricing and usage core:
//!
//! - [`content::ContentService`] compiles a prompt for one enrichment
//!   function, makes a single model call, prices it and stores the result.
//! - [`summaries::SummaryService`] runs a five-call pipeline (summarize then
//!   refine, alongside positive and negative tags then merge), stores the
//!   summary and notifies a secondary store.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use penwright::prelude::*;
//!
//! # async fn example() -> penwright::error::Result<()> {
//! let config = PenwrightConfig::from_env()?;
//! let generator = ContentGenerator::new(Arc::new(config.openai_client()?), config.cost_calculator()?);
//! let request = ContentEnrichmentRequest::generate(
//!     GenerateContext {
//!         user_instructions: "Two nights in Kyoto near Gion".into(),
//!         ..Default::default()
//!     },
//!     OutputFormat::Html,
//! );
//! let content = generator.generate(&request).await?;
//! println!("{} ({:?} USD)", content.text, content.cost);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod generation;
pub mod persistence;
pub mod prelude;
pub mod pricing;
pub mod prompts;
pub mod provider;
pub mod summaries;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
