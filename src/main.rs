//! Penwright CLI binary entry point.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use penwright::cli::{Cli, Commands, CostArgs, EnrichArgs, SummarizeArgs};
use penwright::config::PenwrightConfig;
use penwright::content::{ContentEnrichmentRequest, ContentGenerator, ContentRecord, ContentService};
use penwright::error::{PenwrightError, Result};
use penwright::persistence::MemoryRepository;
use penwright::pricing::{round_for_storage, CostCalculator};
use penwright::summaries::{
    SummaryConfig, SummaryPipeline, SummaryRecord, SummaryRequest, SummaryService,
};
use penwright::types::TokenUsage;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PenwrightConfig::from_env()?;
    if let Some(path) = cli.pricing_file {
        config.pricing_file = Some(path);
    }
    match cli.command {
        Commands::Cost(args) => handle_cost(&config, args),
        Commands::Pricing => handle_pricing(&config),
        Commands::Enrich(args) => handle_enrich(&config, args).await,
        Commands::Summarize(args) => handle_summarize(&config, args).await,
    }
}

fn handle_cost(config: &PenwrightConfig, args: CostArgs) -> Result<()> {
    let calculator = config.cost_calculator()?;
    let usage = TokenUsage::new(&args.model, args.input, args.output).with_cached_tokens(args.cached);
    let breakdown = calculator.breakdown(&args.model, &usage)?;
    print_json(&serde_json::json!({
        "model": args.model,
        "breakdown": breakdown,
        "total": breakdown.total(),
        "stored": round_for_storage(breakdown.total()),
    }))
}

fn handle_pricing(config: &PenwrightConfig) -> Result<()> {
    let table = config.pricing_table()?;
    for model in table.models() {
        if let Some(entry) = table.get(model) {
            let cached = entry
                .cached_input_rate
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{model:<40} input {:>8}  cached {:>8}  output {:>8}",
                entry.input_rate, cached, entry.output_rate
            );
        }
    }
    Ok(())
}

async fn handle_enrich(config: &PenwrightConfig, args: EnrichArgs) -> Result<()> {
    config.validate()?;
    let request: ContentEnrichmentRequest = read_json(&args.request)?;

    let model = args.model.unwrap_or_else(|| config.content_model.clone());
    let generator = ContentGenerator::new(Arc::new(config.openai_client()?), config.cost_calculator()?)
        .with_model(model);
    let store = Arc::new(MemoryRepository::<ContentRecord>::new());
    let service = ContentService::new(generator, store);

    let outcome = service.generate_content(&request).await?;
    print_json(&serde_json::json!({
        "id": outcome.id,
        "text": outcome.content.text,
        "model": outcome.content.model,
        "cost": outcome.content.cost,
    }))
}

async fn handle_summarize(config: &PenwrightConfig, args: SummarizeArgs) -> Result<()> {
    config.validate()?;
    let request: SummaryRequest = read_json(&args.request)?;
    request.validate()?;

    let client = Arc::new(config.openai_client()?);
    let calculator: CostCalculator = config.cost_calculator()?;

    if args.dry_run {
        let pipeline = SummaryPipeline::new(client, Arc::new(SummaryConfig::default()), calculator);
        let result = pipeline.run(&request.entity_name, &request.reviews()).await?;
        return print_json(&result);
    }

    let store = Arc::new(MemoryRepository::<SummaryRecord>::new());
    let service = SummaryService::new(client, calculator, store.clone(), Arc::new(config.notifier()?));
    let id = service.generate_summary(&request).await?;
    let record = match id {
        Some(id) => store.all().into_iter().find(|r| r.id == id),
        None => None,
    };
    print_json(&record)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| PenwrightError::InvalidRequest(format!("{}: {e}", path.display())))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
