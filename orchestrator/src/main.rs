//! Main entry point for the `recycle` binary
//!
//! Wires the JSON record store and in-process memory into the orchestrator
//! and answers a single query.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use orchestrator::{
    services::{InMemoryMemory, JsonRecordStore},
    Orchestrator, OrchestratorConfig,
};
use shared::{agent_debug, logging, AgentId};

/// Answer "is this item recyclable, and how" for a locality
#[derive(Parser)]
#[command(name = "recycle")]
#[command(about = "Recyclability recommendations from product and locality records")]
pub struct Args {
    /// JSON file with known products and curbside programs
    #[arg(long)]
    pub records: PathBuf,

    /// Item description, e.g. "Is this water bottle recyclable?"
    #[arg(long)]
    pub query: String,

    /// Zip code or municipality of the user
    #[arg(long)]
    pub location: Option<String>,

    /// User identifier recorded with the interaction
    #[arg(long)]
    pub user_id: Option<String>,

    /// Print the full response as JSON instead of the formatted text
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Timeout for each upstream call in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Attempts per upstream agent
    #[arg(long)]
    pub attempts: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(AgentId::Orchestrator, "recycling advisor");

    let mut config = OrchestratorConfig::from_env()?;
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if let Some(attempts) = args.attempts {
        config = config.with_attempts(attempts);
    }
    config.validate()?;
    agent_debug!(AgentId::Orchestrator, config = ?config, "Configuration loaded");

    let records = Arc::new(
        JsonRecordStore::load(&args.records)
            .await
            .with_context(|| format!("loading records from {}", args.records.display()))?,
    );
    let memory = Arc::new(InMemoryMemory::new());

    let orchestrator =
        Orchestrator::new(Arc::clone(&records), Arc::clone(&records), config).with_memory(memory);

    let response = orchestrator
        .process_request(&args.query, args.location.as_deref(), args.user_id.as_deref())
        .await;

    if args.json {
        println!("{}", shared::to_json(&response)?);
    } else if let Some(text) = response.formatted() {
        println!("{text}");
    }

    if !response.is_success() {
        let reason = response.synthesis.error.as_deref().unwrap_or("unknown failure");
        logging::log_error(AgentId::Synthesis, "Recommendation", &reason);
        bail!("no recommendation: {reason}");
    }

    logging::log_success(AgentId::Orchestrator, "Recommendation delivered");
    Ok(())
}
