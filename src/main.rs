use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use smartreads_lib::bootstrap::{self, DemoRequest};
use sr_core::BookId;
use tracing::error;

/// Load the catalog, open a book and print the resulting store as JSON.
#[derive(Debug, Parser)]
#[command(name = "smartreads", version, about)]
struct Args {
    /// Path to a TOML config file (overrides SMARTREADS_CONFIG).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id of the book to open.
    #[arg(short, long)]
    book: Option<u32>,

    /// Algorithm to select: cosine, knn, matrix or cluster.
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Seed for reproducible recommendations.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated backend latency.
    #[arg(long)]
    no_latency: bool,
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    if let Err(err) = run(Args::parse()).await {
        error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = bootstrap::load_or_default(args.config)?;
    if args.seed.is_some() {
        config.random_seed = args.seed;
    }
    if args.no_latency {
        config.catalog_latency_ms = 0;
        config.recommendation_latency_ms = 0;
    }

    let wired = bootstrap::wire_store(&config)?;
    let report = bootstrap::run_demo(
        &wired,
        DemoRequest {
            book: args.book.map(BookId::new),
            algorithm: args.algorithm,
        },
    )
    .await?;

    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");
    Ok(())
}
