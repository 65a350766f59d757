use clap::{Parser, Subcommand};
use harness::golden::{builtin_golden_set, load_golden_file, GoldenError, GoldenItem};
use harness::runner::BenchmarkRunner;
use scoring::{EmbedderConfig, LocalEmbedder, SimilarityScorer};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use transcript::prelude::*;

#[derive(Parser)]
#[command(name = "recall-bench")]
#[command(about = "Scores a study agent's recall against a golden question set")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark against the agent's conversation history
    Run {
        /// History endpoint of the agent service
        #[arg(long, env = "AGENT_URL")]
        endpoint: String,
        /// Embedding model used for similarity scoring
        #[arg(long, default_value = scoring::DEFAULT_MODEL)]
        model: String,
        /// JSON file of golden items (defaults to the built-in set)
        #[arg(long)]
        golden: Option<PathBuf>,
        /// CSV export path
        #[arg(long, default_value = "benchmark_results.csv")]
        out: PathBuf,
        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// HTTP timeout for the history fetch, in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Check that the history endpoint is reachable
    Health {
        /// History endpoint of the agent service
        #[arg(long, env = "AGENT_URL")]
        endpoint: String,
        /// HTTP timeout, in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// List the golden questions a run would evaluate
    Questions {
        /// JSON file of golden items (defaults to the built-in set)
        #[arg(long)]
        golden: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            endpoint,
            model,
            golden,
            out,
            json,
            timeout,
        } => {
            run_benchmark(&endpoint, &model, golden, &out, json, timeout).await?;
        }
        Commands::Health { endpoint, timeout } => {
            health_check(&endpoint, timeout).await?;
        }
        Commands::Questions { golden } => {
            list_questions(golden)?;
        }
    }

    Ok(())
}

async fn run_benchmark(
    endpoint: &str,
    model: &str,
    golden: Option<PathBuf>,
    out: &Path,
    json: Option<PathBuf>,
    timeout: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(golden)?;

    let config = HistoryConfig::new(endpoint).with_timeout_seconds(timeout);
    let client = HistoryClient::new(config)?;
    info!("Benchmarking against {}", client.endpoint());

    println!("⏳ Loading embedding model ({})...", model);
    let embedder = LocalEmbedder::new(EmbedderConfig::new().with_model(model))?;
    let scorer = SimilarityScorer::new(Box::new(embedder));

    let runner = BenchmarkRunner::new(Box::new(client), scorer);

    println!("\n🚀 Starting bulk evaluation (n={})", items.len());
    let report = runner.run(&items).await?;

    report.print_table();
    report.print_summary();

    report.write_csv(out)?;
    println!("\n📄 Results exported to '{}'", out.display());

    if let Some(json_path) = json {
        report.write_json(&json_path)?;
        println!("📄 JSON report written to '{}'", json_path.display());
    }

    Ok(())
}

async fn health_check(endpoint: &str, timeout: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("Checking history endpoint...");

    let config = HistoryConfig::new(endpoint).with_timeout_seconds(timeout);
    let client = HistoryClient::new(config)?;

    match client.health_check().await {
        Ok(count) => {
            println!(
                "✓ {} is reachable with {} messages in history.",
                client.endpoint(),
                count
            );
            info!("Health check successful");
        }
        Err(e) => {
            println!("✗ Health check failed: {}", e);
            error!("Health check failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

fn list_questions(golden: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(golden)?;

    println!("{} golden questions:", items.len());
    for item in &items {
        println!("  [{}] {}", item.category, item.question);
    }

    Ok(())
}

fn load_items(golden: Option<PathBuf>) -> Result<Vec<GoldenItem>, GoldenError> {
    match golden {
        Some(path) => load_golden_file(&path),
        None => Ok(builtin_golden_set()),
    }
}
