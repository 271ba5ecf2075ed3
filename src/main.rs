//! Command-line interface for financial-seed
//!
//! Creates the `customer`, `orders`, `addresses`, `items` and `order_details`
//! tables if they are missing, then inserts one generated row into each.
//!
//! # Usage Examples
//!
//! ```bash
//! # One cycle against localhost:5432/financial_db as postgres/postgres
//! financial-seed
//!
//! # Ten cycles against another server, with reproducible data
//! financial-seed --host db.local --database demo --cycles 10 --seed 42
//!
//! # Show what is being executed
//! RUST_LOG=financial_populate_postgresql=debug financial-seed
//! ```

use anyhow::Context;
use clap::Parser;
use financial_generator::DataGenerator;
use financial_populate_postgresql::{ConnectionArgs, FinancialPopulator, PostgreSQLGateway};

#[derive(Parser)]
#[command(name = "financial-seed")]
#[command(about = "Populate PostgreSQL with synthetic financial records")]
#[command(long_about = None)]
struct Cli {
    /// PostgreSQL connection options
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Number of cycles to run (each inserts one row per table)
    #[arg(long, default_value = "1")]
    cycles: u64,

    /// Random seed for deterministic generation (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize logging; silent unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway = PostgreSQLGateway::connect(&cli.connection)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let mut populator = FinancialPopulator::new(gateway, DataGenerator::new(cli.seed));
    let result = populator.run(cli.cycles).await;

    // Close regardless of how the run went
    populator.close().await;

    let metrics = result.context("Failed to populate financial tables")?;
    tracing::info!(
        "Inserted {} rows over {} cycles",
        metrics.rows_inserted,
        metrics.cycles
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_run_one_cycle() {
        let cli = Cli::parse_from(["financial-seed"]);
        assert_eq!(cli.cycles, 1);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cycles_and_seed() {
        let cli = Cli::parse_from(["financial-seed", "--cycles", "3", "--seed", "42"]);
        assert_eq!(cli.cycles, 3);
        assert_eq!(cli.seed, Some(42));
    }
}
