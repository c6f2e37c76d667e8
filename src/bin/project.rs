//! Project a single scenario and print the result
//!
//! Outputs the raw outcome as JSON, as CSV rows, or as chart-series
//! descriptors ready for a charting frontend.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::warn;
use plan_projection::scenario::{bounds, DepositCadence, DepositSchedule};
use plan_projection::{
    assumptions::loader, chart, Assumptions, ProductId, ProjectionEngine, ProjectionOutcome,
    ProjectionRequest,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Chart,
}

#[derive(Debug, Parser)]
#[command(about = "Project one plan scenario")]
struct Args {
    /// Product to project (e.g. growthFlex, termLadder, retirementGold)
    #[arg(long)]
    product: ProductId,

    /// Initial amount
    #[arg(long, default_value_t = 10_000.0)]
    amount: f64,

    /// Term in months (fixed-term products override this)
    #[arg(long, default_value_t = 12)]
    term: u32,

    /// Current age (retirement products only)
    #[arg(long)]
    age: Option<u8>,

    /// Recurring deposit amount
    #[arg(long)]
    deposit_amount: Option<f64>,

    /// Months between deposits: 1, 3, or 6
    #[arg(long, default_value_t = 1)]
    deposit_cadence: u32,

    /// Report cumulative gain instead of the full balance
    #[arg(long)]
    net: bool,

    /// Directory with CSV assumption overrides
    #[arg(long)]
    assumptions: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = match &args.assumptions {
        Some(dir) => {
            let loaded = loader::load_from_dir(dir)
                .with_context(|| format!("loading assumption overrides from {}", dir.display()))?;
            Assumptions::from_loaded(&loaded)
        }
        None => Assumptions::published(),
    };

    let deposit = match args.deposit_amount {
        Some(amount) => {
            let cadence = DepositCadence::from_months(args.deposit_cadence)
                .context("deposit cadence must be 1, 3, or 6 months")?;
            Some(DepositSchedule::new(amount, cadence))
        }
        None => None,
    };

    let request = ProjectionRequest {
        product: args.product,
        initial_amount: args.amount,
        term_months: args.term,
        age: args.age,
        deposit,
        show_gross_balance: !args.net,
    };

    for issue in bounds::check_request(&request, &assumptions) {
        warn!("{issue}");
    }

    let engine = ProjectionEngine::new(assumptions);
    let outcome = engine.project(&request);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Chart => {
            let model = chart::chart_model(&outcome, request.product);
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        OutputFormat::Csv => print_csv(&outcome),
    }

    Ok(())
}

fn print_csv(outcome: &ProjectionOutcome) {
    match outcome {
        ProjectionOutcome::Series(series) => {
            println!("Month,Product,Benchmark");
            for ((month, product), benchmark) in series
                .months
                .iter()
                .zip(&series.product_series)
                .zip(&series.benchmark_series)
            {
                println!("{month},{product:.2},{benchmark:.2}");
            }
        }
        ProjectionOutcome::Grid(grid) => {
            println!("Age,{}", grid.months.join(","));
            for (column, age) in grid.ages.iter().enumerate() {
                let row: Vec<String> = grid
                    .values
                    .iter()
                    .map(|month_row| format!("{:.2}", month_row[column]))
                    .collect();
                println!("{age},{}", row.join(","));
            }
        }
    }
}
