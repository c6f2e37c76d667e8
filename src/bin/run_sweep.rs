//! Sweep a product across a range of initial amounts
//!
//! Projects every amount in parallel and writes a CSV of end-of-term
//! results for rate-sheet comparison.

use anyhow::{bail, Context, Result};
use clap::Parser;
use plan_projection::scenario::bounds;
use plan_projection::{
    Assumptions, DepositCadence, DepositSchedule, ProductId, ProjectionEngine, ProjectionRequest,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Sweep initial amounts for one product")]
struct Args {
    /// Product to sweep
    #[arg(long)]
    product: ProductId,

    /// Term in months
    #[arg(long, default_value_t = 12)]
    term: u32,

    /// Lowest amount (defaults to the product minimum)
    #[arg(long)]
    from: Option<f64>,

    /// Highest amount (defaults to the product maximum)
    #[arg(long)]
    to: Option<f64>,

    /// Step between amounts
    #[arg(long, default_value_t = 5_000.0)]
    step: f64,

    /// Recurring deposit amount applied to every scenario
    #[arg(long)]
    deposit_amount: Option<f64>,

    /// Months between deposits: 1, 3, or 6
    #[arg(long, default_value_t = 1)]
    deposit_cadence: u32,

    /// Output CSV path
    #[arg(long, default_value = "sweep_output.csv")]
    output: String,
}

/// End-of-term results for one swept amount
#[derive(Debug, Clone)]
struct SweepRow {
    amount: f64,
    final_balance: f64,
    final_gain: f64,
    benchmark_balance: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let assumptions = Assumptions::published();
    let product_bounds = bounds::amount_bounds(&assumptions, args.product);
    let from = args
        .from
        .or(product_bounds.map(|b| b.min))
        .context("product has no amount bounds; pass --from")?;
    let to = args
        .to
        .or(product_bounds.map(|b| b.max))
        .context("product has no amount bounds; pass --to")?;
    if args.step <= 0.0 || to < from {
        bail!("invalid sweep range {from}..{to} step {}", args.step);
    }

    let deposit = match args.deposit_amount {
        Some(amount) => {
            let cadence = DepositCadence::from_months(args.deposit_cadence)
                .context("deposit cadence must be 1, 3, or 6 months")?;
            Some(DepositSchedule::new(amount, cadence))
        }
        None => None,
    };

    let mut amounts = Vec::new();
    let mut amount = from;
    while amount <= to {
        amounts.push(amount);
        amount += args.step;
    }
    println!(
        "Sweeping {} across {} amounts ({from}..{to})...",
        args.product,
        amounts.len()
    );

    let engine = ProjectionEngine::new(assumptions);
    let rows: Vec<SweepRow> = amounts
        .par_iter()
        .filter_map(|&amount| {
            let gross = ProjectionRequest {
                product: args.product,
                initial_amount: amount,
                term_months: args.term,
                age: None,
                deposit,
                show_gross_balance: true,
            };
            let net = ProjectionRequest {
                show_gross_balance: false,
                ..gross.clone()
            };

            let gross_series = engine.project(&gross).as_series()?.clone();
            let net_series = engine.project(&net).as_series()?.clone();
            Some(SweepRow {
                amount,
                final_balance: *gross_series.product_series.last()?,
                final_gain: *net_series.product_series.last()?,
                benchmark_balance: *gross_series.benchmark_series.last()?,
            })
        })
        .collect();

    if rows.is_empty() {
        bail!(
            "no results; product {} with term {}m produced empty series",
            args.product,
            args.term
        );
    }

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output))?;
    writeln!(file, "Amount,FinalBalance,FinalGain,BenchmarkBalance")?;
    for row in &rows {
        writeln!(
            file,
            "{:.2},{:.2},{:.2},{:.2}",
            row.amount, row.final_balance, row.final_gain, row.benchmark_balance
        )?;
    }

    println!("Output written to {}", args.output);
    println!("\nSweep Summary:");
    let first = rows.first().unwrap();
    let last = rows.last().unwrap();
    println!(
        "  {:>12.2} -> balance {:>12.2}, gain {:>12.2}",
        first.amount, first.final_balance, first.final_gain
    );
    println!(
        "  {:>12.2} -> balance {:>12.2}, gain {:>12.2}",
        last.amount, last.final_balance, last.final_gain
    );
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
