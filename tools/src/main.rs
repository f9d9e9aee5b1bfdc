//! gen-runner: headless batch generator for the SaaS GTM dataset.
//!
//! Usage:
//!   gen-runner --seed 42 --start 2024-07-01 --end 2025-12-31 --out ./output
//!   gen-runner --seed 42 --accounts 500 --summary-json run.json

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gtmgen_core::{
    config::GenConfig,
    emit,
    engine::{Dataset, GenEngine},
};
use std::env;
use std::path::PathBuf;

#[derive(serde::Serialize)]
struct RunSummary {
    seed: u64,
    start: NaiveDate,
    end: NaiveDate,
    tables: Vec<TableSummary>,
}

#[derive(serde::Serialize)]
struct TableSummary {
    table: &'static str,
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let start = parse_arg(&args, "--start", default_date(2024, 7, 1));
    let end = parse_arg(&args, "--end", default_date(2025, 12, 31));
    let accounts = parse_arg(&args, "--accounts", 500usize);
    let out_dir = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| PathBuf::from(&w[1]))
        .unwrap_or_else(|| PathBuf::from("./output"));
    let summary_json = args
        .windows(2)
        .find(|w| w[0] == "--summary-json")
        .map(|w| PathBuf::from(&w[1]));

    const KNOWN_FLAGS: [&str; 6] = [
        "--seed",
        "--start",
        "--end",
        "--accounts",
        "--out",
        "--summary-json",
    ];
    for flag in args.iter().filter(|a| a.starts_with("--")) {
        if !KNOWN_FLAGS.contains(&flag.as_str()) {
            log::warn!("unknown flag: {flag}");
        }
    }

    println!("SaaS GTM dataset generator");
    println!("  seed:     {seed}");
    println!("  horizon:  {start} .. {end}");
    println!("  accounts: {accounts}");
    println!("  out:      {}", out_dir.display());
    println!();

    let config = GenConfig::new(seed, start, end).with_account_count(accounts);
    let dataset = GenEngine::new(config)
        .build()
        .context("dataset build failed")?;
    emit::write_dataset(&dataset, &out_dir).context("csv emission failed")?;

    print_summary(&dataset);

    if let Some(path) = summary_json {
        let summary = RunSummary {
            seed,
            start,
            end,
            tables: dataset
                .row_counts()
                .into_iter()
                .map(|(table, rows)| TableSummary { table, rows })
                .collect(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
        println!();
        println!("Summary JSON written to {}", path.display());
    }

    Ok(())
}

fn print_summary(dataset: &Dataset) {
    println!("=== RUN SUMMARY ===");
    for (table, rows) in dataset.row_counts() {
        println!("  {table:<18} {rows:>9}");
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn default_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid default date")
}
