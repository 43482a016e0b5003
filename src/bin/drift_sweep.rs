use std::path::PathBuf;

use clap::Parser;

use nutriplan_rs::config::{EngineConfig, load_engine_config};
use nutriplan_rs::error::Result;
use nutriplan_rs::logging::init_logging;
use nutriplan_rs::sweep::{
    ProfileRanges, SweepConfig, print_summary, print_worst, run_sweep, write_csv,
    write_summary_json,
};

#[derive(Parser, Debug)]
#[command(name = "drift_sweep")]
#[command(about = "Measure calorie drift of rounded menus over random profiles")]
struct Args {
    /// Number of random profiles to evaluate
    #[arg(long, default_value = "500")]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Engine configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file for all records
    #[arg(long, default_value = "drift_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "drift_summary.json")]
    json: PathBuf,

    /// Number of worst drifts to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let engine = match &args.config {
        Some(path) => load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    let config = SweepConfig {
        samples: args.samples,
        seed: args.seed,
        ranges: ProfileRanges::default(),
        engine,
    };

    println!("Sampling {} profiles (seed {})...", config.samples, config.seed);
    let results = run_sweep(&config)?;

    print_worst(&results.records, args.topk);
    print_summary(&results.summary);

    write_csv(&results.records, &args.csv)?;
    println!("\nAll records written to {:?}", args.csv);

    write_summary_json(&results.summary, &results.records, args.topk, &args.json)?;
    println!("Summary written to {:?}", args.json);

    Ok(())
}
