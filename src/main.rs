use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use onco_rate::{PipelineConfig, pipeline, write_report};

/// Per-year success rates of oncology clinical trials
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Trial table (comma-separated, header row)
    #[arg(long, default_value = "data/raw_data.csv")]
    trials: PathBuf,

    /// Trial start dates (tab-separated: nctid, start date, unused)
    #[arg(long, default_value = "data/nctid_date.txt")]
    start_years: PathBuf,

    /// ICD-10 to CCS category mapping (CSV with icd10_code, ccs_category);
    /// the ICD-10 neoplasm chapter is used when omitted
    #[arg(long)]
    icd_mapping: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = PipelineConfig {
        trial_table: args.trials,
        start_year_file: args.start_years,
        icd_mapping: args.icd_mapping,
        ..Default::default()
    };

    let start = Instant::now();
    let (rates, _summary) = pipeline::run(&config).with_context(|| {
        format!(
            "Failed to compute oncology success rates from {}",
            config.trial_table.display()
        )
    })?;
    info!("Completed in {:?}", start.elapsed());

    write_report(&rates, io::stdout().lock()).context("Failed to write report")?;
    Ok(())
}
