//! Amortization CLI
//!
//! Command-line front end: compute a schedule, print it, optionally export it

use std::io::{self, Write};
use std::path::PathBuf;

use amortization_engine::config::AppConfig;
use amortization_engine::export::{default_export_filename, export_csv_file, write_json};
use amortization_engine::report::{render_comparison, render_summary, render_table};
use amortization_engine::ScheduleRunner;
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "amortization", version, about = "Amortization & depreciation schedule calculator")]
struct Cli {
    /// JSON config file with asset inputs
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    asset_name: Option<String>,

    /// Total cost, e.g. "12,000.00" or "12.000,00"
    #[arg(long)]
    cost: Option<String>,

    /// Salvage value (default 0)
    #[arg(long)]
    salvage: Option<String>,

    /// Start date, YYYY-MM-DD or YYYYMMDD
    #[arg(long)]
    start: Option<String>,

    /// End date, YYYY-MM-DD or YYYYMMDD
    #[arg(long)]
    end: Option<String>,

    /// Method label or code: sl, ddb, soyd
    #[arg(long)]
    method: Option<String>,

    /// Save the schedule as CSV, to PATH or the default file name
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    csv: Option<String>,

    /// Print the schedule as JSON instead of a table
    #[arg(long, conflicts_with = "compare")]
    json: bool,

    /// Also summarise the asset under every method
    #[arg(long)]
    compare: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(v) = &self.asset_name {
            config.asset_name = v.clone();
        }
        if let Some(v) = &self.cost {
            config.total_cost = Some(v.clone());
        }
        if let Some(v) = &self.salvage {
            config.salvage_value = v.clone();
        }
        if let Some(v) = &self.start {
            config.start_date = Some(v.clone());
        }
        if let Some(v) = &self.end {
            config.end_date = Some(v.clone());
        }
        if let Some(v) = &self.method {
            config.method = v.clone();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let form = config.to_form(Local::now().date_naive());
    let request = form.validate()?;
    info!("Asset '{}': {} over {} to {}", form.asset_name, request.method, request.start_date, request.end_date);

    let runner = ScheduleRunner::new(request);
    let schedule = runner.run()?;

    if cli.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_json(&form.asset_name, &schedule, &mut out)?;
        writeln!(out)?;
    } else {
        println!("Asset: {}", form.asset_name);
        println!("Method: {}", schedule.request().method);
        println!("Cost: {}  Salvage: {}", schedule.request().principal, schedule.request().salvage);
        println!();
        print!("{}", render_table(&schedule));
        println!();
        print!("{}", render_summary(&schedule.summary()));

        if cli.compare {
            println!();
            print!("{}", render_comparison(&runner.compare_all()?));
        }
    }

    if let Some(path) = &cli.csv {
        let path = if path.is_empty() {
            config.output_path(&default_export_filename(&form.asset_name, "csv"))
        } else {
            PathBuf::from(path)
        };
        export_csv_file(&schedule, &path).with_context(|| format!("Failed to save {}", path.display()))?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}
