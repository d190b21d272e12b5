use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use sales_total::{compute, Issues, RESULTS_FILE};

#[derive(Parser)]
#[command(version, about)]
/// Totals sales records against a price catalogue, and stores the result.
struct Args {
    /// Path to the JSON price catalogue
    catalogue: PathBuf,
    /// Path to the JSON sales records
    sales: PathBuf,
    /// Where to store the results [default: SalesResults.txt beside the executable]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut issues = Issues::new();
    let report = compute(&args.catalogue, &args.sales, &mut issues)?;
    let output = args.output.unwrap_or_else(default_output);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    report.publish(&issues, output, &mut stdout, &mut stderr)?;
    stdout.flush()?;
    Ok(())
}

fn default_output() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(RESULTS_FILE)))
        .unwrap_or_else(|| PathBuf::from(RESULTS_FILE))
}
