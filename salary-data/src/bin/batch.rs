use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salary_core::SalaryReportCalculator;
use salary_data::{PayrollLoader, load_withholding_config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compute salary withholding reports for every employee in a CSV file.
///
/// The input CSV must have the following columns:
/// - employee: identifier copied to the output
/// - pre_tax_salary: annual gross salary
/// - dependent_count: dependents including the employee (empty for 1)
/// - non_taxable_allowance: annual non-taxable allowance (empty for 1,200,000)
#[derive(Parser, Debug)]
#[command(name = "salary-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the payroll CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the report CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the statutory insurance and local tax rates
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write unrounded amounts instead of rounding to two decimal places
    #[arg(long, default_value_t = false)]
    exact: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_withholding_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Default::default(),
    };
    let calculator = SalaryReportCalculator::new(config).context("Invalid withholding config")?;

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = PayrollLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    info!(count = records.len(), file = %args.file.display(), "parsed payroll records");

    let rows = PayrollLoader::compute(&calculator, &records);

    let written = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            PayrollLoader::write(out, &rows, args.exact)
        }
        None => PayrollLoader::write(io::stdout().lock(), &rows, args.exact),
    }
    .context("Failed to write report CSV")?;

    info!(written, "wrote salary reports");

    Ok(())
}
