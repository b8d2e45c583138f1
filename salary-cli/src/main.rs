use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

use salary_cli::logging::init_logging;
use salary_cli::render::render_report;
use salary_cli::utils::parse_amount;
use salary_core::{SalaryInput, SalaryReportCalculator, WithholdingConfig};
use salary_data::load_withholding_config;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Annual salary withholding calculator.
///
/// Prints pension, health, long-term-care and employment insurance, every
/// deduction, the taxable base, income and local income tax, and net pay.
#[derive(Debug, Parser)]
#[command(name = "salary-report", version, about)]
struct Cli {
    /// Annual pre-tax salary. Commas are allowed (e.g. 22,000,000).
    #[arg(long, default_value = "22000000", value_parser = parse_amount)]
    pre_tax: Decimal,

    /// Number of dependents, including yourself.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    dependents: u32,

    /// Annual non-taxable allowance (meal allowance and the like).
    #[arg(long, default_value = "1200000", value_parser = parse_amount)]
    non_taxable: Decimal,

    /// TOML file overriding the statutory insurance and local tax rates.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print unrounded amounts.
    #[arg(long)]
    exact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_withholding_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WithholdingConfig::default(),
    };
    debug!(?config, "using withholding config");

    let calculator = SalaryReportCalculator::new(config).context("invalid withholding config")?;

    let input = SalaryInput::new(cli.pre_tax)
        .with_dependents(cli.dependents)
        .with_non_taxable_allowance(cli.non_taxable);
    info!(?input, "computing salary report");

    let report = calculator.calculate(&input);

    print!("{}", render_report(&report, cli.exact));

    Ok(())
}
