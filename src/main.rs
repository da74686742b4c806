//! rent-vs-buy CLI
//!
//! Project the cost of buying a condo against renting from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Year-by-year schedule for the reference scenario
//! rent-vs-buy project
//!
//! # Same schedule with each year discounted to today's dollars
//! rent-vs-buy project --todays-dollars --discount-rate 0.025
//!
//! # Load a scenario file and override a couple of assumptions
//! rent-vs-buy project --scenario condo.json --price 1250000 --horizon-years 15
//!
//! # Cumulative costs for every sale year up to 30, in today's dollars
//! rent-vs-buy compare --max-years 30 --todays-dollars
//!
//! # Print the reference scenario as a starting scenario file
//! rent-vs-buy defaults > condo.json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use rent_vs_buy::config::{load_assumptions, ConfigError};
use rent_vs_buy::core::assumptions::{Assumptions, DownPaymentSource};
use rent_vs_buy::core::error::ProjectionError;
use rent_vs_buy::projection::{find_crossover, Crossover, HorizonComparison, Projection, ProjectionEngine};
use rent_vs_buy::report::ComparisonTable;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "rent-vs-buy",
    version,
    about = "Compare the cost of renting an apartment with buying a condo"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Year-by-year schedule, sale settlement and totals for one horizon
    Project {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Discount each year to today's dollars at the scenario's discount rate
        #[arg(long)]
        todays_dollars: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Cumulative costs for every sale year from 1 to --max-years
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,
        #[arg(long, default_value_t = 30)]
        max_years: u32,
        /// Discount amounts to today's dollars at the scenario's discount rate
        #[arg(long)]
        todays_dollars: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the reference scenario as JSON
    Defaults,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliDownPaymentSource {
    Stocks,
    Cash,
    EquityLoan,
}

impl From<CliDownPaymentSource> for DownPaymentSource {
    fn from(value: CliDownPaymentSource) -> Self {
        match value {
            CliDownPaymentSource::Stocks => DownPaymentSource::Stocks,
            CliDownPaymentSource::Cash => DownPaymentSource::Cash,
            CliDownPaymentSource::EquityLoan => DownPaymentSource::EquityLoan,
        }
    }
}

/// Scenario file plus per-field overrides. Rates are fractions (0.065 = 6.5%).
#[derive(Debug, Args)]
struct ScenarioArgs {
    /// JSON scenario file; missing keys take the reference defaults
    #[arg(long)]
    scenario: Option<PathBuf>,
    #[arg(long)]
    monthly_rent: Option<f64>,
    #[arg(long)]
    rent_growth_rate: Option<f64>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    down_payment_fraction: Option<f64>,
    #[arg(long, value_enum)]
    down_payment_source: Option<CliDownPaymentSource>,
    #[arg(long)]
    equity_loan_rate: Option<f64>,
    #[arg(long)]
    equity_loan_term_years: Option<u32>,
    #[arg(long)]
    mortgage_rate: Option<f64>,
    #[arg(long)]
    mortgage_term_years: Option<u32>,
    #[arg(long)]
    property_tax_rate: Option<f64>,
    #[arg(long)]
    monthly_hoa_rate: Option<f64>,
    #[arg(long)]
    federal_tax_rate: Option<f64>,
    #[arg(long)]
    state_tax_rate: Option<f64>,
    #[arg(long)]
    appreciation_rate: Option<f64>,
    #[arg(long)]
    realtor_fee_rate: Option<f64>,
    #[arg(long)]
    capital_gains_rate: Option<f64>,
    #[arg(long)]
    horizon_years: Option<u32>,
    #[arg(long)]
    discount_rate: Option<f64>,
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ScenarioArgs {
    /// Scenario file (or defaults) with command-line overrides layered on top.
    fn resolve(self) -> Result<Assumptions, CliError> {
        let mut a = match &self.scenario {
            Some(path) => load_assumptions(path)?,
            None => Assumptions::default(),
        };
        apply(&mut a.monthly_rent, self.monthly_rent);
        apply(&mut a.rent_growth_rate, self.rent_growth_rate);
        apply(&mut a.price, self.price);
        apply(&mut a.down_payment_fraction, self.down_payment_fraction);
        apply(&mut a.down_payment_source, self.down_payment_source.map(Into::into));
        apply(&mut a.equity_loan_rate, self.equity_loan_rate);
        apply(&mut a.equity_loan_term_years, self.equity_loan_term_years);
        apply(&mut a.mortgage_rate, self.mortgage_rate);
        apply(&mut a.mortgage_term_years, self.mortgage_term_years);
        apply(&mut a.property_tax_rate, self.property_tax_rate);
        apply(&mut a.monthly_hoa_rate, self.monthly_hoa_rate);
        apply(&mut a.federal_tax_rate, self.federal_tax_rate);
        apply(&mut a.state_tax_rate, self.state_tax_rate);
        apply(&mut a.appreciation_rate, self.appreciation_rate);
        apply(&mut a.realtor_fee_rate, self.realtor_fee_rate);
        apply(&mut a.capital_gains_rate, self.capital_gains_rate);
        apply(&mut a.horizon_years, self.horizon_years);
        apply(&mut a.discount_rate, self.discount_rate);
        a.validate()?;
        Ok(a)
    }
}

/// JSON output schema for `project`.
#[derive(Serialize)]
struct ProjectOutput<'a> {
    assumptions: &'a Assumptions,
    projection: &'a Projection,
}

/// JSON output schema for `compare`.
#[derive(Serialize)]
struct CompareOutput<'a> {
    todays_dollars: bool,
    discount_rate: f64,
    rows: &'a [HorizonComparison],
    crossover: Option<Crossover>,
}

fn cmd_project(scenario: ScenarioArgs, todays_dollars: bool, format: OutputFormat) -> Result<(), CliError> {
    let assumptions = scenario.resolve()?;
    let mut projection = ProjectionEngine::project(&assumptions)?;
    if todays_dollars {
        projection = projection.in_todays_dollars(assumptions.discount_rate);
    }

    match format {
        OutputFormat::Json => {
            let output = ProjectOutput {
                assumptions: &assumptions,
                projection: &projection,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", assumptions);
            println!("{}", projection);
        }
    }
    Ok(())
}

fn cmd_compare(
    scenario: ScenarioArgs,
    max_years: u32,
    todays_dollars: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let assumptions = scenario.resolve()?;
    let rows = if todays_dollars {
        ProjectionEngine::compare_in_todays_dollars(&assumptions, max_years)?
    } else {
        ProjectionEngine::compare_across_years(&assumptions, max_years)?
    };
    let crossover = find_crossover(&rows);

    match format {
        OutputFormat::Json => {
            let output = CompareOutput {
                todays_dollars,
                discount_rate: assumptions.discount_rate,
                rows: &rows,
                crossover,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            let table = ComparisonTable {
                rows: &rows,
                crossover,
                discount_rate: todays_dollars.then_some(assumptions.discount_rate),
            };
            println!("{}", assumptions);
            println!("{}", table);
        }
    }
    Ok(())
}

fn cmd_defaults() -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(&Assumptions::default())?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Project {
            scenario,
            todays_dollars,
            format,
        } => cmd_project(scenario, todays_dollars, format),
        Command::Compare {
            scenario,
            max_years,
            todays_dollars,
            format,
        } => cmd_compare(scenario, max_years, todays_dollars, format),
        Command::Defaults => cmd_defaults(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
