mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::company::CompanyMetricsArgs;
use commands::fund::{FundPerformanceArgs, XirrArgs};
use commands::pipeline::PipelineArgs;
use commands::risk::RiskArgs;

/// Venture portfolio performance and risk analytics
#[derive(Parser)]
#[command(
    name = "vca",
    version,
    about = "Venture portfolio performance and risk analytics",
    long_about = "A CLI for venture fund and portfolio analytics with decimal precision. \
                  Computes XIRR over capital-call/distribution ledgers, fund multiples \
                  (TVPI, DPI, RVPI, MOIC), company operating metrics, deal pipeline \
                  ratios, and portfolio concentration and risk statistics."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fund performance report (XIRR, TVPI, DPI, RVPI, MOIC)
    FundPerformance(FundPerformanceArgs),
    /// Annualised IRR over dated cash flows
    Xirr(XirrArgs),
    /// Company operating metrics (growth, LTV:CAC, runway)
    CompanyMetrics(CompanyMetricsArgs),
    /// Deal pipeline metrics (stage conversion, cycle time)
    Pipeline(PipelineArgs),
    /// Portfolio risk profile (HHI, Sharpe, weighted beta, top-k shares)
    Risk(RiskArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::FundPerformance(args) => commands::fund::run_fund_performance(args),
        Commands::Xirr(args) => commands::fund::run_xirr(args),
        Commands::CompanyMetrics(args) => commands::company::run_company_metrics(args),
        Commands::Pipeline(args) => commands::pipeline::run_pipeline(args),
        Commands::Risk(args) => commands::risk::run_risk(args),
        Commands::Version => {
            println!("vca {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
