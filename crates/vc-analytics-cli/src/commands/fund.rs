use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use vc_analytics_core::fund::{self, FundPerformanceInput};
use vc_analytics_core::irr;
use vc_analytics_core::types::CashFlowEvent;

use crate::input;

/// Arguments for the fund performance report
#[derive(Args)]
pub struct FundPerformanceArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for standalone XIRR
#[derive(Args)]
pub struct XirrArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Deserialize)]
struct XirrInput {
    cash_flows: Vec<CashFlowEvent>,
}

pub fn run_fund_performance(
    args: FundPerformanceArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fp_input: FundPerformanceInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for fund performance".into());
    };
    let result = fund::fund_performance(&fp_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_xirr(args: XirrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let xirr_input: XirrInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for xirr".into());
    };
    let outcome = irr::solve_xirr(&xirr_input.cash_flows);
    Ok(serde_json::to_value(outcome)?)
}
