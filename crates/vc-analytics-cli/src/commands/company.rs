use clap::Args;
use serde_json::Value;

use vc_analytics_core::company;
use vc_analytics_core::types::CompanyOperatingSnapshot;

use crate::input;

/// Arguments for company operating metrics
#[derive(Args)]
pub struct CompanyMetricsArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_company_metrics(args: CompanyMetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: CompanyOperatingSnapshot = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for company metrics".into());
    };
    let result = company::company_metrics(&snapshot)?;
    Ok(serde_json::to_value(result)?)
}
