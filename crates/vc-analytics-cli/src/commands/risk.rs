use clap::Args;
use serde_json::Value;

use vc_analytics_core::risk::{self, RiskProfileInput};

use crate::input;

/// Arguments for the portfolio risk profile
#[derive(Args)]
pub struct RiskArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_risk(args: RiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let risk_input: RiskProfileInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for risk profile".into());
    };
    let result = risk::risk_profile(&risk_input)?;
    Ok(serde_json::to_value(result)?)
}
