use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vc_analytics_core::pipeline::{self, PipelineInput};

use crate::input;

/// Arguments for deal pipeline metrics
#[derive(Args)]
pub struct PipelineArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Deal count entering the funnel stage
    #[arg(long)]
    pub stage1: Option<u64>,

    /// Deal count reaching the next stage
    #[arg(long)]
    pub stage2: Option<u64>,

    /// Comma-separated elapsed cycle times in days (e.g. "14,21,30")
    #[arg(long, value_delimiter = ',')]
    pub cycle_times: Option<Vec<Decimal>>,
}

pub fn run_pipeline(args: PipelineArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pipe_input: PipelineInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else if let (Some(stage1), Some(stage2)) = (args.stage1, args.stage2) {
        PipelineInput {
            stage1_count: stage1,
            stage2_count: stage2,
            cycle_times: args.cycle_times.unwrap_or_default(),
        }
    } else {
        return Err(
            "--input <file.json>, stdin, or --stage1/--stage2 required for pipeline metrics"
                .into(),
        );
    };
    let result = pipeline::pipeline_metrics(&pipe_input)?;
    Ok(serde_json::to_value(result)?)
}
