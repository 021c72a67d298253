use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Rate};
use crate::VcAnalyticsResult;

/// Conversion rate between two adjacent funnel stages.
/// An empty upstream stage yields zero.
pub fn conversion_rate(stage1_count: u64, stage2_count: u64) -> Rate {
    if stage1_count == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(stage2_count) / Decimal::from(stage1_count)
    }
}

/// Arithmetic mean of elapsed deal cycle times. An empty list yields zero.
pub fn average_cycle_time(durations: &[Decimal]) -> Decimal {
    if durations.is_empty() {
        Decimal::ZERO
    } else {
        durations.iter().sum::<Decimal>() / Decimal::from(durations.len() as i64)
    }
}

/// Input for the pipeline report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInput {
    pub stage1_count: u64,
    pub stage2_count: u64,
    /// Elapsed time per closed deal, in days
    pub cycle_times: Vec<Decimal>,
}

/// Deal pipeline metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineMetrics {
    pub conversion_rate: Rate,
    pub average_cycle_time: Decimal,
}

/// Calculate deal pipeline metrics: stage conversion and mean cycle time.
pub fn pipeline_metrics(
    input: &PipelineInput,
) -> VcAnalyticsResult<ComputationOutput<PipelineMetrics>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let output = PipelineMetrics {
        conversion_rate: conversion_rate(input.stage1_count, input.stage2_count),
        average_cycle_time: average_cycle_time(&input.cycle_times),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Pipeline Metrics: Stage Conversion, Average Cycle Time",
        &serde_json::json!({
            "stage1_count": input.stage1_count,
            "stage2_count": input.stage2_count,
            "num_cycle_times": input.cycle_times.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conversion_rate() {
        assert_eq!(conversion_rate(10, 3), dec!(0.3));
        assert_eq!(conversion_rate(0, 3), Decimal::ZERO);
        assert_eq!(conversion_rate(8, 0), Decimal::ZERO);
    }

    #[test]
    fn test_average_cycle_time() {
        assert_eq!(
            average_cycle_time(&[dec!(30), dec!(60), dec!(90)]),
            dec!(60)
        );
        assert_eq!(average_cycle_time(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_pipeline_report() {
        let input = PipelineInput {
            stage1_count: 40,
            stage2_count: 10,
            cycle_times: vec![dec!(14), dec!(21), dec!(28)],
        };
        let result = pipeline_metrics(&input).unwrap();
        assert_eq!(result.result.conversion_rate, dec!(0.25));
        assert_eq!(result.result.average_cycle_time, dec!(21));
    }
}
