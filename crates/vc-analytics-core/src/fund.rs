use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::VcAnalyticsError;
use crate::irr::solve_xirr;
use crate::types::*;
use crate::VcAnalyticsResult;

/// Total Value to Paid-In: (distributions + residual value) / paid-in.
/// Zero paid-in capital yields zero.
pub fn tvpi(state: &FundCapitalState) -> Multiple {
    if state.paid_in_capital.is_zero() {
        Decimal::ZERO
    } else {
        (state.total_distributions + state.residual_value) / state.paid_in_capital
    }
}

/// Distributions to Paid-In. Zero paid-in capital yields zero.
pub fn dpi(state: &FundCapitalState) -> Multiple {
    if state.paid_in_capital.is_zero() {
        Decimal::ZERO
    } else {
        state.total_distributions / state.paid_in_capital
    }
}

/// Residual Value to Paid-In: the unrealised component of TVPI.
pub fn rvpi(state: &FundCapitalState) -> Multiple {
    if state.paid_in_capital.is_zero() {
        Decimal::ZERO
    } else {
        state.residual_value / state.paid_in_capital
    }
}

/// Multiple on Invested Capital. Zero invested capital yields zero.
pub fn moic(total_value: Money, invested_capital: Money) -> Multiple {
    if invested_capital.is_zero() {
        Decimal::ZERO
    } else {
        total_value / invested_capital
    }
}

/// Input for the fund performance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundPerformanceInput {
    /// Capital-call and distribution ledger for XIRR
    pub cash_flows: Vec<CashFlowEvent>,
    /// Capital account snapshot for the paid-in multiples
    pub capital: FundCapitalState,
}

/// Fund-level performance metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundPerformance {
    /// Annualised IRR over the dated cash flows
    pub irr: Rate,
    pub irr_converged: bool,
    pub tvpi: Multiple,
    pub dpi: Multiple,
    pub rvpi: Multiple,
    pub moic: Multiple,
}

/// Calculate fund performance: XIRR plus TVPI/DPI/RVPI/MOIC.
pub fn fund_performance(
    input: &FundPerformanceInput,
) -> VcAnalyticsResult<ComputationOutput<FundPerformance>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.capital.paid_in_capital < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "paid_in_capital".into(),
            reason: "Paid-in capital cannot be negative".into(),
        });
    }
    if input.capital.residual_value < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "residual_value".into(),
            reason: "Residual value cannot be negative".into(),
        });
    }
    if input.capital.total_distributions < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "total_distributions".into(),
            reason: "Total distributions cannot be negative".into(),
        });
    }

    if input.cash_flows.len() < 2 {
        warnings.push("XIRR requires at least 2 dated cash flows; reporting 0".into());
    }

    let irr_outcome = solve_xirr(&input.cash_flows);
    if input.cash_flows.len() >= 2 && !irr_outcome.converged {
        warnings.push(format!(
            "IRR did not converge after {} iterations; best guess reported",
            irr_outcome.iterations
        ));
    }

    // MOIC over total value (realised + unrealised) against paid-in capital
    let total_value = input.capital.total_distributions + input.capital.residual_value;
    let output = FundPerformance {
        irr: irr_outcome.rate,
        irr_converged: irr_outcome.converged,
        tvpi: tvpi(&input.capital),
        dpi: dpi(&input.capital),
        rvpi: rvpi(&input.capital),
        moic: moic(total_value, input.capital.paid_in_capital),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fund Performance: XIRR, TVPI, DPI, RVPI, MOIC",
        &serde_json::json!({
            "num_cash_flows": input.cash_flows.len(),
            "paid_in_capital": input.capital.paid_in_capital.to_string(),
            "residual_value": input.capital.residual_value.to_string(),
            "total_distributions": input.capital.total_distributions.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
