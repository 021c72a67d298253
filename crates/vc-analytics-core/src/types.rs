use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Multiples (e.g. 2.5x TVPI)
pub type Multiple = Decimal;

/// Direction of a fund cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowKind {
    /// Capital called from LPs (amount negative by convention)
    Call,
    /// Capital returned to LPs (amount positive by convention)
    Distribution,
}

/// A single dated fund cash flow.
///
/// Sign convention (assumed, not enforced): calls are negative — cash leaving
/// the investor — and distributions positive. Events may arrive in any order;
/// the IRR solver sorts by date before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowEvent {
    pub date: NaiveDate,
    pub amount: Money,
    pub kind: CashFlowKind,
    /// Portfolio company the flow relates to, where attributable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_ref: Option<String>,
}

/// Fund capital account snapshot used for the paid-in multiples.
///
/// A zero `paid_in_capital` is a valid degenerate state (e.g. a fund before
/// first close), not an error; ratios over it evaluate to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundCapitalState {
    pub paid_in_capital: Money,
    pub residual_value: Money,
    pub total_distributions: Money,
}

/// One period-pair of operating metrics for a portfolio company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyOperatingSnapshot {
    pub current_period_value: Money,
    pub prior_period_value: Money,
    pub cash_balance: Money,
    pub monthly_burn: Money,
    /// Customer lifetime value
    pub ltv: Money,
    /// Customer acquisition cost
    pub cac: Money,
}

/// A single position in the portfolio, weighted against the whole.
///
/// Weights across the full position set should sum to ≈1 for the
/// concentration and beta statistics to be meaningful; the engine trusts the
/// caller on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub identifier: String,
    pub invested_amount: Money,
    pub current_value: Money,
    pub beta: Decimal,
    /// Share of the portfolio, in [0, 1]
    pub weight: Decimal,
}

/// Market-level inputs for the Sharpe ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInputs {
    pub portfolio_return: Rate,
    pub risk_free_rate: Rate,
    pub volatility: Decimal,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
