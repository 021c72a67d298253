use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::VcAnalyticsError;
use crate::types::*;
use crate::VcAnalyticsResult;

/// Reported runway when a company has no burn. The dashboard treats this as
/// "effectively infinite"; it is a deliberate sentinel, not a cap.
pub const RUNWAY_NO_BURN: Decimal = dec!(999);

/// Period-over-period growth rate. Zero prior value yields zero.
pub fn growth_rate(current: Money, prior: Money) -> Rate {
    if prior.is_zero() {
        Decimal::ZERO
    } else {
        (current - prior) / prior
    }
}

/// Customer lifetime value over acquisition cost. Zero CAC yields zero.
pub fn ltv_to_cac(ltv: Money, cac: Money) -> Multiple {
    if cac.is_zero() {
        Decimal::ZERO
    } else {
        ltv / cac
    }
}

/// Months of cash remaining at the current burn rate.
/// Zero burn yields [`RUNWAY_NO_BURN`] regardless of the balance.
pub fn runway_months(cash_balance: Money, monthly_burn: Money) -> Decimal {
    if monthly_burn.is_zero() {
        RUNWAY_NO_BURN
    } else {
        cash_balance / monthly_burn
    }
}

/// Per-company operating metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyMetrics {
    pub growth_rate: Rate,
    pub ltv_to_cac: Multiple,
    pub runway_months: Decimal,
}

/// Calculate operating metrics for one portfolio company snapshot.
pub fn company_metrics(
    snapshot: &CompanyOperatingSnapshot,
) -> VcAnalyticsResult<ComputationOutput<CompanyMetrics>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if snapshot.monthly_burn < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "monthly_burn".into(),
            reason: "Monthly burn cannot be negative".into(),
        });
    }
    if snapshot.cac < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "cac".into(),
            reason: "Customer acquisition cost cannot be negative".into(),
        });
    }

    let output = CompanyMetrics {
        growth_rate: growth_rate(snapshot.current_period_value, snapshot.prior_period_value),
        ltv_to_cac: ltv_to_cac(snapshot.ltv, snapshot.cac),
        runway_months: runway_months(snapshot.cash_balance, snapshot.monthly_burn),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Company Operating Metrics: Growth, LTV:CAC, Runway",
        &serde_json::json!({
            "current_period_value": snapshot.current_period_value.to_string(),
            "prior_period_value": snapshot.prior_period_value.to_string(),
            "monthly_burn": snapshot.monthly_burn.to_string(),
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
    fn test_growth_rate() {
        // 1.2M from 1.0M = 20% growth
        assert_eq!(growth_rate(dec!(1_200_000), dec!(1_000_000)), dec!(0.2));
        // Shrinking revenue is negative growth
        assert_eq!(growth_rate(dec!(800_000), dec!(1_000_000)), dec!(-0.2));
        // No prior period
        assert_eq!(growth_rate(dec!(500_000), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_ltv_to_cac() {
        assert_eq!(ltv_to_cac(dec!(3000), dec!(1000)), dec!(3));
        assert_eq!(ltv_to_cac(dec!(3000), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_runway() {
        assert_eq!(runway_months(dec!(2_400_000), dec!(200_000)), dec!(12));
    }

    #[test]
    fn test_runway_no_burn_sentinel() {
        // Sentinel holds whatever the balance is
        assert_eq!(runway_months(dec!(5_000_000), dec!(0)), dec!(999));
        assert_eq!(runway_months(dec!(0), dec!(0)), dec!(999));
    }

    #[test]
    fn test_company_metrics_report() {
        let snapshot = CompanyOperatingSnapshot {
            current_period_value: dec!(1_500_000),
            prior_period_value: dec!(1_000_000),
            cash_balance: dec!(3_600_000),
            monthly_burn: dec!(300_000),
            ltv: dec!(4500),
            cac: dec!(1500),
        };
        let result = company_metrics(&snapshot).unwrap();
        let m = &result.result;
        assert_eq!(m.growth_rate, dec!(0.5));
        assert_eq!(m.ltv_to_cac, dec!(3));
        assert_eq!(m.runway_months, dec!(12));
    }

    #[test]
    fn test_company_metrics_rejects_negative_burn() {
        let snapshot = CompanyOperatingSnapshot {
            current_period_value: dec!(100),
            prior_period_value: dec!(100),
            cash_balance: dec!(100),
            monthly_burn: dec!(-1),
            ltv: dec!(0),
            cac: dec!(0),
        };
        assert!(company_metrics(&snapshot).is_err());
    }
}
