use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::VcAnalyticsError;
use crate::types::*;
use crate::VcAnalyticsResult;

/// Herfindahl-Hirschman Index: sum of squared position weights.
///
/// For weights summing to 1 the range is [1/n, 1]; a single dominant
/// position approaches 1.
pub fn herfindahl_index(positions: &[PortfolioPosition]) -> Decimal {
    positions.iter().map(|p| p.weight * p.weight).sum()
}

/// Sharpe ratio: excess return over volatility. Zero volatility yields zero.
pub fn sharpe_ratio(inputs: &RiskInputs) -> Decimal {
    if inputs.volatility.is_zero() {
        Decimal::ZERO
    } else {
        (inputs.portfolio_return - inputs.risk_free_rate) / inputs.volatility
    }
}

/// Weighted portfolio beta: a linear weighted average of caller-supplied
/// per-position betas, not a regression.
pub fn weighted_beta(positions: &[PortfolioPosition]) -> Decimal {
    positions.iter().map(|p| p.beta * p.weight).sum()
}

/// Combined share of the `k` heaviest positions (weights sorted descending,
/// first `k` summed).
pub fn top_weight_share(positions: &[PortfolioPosition], k: usize) -> Decimal {
    let mut weights: Vec<Decimal> = positions.iter().map(|p| p.weight).collect();
    weights.sort_by(|a, b| b.cmp(a));
    weights.iter().take(k).sum()
}

/// Input for the risk profile report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfileInput {
    pub positions: Vec<PortfolioPosition>,
    pub market: RiskInputs,
}

/// Portfolio concentration and risk statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Herfindahl-Hirschman Index of position weights
    pub hhi: Decimal,
    pub sharpe_ratio: Decimal,
    pub weighted_beta: Decimal,
    pub top1_share: Decimal,
    pub top3_share: Decimal,
    pub top5_share: Decimal,
}

/// Calculate the portfolio risk profile: concentration (HHI and top-k weight
/// shares), weighted beta, and Sharpe ratio.
///
/// Weights are validated to lie in [0, 1] individually; that they sum to ≈1
/// across the set remains the caller's responsibility.
pub fn risk_profile(input: &RiskProfileInput) -> VcAnalyticsResult<ComputationOutput<RiskProfile>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    for position in &input.positions {
        if position.weight < Decimal::ZERO || position.weight > Decimal::ONE {
            return Err(VcAnalyticsError::InvalidInput {
                field: "weight".into(),
                reason: format!(
                    "Weight for {} must be between 0 and 1",
                    position.identifier
                ),
            });
        }
        if position.invested_amount < Decimal::ZERO {
            return Err(VcAnalyticsError::InvalidInput {
                field: "invested_amount".into(),
                reason: format!(
                    "Invested amount for {} cannot be negative",
                    position.identifier
                ),
            });
        }
    }
    if input.market.volatility < Decimal::ZERO {
        return Err(VcAnalyticsError::InvalidInput {
            field: "volatility".into(),
            reason: "Volatility cannot be negative".into(),
        });
    }

    let output = RiskProfile {
        hhi: herfindahl_index(&input.positions),
        sharpe_ratio: sharpe_ratio(&input.market),
        weighted_beta: weighted_beta(&input.positions),
        top1_share: top_weight_share(&input.positions, 1),
        top3_share: top_weight_share(&input.positions, 3),
        top5_share: top_weight_share(&input.positions, 5),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Portfolio Risk: HHI, Sharpe, Weighted Beta, Top-k Concentration",
        &serde_json::json!({
            "num_positions": input.positions.len(),
            "portfolio_return": input.market.portfolio_return.to_string(),
            "risk_free_rate": input.market.risk_free_rate.to_string(),
            "volatility": input.market.volatility.to_string(),
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

    fn position(id: &str, beta: Decimal, weight: Decimal) -> PortfolioPosition {
        PortfolioPosition {
            identifier: id.to_string(),
            invested_amount: dec!(1_000_000),
            current_value: dec!(1_500_000),
            beta,
            weight,
        }
    }

    #[test]
    fn test_hhi_equal_weights_is_one_over_n() {
        let positions: Vec<PortfolioPosition> = (0..4)
            .map(|i| position(&format!("c{i}"), dec!(1), dec!(0.25)))
            .collect();
        assert_eq!(herfindahl_index(&positions), dec!(0.25));
    }

    #[test]
    fn test_hhi_dominant_position() {
        let positions = vec![
            position("whale", dec!(1), dec!(0.9)),
            position("minnow", dec!(1), dec!(0.1)),
        ];
        assert_eq!(herfindahl_index(&positions), dec!(0.82));
    }

    #[test]
    fn test_hhi_empty_portfolio() {
        assert_eq!(herfindahl_index(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_sharpe_ratio() {
        let inputs = RiskInputs {
            portfolio_return: dec!(0.18),
            risk_free_rate: dec!(0.03),
            volatility: dec!(0.25),
        };
        assert_eq!(sharpe_ratio(&inputs), dec!(0.6));
    }

    #[test]
    fn test_sharpe_zero_volatility() {
        let inputs = RiskInputs {
            portfolio_return: dec!(0.18),
            risk_free_rate: dec!(0.03),
            volatility: dec!(0),
        };
        assert_eq!(sharpe_ratio(&inputs), Decimal::ZERO);
    }

    #[test]
    fn test_weighted_beta() {
        let positions = vec![
            position("a", dec!(1.5), dec!(0.4)),
            position("b", dec!(0.8), dec!(0.6)),
        ];
        // 1.5 * 0.4 + 0.8 * 0.6 = 1.08
        assert_eq!(weighted_beta(&positions), dec!(1.08));
    }

    #[test]
    fn test_top_weight_shares() {
        let positions = vec![
            position("a", dec!(1), dec!(0.10)),
            position("b", dec!(1), dec!(0.40)),
            position("c", dec!(1), dec!(0.25)),
            position("d", dec!(1), dec!(0.15)),
            position("e", dec!(1), dec!(0.05)),
            position("f", dec!(1), dec!(0.05)),
        ];
        assert_eq!(top_weight_share(&positions, 1), dec!(0.40));
        assert_eq!(top_weight_share(&positions, 3), dec!(0.80));
        assert_eq!(top_weight_share(&positions, 5), dec!(0.95));
    }

    #[test]
    fn test_top_share_fewer_positions_than_k() {
        let positions = vec![position("only", dec!(1), dec!(1))];
        assert_eq!(top_weight_share(&positions, 5), dec!(1));
    }

    #[test]
    fn test_risk_profile_report() {
        let input = RiskProfileInput {
            positions: vec![
                position("a", dec!(1.2), dec!(0.5)),
                position("b", dec!(0.9), dec!(0.3)),
                position("c", dec!(1.0), dec!(0.2)),
            ],
            market: RiskInputs {
                portfolio_return: dec!(0.15),
                risk_free_rate: dec!(0.05),
                volatility: dec!(0.20),
            },
        };
        let result = risk_profile(&input).unwrap();
        let profile = &result.result;

        // 0.25 + 0.09 + 0.04 = 0.38
        assert_eq!(profile.hhi, dec!(0.38));
        assert_eq!(profile.sharpe_ratio, dec!(0.5));
        // 1.2*0.5 + 0.9*0.3 + 1.0*0.2 = 1.07
        assert_eq!(profile.weighted_beta, dec!(1.07));
        assert_eq!(profile.top1_share, dec!(0.5));
        assert_eq!(profile.top3_share, dec!(1.0));
        assert_eq!(profile.top5_share, dec!(1.0));
    }

    #[test]
    fn test_risk_profile_rejects_out_of_range_weight() {
        let input = RiskProfileInput {
            positions: vec![position("bad", dec!(1), dec!(1.5))],
            market: RiskInputs {
                portfolio_return: dec!(0.1),
                risk_free_rate: dec!(0.02),
                volatility: dec!(0.2),
            },
        };
        assert!(risk_profile(&input).is_err());
    }
}
