use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{CashFlowEvent, Money, Rate};

const INITIAL_GUESS: Decimal = dec!(0.10);
const MAX_ITERATIONS: u32 = 100;
/// Newton step is not trusted below this derivative magnitude
const DERIVATIVE_FLOOR: Decimal = dec!(0.000000000001);
const STEP_TOLERANCE: Decimal = dec!(0.00000001);
const DAYS_PER_YEAR: Decimal = dec!(365);

/// Result of an XIRR solve.
///
/// The solver always produces a rate, even when Newton-Raphson did not
/// numerically converge; `converged` tells the two cases apart so callers can
/// decide how much to trust the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrrOutcome {
    /// Annualised internal rate of return (0.10 = 10%)
    pub rate: Rate,
    pub converged: bool,
    pub iterations: u32,
}

impl IrrOutcome {
    fn degenerate() -> Self {
        IrrOutcome {
            rate: Decimal::ZERO,
            converged: false,
            iterations: 0,
        }
    }
}

/// Annualised IRR over irregularly dated cash flows (XIRR) via
/// Newton-Raphson on the NPV function.
///
/// Day-count fractions are days-from-earliest / 365. Fewer than two events
/// yields a rate of zero. Never errors: on an ill-conditioned derivative or
/// iteration exhaustion the current guess is returned with
/// `converged == false`.
pub fn solve_xirr(events: &[CashFlowEvent]) -> IrrOutcome {
    if events.len() < 2 {
        return IrrOutcome::degenerate();
    }

    let mut dated: Vec<(NaiveDate, Money)> =
        events.iter().map(|ev| (ev.date, ev.amount)).collect();
    dated.sort_by_key(|(date, _)| *date);

    let t0 = dated[0].0;
    let year_fractions: Vec<Decimal> = dated
        .iter()
        .map(|(date, _)| Decimal::from((*date - t0).num_days()) / DAYS_PER_YEAR)
        .collect();

    let mut rate = INITIAL_GUESS;

    for i in 0..MAX_ITERATIONS {
        let one_plus_r = Decimal::ONE + rate;
        if one_plus_r <= Decimal::ZERO {
            // powd is undefined at or below a zero base; nothing sensible
            // remains to iterate on
            return IrrOutcome {
                rate,
                converged: false,
                iterations: i,
            };
        }

        let mut npv = Decimal::ZERO;
        let mut dnpv = Decimal::ZERO;

        for ((_, amount), years) in dated.iter().zip(&year_fractions) {
            let discount = one_plus_r.powd(*years);
            if discount.is_zero() {
                continue;
            }
            npv += amount / discount;
            dnpv -= years * amount / (one_plus_r * discount);
        }

        if dnpv.abs() < DERIVATIVE_FLOOR {
            return IrrOutcome {
                rate,
                converged: false,
                iterations: i,
            };
        }

        let next = rate - npv / dnpv;

        if (next - rate).abs() < STEP_TOLERANCE {
            return IrrOutcome {
                rate: next,
                converged: true,
                iterations: i + 1,
            };
        }

        rate = next;
    }

    IrrOutcome {
        rate,
        converged: false,
        iterations: MAX_ITERATIONS,
    }
}
