//! No share hedge sizing.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeQuote {
    /// Shares whose payoff offsets the asset loss down to the target
    pub coverage_shares: f64,
    /// Shares affordable with the hedge budget
    pub affordable_shares: f64,
    /// min(coverage, affordable), floored at zero
    pub shares: f64,
}

pub fn adjusted_hedge_price(no_share_price: f64, slippage: f64) -> f64 {
    no_share_price * (1.0 + slippage)
}

/// Per-share gain when the No share resolves at $1.
pub fn hedge_payoff(adjusted_price: f64) -> f64 {
    1.0 - adjusted_price
}

/// Size the hedge: full coverage of the drop to target, capped by budget.
///
/// Callers must reject `payoff <= 0` and `adjusted_price <= 0` beforehand.
/// A target at or above the current price needs no hedge, so a
/// non-positive coverage term yields zero shares.
pub fn size_hedge(
    price_difference: f64,
    asset_units: f64,
    payoff: f64,
    hedge_budget: f64,
    adjusted_price: f64,
) -> HedgeQuote {
    let coverage_shares = price_difference * asset_units / payoff;
    let affordable_shares = hedge_budget / adjusted_price;
    let shares = coverage_shares.min(affordable_shares).max(0.0);

    if coverage_shares <= 0.0 {
        debug!(
            price_difference,
            coverage_shares, "Target at or above asset price, no hedge needed"
        );
    } else if affordable_shares < coverage_shares {
        debug!(
            coverage_shares,
            affordable_shares, "Hedge capped by budget, partial coverage"
        );
    }

    HedgeQuote {
        coverage_shares,
        affordable_shares,
        shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slippage_marks_up_price() {
        let p = adjusted_hedge_price(0.28, 0.05);
        assert!((p - 0.294).abs() < 1e-12);
        assert!((hedge_payoff(p) - 0.706).abs() < 1e-12);
    }

    #[test]
    fn coverage_wins_when_budget_is_ample() {
        let q = size_hedge(1000.0, 1.0, 0.5, 10_000.0, 0.5);
        assert_eq!(q.coverage_shares, 2000.0);
        assert_eq!(q.affordable_shares, 20_000.0);
        assert_eq!(q.shares, 2000.0);
    }

    #[test]
    fn budget_caps_coverage() {
        let q = size_hedge(1000.0, 10.0, 0.5, 1_000.0, 0.5);
        assert_eq!(q.coverage_shares, 20_000.0);
        assert_eq!(q.shares, 2_000.0);
    }

    #[test]
    fn target_above_price_buys_nothing() {
        let q = size_hedge(-500.0, 1.0, 0.7, 10_000.0, 0.3);
        assert!(q.coverage_shares < 0.0);
        assert_eq!(q.shares, 0.0);

        let flat = size_hedge(0.0, 1.0, 0.7, 10_000.0, 0.3);
        assert_eq!(flat.shares, 0.0);
    }
}
