//! Allocation engine
//!
//! Splits a fixed budget between a leveraged long position in an asset and
//! No shares of a prediction market that pay out if the asset drops to a
//! target price, then evaluates both legs under a downside and an upside
//! scenario.
//!
//! Every call is a single pass of arithmetic over an immutable
//! [`HedgeInputs`]. Inputs that would otherwise produce NaN or Infinity are
//! rejected up front with an [`AllocationError`], and results that still
//! overflow are rejected before they are returned.

pub mod allocation;
pub mod hedge;
pub mod scenario;

pub use allocation::{asset_units, split_budget, CapitalSplit};
pub use hedge::{adjusted_hedge_price, hedge_payoff, size_hedge, HedgeQuote};
pub use scenario::{best_case, worst_case};

use crate::error::{AllocationError, Result};
use crate::types::{AllocationResult, BestCase, HedgeInputs};

/// Check every precondition before any derived field is computed.
pub fn validate(inputs: &HedgeInputs) -> Result<()> {
    let fields = [
        ("asset_price", inputs.asset_price),
        ("target_price", inputs.target_price),
        ("leverage", inputs.leverage),
        ("no_share_price", inputs.no_share_price),
        ("slippage", inputs.slippage),
        ("total_investment", inputs.total_investment),
        ("upside_increase", inputs.upside_increase),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(AllocationError::non_finite(field));
        }
    }

    if inputs.leverage < 1.0 {
        return Err(AllocationError::InvalidLeverage {
            leverage: inputs.leverage,
        });
    }
    if inputs.total_investment <= 0.0 {
        return Err(AllocationError::invalid_budget(
            "total_investment",
            inputs.total_investment,
        ));
    }
    if inputs.asset_price <= 0.0 {
        return Err(AllocationError::invalid_budget(
            "asset_price",
            inputs.asset_price,
        ));
    }
    if inputs.target_price <= 0.0 {
        return Err(AllocationError::invalid_budget(
            "target_price",
            inputs.target_price,
        ));
    }

    let adjusted_price = adjusted_hedge_price(inputs.no_share_price, inputs.slippage);
    if !adjusted_price.is_finite() || adjusted_price <= 0.0 || adjusted_price >= 1.0 {
        return Err(AllocationError::InvalidHedgePrice { adjusted_price });
    }

    validate_upside(inputs.upside_increase)
}

fn validate_upside(increase: f64) -> Result<()> {
    if !increase.is_finite() {
        return Err(AllocationError::non_finite("upside_increase"));
    }
    if increase < 0.0 {
        return Err(AllocationError::InvalidUpside { increase });
    }
    Ok(())
}

/// Reject results that overflowed or went undefined despite valid inputs.
fn check_finite(result: &AllocationResult) -> Result<()> {
    let fields = [
        ("price_difference", result.price_difference),
        ("asset_budget", result.asset_budget),
        ("hedge_budget", result.hedge_budget),
        ("asset_units", result.asset_units),
        ("hedge_shares", result.hedge_shares),
        ("asset_cost", result.asset_cost),
        ("hedge_cost", result.hedge_cost),
        ("actual_total_investment", result.actual_total_investment),
        ("break_even_increase", result.break_even_increase),
        ("worst_case.asset_loss", result.worst_case.asset_loss),
        ("worst_case.hedge_gain", result.worst_case.hedge_gain),
        ("worst_case.net_profit", result.worst_case.net_profit),
        ("worst_case.roi", result.worst_case.roi),
        ("best_case.asset_gain", result.best_case.asset_gain),
        ("best_case.net_profit", result.best_case.net_profit),
        ("best_case.roi", result.best_case.roi),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(AllocationError::NonFiniteResult { field });
        }
    }
    Ok(())
}

/// Compute the allocation and both scenarios for `inputs`.
pub fn compute(inputs: &HedgeInputs) -> Result<AllocationResult> {
    validate(inputs)?;

    let price_difference = inputs.asset_price - inputs.target_price;
    let adjusted_price = adjusted_hedge_price(inputs.no_share_price, inputs.slippage);
    let payoff = hedge_payoff(adjusted_price);

    let split = split_budget(inputs.total_investment, inputs.leverage);
    let units = asset_units(split.asset_budget, inputs.asset_price, inputs.leverage);

    let hedge = size_hedge(
        price_difference,
        units,
        payoff,
        split.hedge_budget,
        adjusted_price,
    );

    let asset_cost = units * allocation::margin_per_unit(inputs.asset_price, inputs.leverage);
    let hedge_cost = hedge.shares * adjusted_price;
    let actual_total_investment = asset_cost + hedge_cost;

    let break_even_increase = hedge_cost / (units * inputs.asset_price);

    let worst = worst_case(
        price_difference,
        units,
        hedge.shares,
        payoff,
        actual_total_investment,
    );
    let best = best_case(
        inputs.asset_price,
        inputs.upside_increase,
        units,
        hedge_cost,
        actual_total_investment,
    );

    let result = AllocationResult {
        asset_price: inputs.asset_price,
        price_difference,
        adjusted_hedge_price: adjusted_price,
        hedge_payoff: payoff,
        asset_budget: split.asset_budget,
        hedge_budget: split.hedge_budget,
        asset_units: units,
        hedge_shares: hedge.shares,
        asset_cost,
        hedge_cost,
        actual_total_investment,
        break_even_increase,
        worst_case: worst,
        best_case: best,
    };
    check_finite(&result)?;
    Ok(result)
}

/// Re-evaluate the best case of an existing allocation at another upside.
pub fn best_case_at(result: &AllocationResult, increase: f64) -> Result<BestCase> {
    validate_upside(increase)?;
    let best = best_case(
        result.asset_price,
        increase,
        result.asset_units,
        result.hedge_cost,
        result.actual_total_investment,
    );
    if !best.asset_gain.is_finite() {
        return Err(AllocationError::NonFiniteResult {
            field: "best_case.asset_gain",
        });
    }
    if !best.roi.is_finite() {
        return Err(AllocationError::NonFiniteResult {
            field: "best_case.roi",
        });
    }
    Ok(best)
}

/// Best case for each upside in `increases`, all from one allocation.
pub fn upside_ladder(inputs: &HedgeInputs, increases: &[f64]) -> Result<Vec<BestCase>> {
    let result = compute(inputs)?;
    increases
        .iter()
        .map(|&increase| best_case_at(&result, increase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_are_valid() {
        assert!(validate(&HedgeInputs::default()).is_ok());
    }

    #[test]
    fn rejects_zero_and_fractional_leverage() {
        for leverage in [0.0, 0.5, -2.0] {
            let inputs = HedgeInputs::default().with_leverage(leverage);
            assert_eq!(
                compute(&inputs),
                Err(AllocationError::InvalidLeverage { leverage })
            );
        }
    }

    #[test]
    fn rejects_hedge_price_at_or_above_one() {
        let inputs = HedgeInputs {
            no_share_price: 0.8,
            slippage: 0.25,
            ..HedgeInputs::default()
        };
        assert!(matches!(
            compute(&inputs),
            Err(AllocationError::InvalidHedgePrice { .. })
        ));

        let inputs = HedgeInputs {
            no_share_price: 1.2,
            ..HedgeInputs::default()
        };
        assert!(matches!(
            compute(&inputs),
            Err(AllocationError::InvalidHedgePrice { .. })
        ));
    }

    #[test]
    fn rejects_free_hedge() {
        let inputs = HedgeInputs {
            no_share_price: 0.0,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::InvalidHedgePrice {
                adjusted_price: 0.0
            })
        );
    }

    #[test]
    fn rejects_non_positive_budget_and_price() {
        let inputs = HedgeInputs {
            total_investment: 0.0,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::invalid_budget("total_investment", 0.0))
        );

        let inputs = HedgeInputs {
            asset_price: -1.0,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::invalid_budget("asset_price", -1.0))
        );
    }

    #[test]
    fn rejects_nan_inputs() {
        let inputs = HedgeInputs {
            slippage: f64::NAN,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::non_finite("slippage"))
        );
    }

    #[test]
    fn rejects_negative_upside() {
        let inputs = HedgeInputs::default().with_upside_increase(-0.01);
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::InvalidUpside { increase: -0.01 })
        );
    }

    #[test]
    fn rejects_non_positive_target() {
        for target_price in [0.0, -100.0] {
            let inputs = HedgeInputs::default().with_target_price(target_price);
            assert_eq!(
                compute(&inputs),
                Err(AllocationError::invalid_budget("target_price", target_price))
            );
        }
    }

    #[test]
    fn overflowing_asset_loss_is_an_error() {
        let inputs = HedgeInputs {
            asset_price: 1e10,
            target_price: 1.0,
            leverage: 1e10,
            total_investment: 1e300,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::NonFiniteResult {
                field: "worst_case.asset_loss"
            })
        );

        // Negative target is rejected before any arithmetic
        let inputs = HedgeInputs {
            asset_price: 1.5e308,
            target_price: -1.5e308,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::invalid_budget("target_price", -1.5e308))
        );
    }

    #[test]
    fn extreme_leverage_is_an_error() {
        let inputs = HedgeInputs {
            asset_price: 1.0,
            target_price: 0.5,
            leverage: 1e308,
            ..HedgeInputs::default()
        };
        assert_eq!(
            compute(&inputs),
            Err(AllocationError::NonFiniteResult {
                field: "asset_units"
            })
        );
    }

    #[test]
    fn best_case_at_uses_sizing_price() {
        let base = compute(&HedgeInputs::default()).unwrap();
        let best = best_case_at(&base, base.best_case.increase).unwrap();
        assert_eq!(base.asset_price, 66305.80);
        assert_eq!(best, base.best_case);
        assert!(best_case_at(&base, 1e308).is_err());
    }

    #[test]
    fn ladder_keeps_allocation_fixed() {
        let inputs = HedgeInputs::default();
        let ladder = upside_ladder(&inputs, &[0.0, 0.02, 0.05]).unwrap();
        let base = compute(&inputs).unwrap();

        assert_eq!(ladder.len(), 3);
        assert_eq!(ladder[1], base.best_case);
        assert_eq!(ladder[0].asset_gain, 0.0);
        assert_eq!(ladder[0].net_profit, -base.hedge_cost);
        assert!(ladder[2].net_profit > ladder[1].net_profit);
        assert!(ladder.iter().all(|b| b.hedge_loss == base.hedge_cost));
    }
}
