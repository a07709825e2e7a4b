//! Worst-case and best-case profit/loss.

use crate::types::{BestCase, WorstCase};

/// Asset falls to the target, No shares pay out.
pub fn worst_case(
    price_difference: f64,
    asset_units: f64,
    hedge_shares: f64,
    hedge_payoff: f64,
    actual_total_investment: f64,
) -> WorstCase {
    let asset_loss = price_difference * asset_units;
    let hedge_gain = hedge_shares * hedge_payoff;
    let net_profit = hedge_gain - asset_loss;
    WorstCase {
        asset_loss,
        hedge_gain,
        net_profit,
        roi: net_profit / actual_total_investment,
    }
}

/// Asset rises by `increase`, the hedge expires worthless.
pub fn best_case(
    asset_price: f64,
    increase: f64,
    asset_units: f64,
    hedge_cost: f64,
    actual_total_investment: f64,
) -> BestCase {
    let asset_gain = asset_price * increase * asset_units;
    let net_profit = asset_gain - hedge_cost;
    BestCase {
        increase,
        asset_gain,
        hedge_loss: hedge_cost,
        net_profit,
        roi: net_profit / actual_total_investment,
    }
}
