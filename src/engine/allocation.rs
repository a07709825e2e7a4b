//! Capital split between the leveraged asset leg and the hedge leg.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapitalSplit {
    pub asset_budget: f64,
    pub hedge_budget: f64,
}

/// Split `total_investment` so the asset leg gets `leverage / (leverage + 1)`
/// of the capital. Depends on leverage only, never on prices.
pub fn split_budget(total_investment: f64, leverage: f64) -> CapitalSplit {
    let asset_budget = total_investment / (1.0 + (1.0 / leverage));
    CapitalSplit {
        asset_budget,
        hedge_budget: total_investment - asset_budget,
    }
}

/// Margin required per asset unit at the given leverage.
pub fn margin_per_unit(asset_price: f64, leverage: f64) -> f64 {
    asset_price / leverage
}

/// Leveraged unit count purchasable with `asset_budget`.
pub fn asset_units(asset_budget: f64, asset_price: f64, leverage: f64) -> f64 {
    asset_budget / margin_per_unit(asset_price, leverage)
}
