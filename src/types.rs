//! Core types used by the allocation engine
//!
//! Inputs are a plain immutable record; results are computed fresh on every
//! call and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Default best-case upside (2% asset price increase)
pub const DEFAULT_UPSIDE_INCREASE: f64 = 0.02;

/// Market and user parameters for one allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeInputs {
    /// Current price of the underlying asset
    pub asset_price: f64,
    /// Downside price level the hedge should cover
    pub target_price: f64,
    /// Leverage on the asset purchase only (>= 1)
    pub leverage: f64,
    /// Quoted No share price (0 - 1)
    pub no_share_price: f64,
    /// Fractional markup on the No share price (e.g., 0.01 = 1%)
    pub slippage: f64,
    /// Capital to split between the two legs
    pub total_investment: f64,
    /// Asset price increase used for the best case (e.g., 0.02 = 2%)
    pub upside_increase: f64,
}

impl Default for HedgeInputs {
    fn default() -> Self {
        Self {
            asset_price: 66305.80,
            target_price: 65000.0,
            leverage: 1.0,
            no_share_price: 0.28,
            slippage: 0.0,
            total_investment: 100_000.0,
            upside_increase: DEFAULT_UPSIDE_INCREASE,
        }
    }
}

impl HedgeInputs {
    pub fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = leverage;
        self
    }

    pub fn with_target_price(mut self, target_price: f64) -> Self {
        self.target_price = target_price;
        self
    }

    pub fn with_slippage(mut self, slippage: f64) -> Self {
        self.slippage = slippage;
        self
    }

    pub fn with_upside_increase(mut self, upside_increase: f64) -> Self {
        self.upside_increase = upside_increase;
        self
    }
}

/// Outcome if the asset falls to the target price and the No share pays $1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorstCase {
    pub asset_loss: f64,
    pub hedge_gain: f64,
    pub net_profit: f64,
    pub roi: f64,
}

/// Outcome if the asset rises by the upside increase and the hedge expires worthless
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestCase {
    /// Upside increase this scenario was evaluated at
    pub increase: f64,
    pub asset_gain: f64,
    pub hedge_loss: f64,
    pub net_profit: f64,
    pub roi: f64,
}

/// Full allocation between the leveraged asset leg and the No share hedge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Asset price the allocation was sized at
    pub asset_price: f64,
    pub price_difference: f64,
    pub adjusted_hedge_price: f64,
    /// Per-share gain if the No share resolves at $1
    pub hedge_payoff: f64,
    pub asset_budget: f64,
    pub hedge_budget: f64,
    pub asset_units: f64,
    pub hedge_shares: f64,
    pub asset_cost: f64,
    pub hedge_cost: f64,
    pub actual_total_investment: f64,
    /// Fractional asset price rise whose gain equals the hedge cost
    pub break_even_increase: f64,
    pub worst_case: WorstCase,
    pub best_case: BestCase,
}
