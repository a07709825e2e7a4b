//! Result rendering
//!
//! Text mirrors the calculator's results panel: units to 4 decimals, money
//! and share counts to 2 decimals, ratios as percentages.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;

use crate::types::{AllocationResult, BestCase, HedgeInputs};

/// Everything a rendered report needs
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub asset_label: String,
    pub inputs: HedgeInputs,
    /// Informational only
    pub yes_share_price: Option<f64>,
    pub result: AllocationResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub upside_ladder: Vec<BestCase>,
}

impl Report {
    pub fn new(
        asset_label: impl Into<String>,
        inputs: HedgeInputs,
        result: AllocationResult,
    ) -> Self {
        Self {
            asset_label: asset_label.into(),
            inputs,
            yes_share_price: None,
            result,
            upside_ladder: Vec::new(),
        }
    }

    pub fn with_yes_share_price(mut self, price: f64) -> Self {
        self.yes_share_price = Some(price);
        self
    }

    pub fn with_upside_ladder(mut self, ladder: Vec<BestCase>) -> Self {
        self.upside_ladder = ladder;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    fn write_best_case(&self, f: &mut fmt::Formatter<'_>, best: &BestCase) -> fmt::Result {
        let a = &self.asset_label;
        writeln!(
            f,
            "Best Case Scenario ({} {} price increase):",
            pct(best.increase),
            a
        )?;
        writeln!(f, "  {} Gain: {}", a, usd(best.asset_gain))?;
        writeln!(f, "  \"No\" Shares Loss: {}", usd(best.hedge_loss))?;
        writeln!(f, "  Net Profit: {}", usd(best.net_profit))?;
        writeln!(f, "  ROI: {}", pct(best.roi))
    }
}

fn usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

fn pct(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.asset_label;
        let i = &self.inputs;
        let r = &self.result;

        writeln!(f, "{} Investment Strategy Calculator", a)?;
        writeln!(
            f,
            "{} price {} | target {} | leverage {}x",
            a,
            usd(i.asset_price),
            usd(i.target_price),
            i.leverage
        )?;
        match self.yes_share_price {
            Some(yes) => writeln!(
                f,
                "\"Yes\" {:.4} (not used) | \"No\" {:.4} | slippage {}",
                yes,
                i.no_share_price,
                pct(i.slippage)
            )?,
            None => writeln!(
                f,
                "\"No\" {:.4} | slippage {}",
                i.no_share_price,
                pct(i.slippage)
            )?,
        }
        writeln!(f, "Total investment: {}", usd(i.total_investment))?;
        writeln!(f)?;

        writeln!(f, "Results:")?;
        writeln!(f, "  {} Units: {:.4}", a, r.asset_units)?;
        writeln!(f, "  Optimal \"No\" Shares: {:.2}", r.hedge_shares)?;
        writeln!(f, "  {} Cost: {}", a, usd(r.asset_cost))?;
        writeln!(f, "  \"No\" Shares Cost: {}", usd(r.hedge_cost))?;
        writeln!(
            f,
            "  Actual Total Investment: {}",
            usd(r.actual_total_investment)
        )?;
        writeln!(f, "  Break-even Increase: {}", pct(r.break_even_increase))?;
        writeln!(f)?;

        writeln!(f, "Worst Case Scenario ({} falls to target price):", a)?;
        writeln!(f, "  {} Loss: {}", a, usd(r.worst_case.asset_loss))?;
        writeln!(f, "  \"No\" Shares Gain: {}", usd(r.worst_case.hedge_gain))?;
        writeln!(f, "  Net Profit: {}", usd(r.worst_case.net_profit))?;
        writeln!(f, "  ROI: {}", pct(r.worst_case.roi))?;
        writeln!(f)?;

        self.write_best_case(f, &r.best_case)?;
        for best in &self.upside_ladder {
            writeln!(f)?;
            self.write_best_case(f, best)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    fn default_report() -> Report {
        let inputs = HedgeInputs::default();
        let result = engine::compute(&inputs).unwrap();
        Report::new("COIN", inputs, result)
    }

    #[test]
    fn money_and_percent_formatting() {
        assert_eq!(usd(1234.5), "$1234.50");
        assert_eq!(usd(-0.126), "-$0.13");
        assert_eq!(pct(0.02), "2.00%");
        assert_eq!(pct(-0.0123), "-1.23%");
    }

    #[test]
    fn text_report_has_every_section() {
        let text = default_report().with_yes_share_price(0.81).to_string();
        assert!(text.contains("COIN Units: 0.7541"));
        assert!(text.contains("Actual Total Investment: $"));
        assert!(text.contains("Worst Case Scenario (COIN falls to target price):"));
        assert!(text.contains("Best Case Scenario (2.00% COIN price increase):"));
        assert!(text.contains("\"Yes\" 0.8100 (not used)"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn ladder_appends_best_cases() {
        let inputs = HedgeInputs::default();
        let ladder = engine::upside_ladder(&inputs, &[0.05]).unwrap();
        let text = default_report().with_upside_ladder(ladder).to_string();
        assert!(text.contains("Best Case Scenario (5.00% COIN price increase):"));
    }

    #[test]
    fn json_report_nests_result() {
        let report = default_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["asset_label"], "COIN");
        assert!(value.get("upside_ladder").is_none());
        let units = value["result"]["asset_units"].as_f64().unwrap();
        assert!((units - report.result.asset_units).abs() < 1e-12);
        assert!(value["result"]["worst_case"]["roi"].is_f64());
        assert!(value["result"]["best_case"]["increase"].is_f64());
    }
}
