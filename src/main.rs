//! hedgecalc binary
//!
//! Usage: cargo run
//! Inputs come from config/default.yaml, config/local.yaml and HEDGECALC__* env vars.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info};

use hedgecalc::config::{AppConfig, ReportFormat};
use hedgecalc::engine;
use hedgecalc::logging::init_logging;
use hedgecalc::report::Report;
use hedgecalc::AllocationError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(invalid) = e.downcast_ref::<AllocationError>() {
                eprintln!("Invalid inputs: {}", invalid);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cfg = AppConfig::load()?;
    init_logging(&cfg.logging).context("Failed to initialize logging")?;

    info!("Config: {}", cfg);

    let inputs = cfg.inputs();
    let result = engine::compute(&inputs)?;
    debug!(
        asset_units = result.asset_units,
        hedge_shares = result.hedge_shares,
        actual_total = result.actual_total_investment,
        "Allocation computed"
    );

    let ladder = engine::upside_ladder(&inputs, &cfg.report.upside_ladder)?;

    let report = Report::new(cfg.report.asset_label.clone(), inputs, result)
        .with_yes_share_price(cfg.calculator.yes_share_price)
        .with_upside_ladder(ladder);

    match cfg.report.format {
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
