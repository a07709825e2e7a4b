//! hedgecalc Library
//!
//! Sizes a leveraged long position against prediction-market No shares and
//! reports worst-case and best-case profit/loss.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;
pub mod types;

pub use engine::{compute, upside_ladder};
pub use error::AllocationError;
pub use types::{AllocationResult, BestCase, HedgeInputs, WorstCase};
