//! Error types for the allocation engine.

use thiserror::Error;

/// Result type alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Precondition failures detected before any derived field is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// Leverage below 1 (zero included).
    #[error("Invalid leverage: {leverage} (must be >= 1)")]
    InvalidLeverage { leverage: f64 },

    /// Adjusted No-share price outside the open interval (0, 1).
    #[error("Invalid hedge price: adjusted No share price {adjusted_price} must be between 0 and 1 (exclusive)")]
    InvalidHedgePrice { adjusted_price: f64 },

    /// Non-positive investment amount or asset price.
    #[error("Invalid budget: {field} = {value} (must be > 0)")]
    InvalidBudget { field: &'static str, value: f64 },

    /// NaN or infinite input.
    #[error("Input {field} is not a finite number")]
    NonFiniteInput { field: &'static str },

    /// Derived quantity overflowed or became undefined.
    #[error("Result {field} is not a finite number (inputs out of range)")]
    NonFiniteResult { field: &'static str },

    /// Negative upside increase for the best-case scenario.
    #[error("Invalid upside increase: {increase} (must be >= 0)")]
    InvalidUpside { increase: f64 },
}

impl AllocationError {
    pub fn invalid_budget(field: &'static str, value: f64) -> Self {
        Self::InvalidBudget { field, value }
    }

    pub fn non_finite(field: &'static str) -> Self {
        Self::NonFiniteInput { field }
    }
}
