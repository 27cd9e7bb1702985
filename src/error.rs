// src/error.rs
//! Error type for the checked parts of the API.
//!
//! The operators and plain functions never fail: they report degenerate input
//! through NaN/Inf sentinels or a `false` result. The `try_*`/`checked_*`
//! variants and the configuration loader use [`NumericsError`] instead.

/// Errors that can occur in checked numeric operations
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("Square root of negative value: {value}")]
    NegativeSqrt { value: f64 },

    #[error("Non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T, E = NumericsError> = std::result::Result<T, E>;
