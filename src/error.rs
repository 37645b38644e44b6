//! Unified crate error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Why a single quote was refused at rate table ingestion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteRejection {
    #[error("Missing currency code")]
    MissingCurrency,

    #[error("Price is not numeric: {0}")]
    NonNumericPrice(String),

    #[error("Price is not finite: {0}")]
    NonFinitePrice(f64),

    #[error("Price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("Price is outside the representable decimal range: {0}")]
    PriceOutOfRange(f64),
}

/// Submit-time checks on an amount pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairValidationError {
    #[error("Input currency is required")]
    MissingFromCurrency,

    #[error("Output currency is required")]
    MissingToCurrency,

    #[error("Input and output currency cannot be the same")]
    SameCurrency,

    #[error("Input amount is required")]
    MissingFromAmount,

    #[error("Output amount is required")]
    MissingToAmount,
}
