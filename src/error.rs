//! Error types for the sales tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building items, loading
//! fixture receipts, and rendering receipts.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the sales tax engine.
///
/// # Example
///
/// ```
/// use sales_tax::error::TaxError;
///
/// let error = TaxError::UnknownCategory {
///     label: "jewellery".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown item category: jewellery");
/// ```
#[derive(Debug, Error)]
pub enum TaxError {
    /// An item was given a price below zero.
    #[error("Invalid price for item '{item}': {price} is negative")]
    NegativePrice {
        /// The name of the rejected item.
        item: String,
        /// The rejected price.
        price: Decimal,
    },

    /// An item was given a price above the supported maximum.
    #[error("Invalid price for item '{item}': {price} exceeds the maximum of {max}")]
    PriceTooLarge {
        /// The name of the rejected item.
        item: String,
        /// The rejected price.
        price: Decimal,
        /// The largest accepted price.
        max: Decimal,
    },

    /// A category label did not match any known category.
    #[error("Unknown item category: {label}")]
    UnknownCategory {
        /// The label that could not be parsed.
        label: String,
    },

    /// The fixture document could not be parsed.
    #[error("Failed to parse receipt fixtures: {message}")]
    FixtureParseError {
        /// A description of the parse error.
        message: String,
    },

    /// No fixture receipt exists with the requested name.
    #[error("Receipt fixture not found: {name}")]
    FixtureNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Writing a rendered receipt to its sink failed.
    #[error("Failed to write receipt: {0}")]
    Output(#[from] std::io::Error),
}

/// A type alias for Results that return TaxError.
pub type TaxResult<T> = Result<T, TaxError>;
