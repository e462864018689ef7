//! Calculation logic for the sales tax engine.
//!
//! This module contains the tax rounding rule, per-item sales tax and import
//! duty derivation, category classification, and receipt accumulation.

mod classification;
mod item_tax;
mod receipt_totals;
mod rounding;

pub use classification::classify;
pub use item_tax::{
    ItemTaxResult, TaxBreakdown, basic_sales_tax_rate, calculate_item_tax, import_tax,
    import_tax_rate, price_including_tax, sales_tax,
};
pub use receipt_totals::calculate_receipt;
pub use rounding::{TaxRounding, round_tax, rounding_increment};
