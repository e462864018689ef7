//! Receipt result models.
//!
//! This module contains the [`ReceiptResult`] type and its associated
//! structures that capture all outputs of a receipt calculation, including
//! the per-item lines, the summary amounts, and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a tax decision.
///
/// Each step captures the input, output, and reasoning for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a receipt calculation.
///
/// # Example
///
/// ```
/// use sales_tax::models::AuditTrace;
///
/// let trace = AuditTrace { steps: vec![] };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps, one per item.
    pub steps: Vec<AuditStep>,
}

/// One printed line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// The item name.
    pub name: String,
    /// The pre-tax price.
    pub price: Decimal,
    /// The price including rounded tax.
    pub price_including_tax: Decimal,
}

/// The result of calculating a receipt.
///
/// # Example
///
/// ```
/// use sales_tax::models::{AuditTrace, ReceiptResult};
/// use rust_decimal::Decimal;
///
/// let result = ReceiptResult {
///     lines: vec![],
///     sales_tax: Decimal::ZERO,
///     total: Decimal::ZERO,
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(result.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptResult {
    /// Lines in input order.
    pub lines: Vec<ReceiptLine>,
    /// The accumulated tax, rounded once.
    pub sales_tax: Decimal,
    /// The sum of every line's price including tax.
    pub total: Decimal,
    /// Per-item audit steps.
    pub audit_trace: AuditTrace,
}

impl ReceiptResult {
    /// Returns true if the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The sum of pre-tax prices.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(|line| line.price).sum()
    }
}
